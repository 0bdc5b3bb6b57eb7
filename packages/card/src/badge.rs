use dioxus::prelude::*;
use storefront_card_core::Badge;

/// The overlay label pinned to the top right of a card's image.
#[component]
pub fn CardBadge(badge: Badge) -> Element {
    rsx! {
        label { class: "card-badge", background_color: badge.background, "{badge.label}" }
    }
}
