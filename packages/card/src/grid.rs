use crate::card::ProductCard;
use dioxus::prelude::*;
use storefront_card_core::RenderTree;

/// Lays out many cards, keyed by their navigation target.
#[component]
pub fn CardGrid(trees: Vec<RenderTree>) -> Element {
    rsx! {
        section { class: "card-grid",
            {trees.into_iter().map(|tree| {
                let key = tree.href.clone();
                rsx! { ProductCard { key: "{key}", tree } }
            })}
        }
    }
}
