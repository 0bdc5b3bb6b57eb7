use dioxus::prelude::*;
use storefront_card_core::theme::{COLORS, WEIGHTS};

/// Static styles for every card class. Variant-dependent colors are inlined by the
/// components instead.
pub fn card_stylesheet() -> String {
    format!(
        "\
.card-link {{ text-decoration: none; color: inherit; }}
.card-image {{ position: relative; padding-right: 4px; }}
.card-photo {{ width: 100%; border-radius: 16px 16px 4px 4px; }}
.card-row {{ font-size: 1rem; display: flex; justify-content: space-between; }}
.card-name {{ font-weight: {medium}; color: {gray900}; }}
.card-colors {{ color: {gray700}; }}
.card-sale-price {{ font-weight: {medium}; }}
.card-badge {{ color: {white}; padding: 0px 10px; height: 32px; line-height: 32px; font-weight: 700; border-radius: 2px; font-size: 0.875rem; position: absolute; top: 12px; right: -4px; }}
.card-grid {{ display: flex; flex-wrap: wrap; gap: 32px; }}
.card-grid .card-link {{ flex: 1 1 340px; }}
",
        medium = WEIGHTS.medium,
        white = COLORS.white,
        gray700 = COLORS.gray.g700,
        gray900 = COLORS.gray.g900,
    )
}

#[component]
pub fn CardStyles() -> Element {
    let css = card_stylesheet();
    rsx! {
        style { "{css}" }
    }
}
