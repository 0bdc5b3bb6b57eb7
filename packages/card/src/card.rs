use crate::{badge::CardBadge, spacer::Spacer};
use dioxus::prelude::*;
use storefront_card_core::RenderTree;

#[derive(Props, Clone, PartialEq)]
pub struct ProductCardProps {
    pub tree: RenderTree,
}

/// Paints one resolved card: image with its badge, then the name/price row and the
/// colors/sale price row, all wrapped in a link to the item.
#[allow(non_snake_case)]
pub fn ProductCard(props: ProductCardProps) -> Element {
    let RenderTree {
        variant,
        href,
        image,
        spacer,
        headline,
        details,
    } = props.tree;
    let price = headline.price;
    let name = headline.name;
    let color_info = details.color_info;

    rsx! {
        a { class: "card-link", href,
            article { class: "card", "data-variant": "{variant}",
                div { class: "card-image",
                    {image.badge.map(|badge| rsx! { CardBadge { badge } })}
                    img { class: "card-photo", alt: image.alt, src: image.src }
                }
                Spacer { size: spacer }
                div { class: "card-row",
                    h3 { class: "card-name", "{name}" }
                    span {
                        class: "card-price",
                        color: price.color,
                        text_decoration: price.decoration.as_css(),
                        "{price.text}"
                    }
                }
                div { class: "card-row",
                    p { class: "card-colors", "{color_info}" }
                    {details.sale_price.map(|sale| rsx! {
                        span { class: "card-sale-price", color: sale.color, "{sale.text}" }
                    })}
                }
            }
        }
    }
}
