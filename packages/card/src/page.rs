use crate::{grid::CardGrid, styles::CardStyles};
use dioxus::prelude::*;
use storefront_card_core::RenderTree;

/// Head and body of a standalone catalog page. The `<html>` shell is written around it by
/// [`render_document`](crate::render_document).
#[component]
pub fn CatalogPage(page_title: String, trees: Vec<RenderTree>) -> Element {
    rsx! {
        head {
            meta { charset: "utf-8" }
            title { "{page_title}" }
            CardStyles {}
        }
        body {
            CardGrid { trees }
        }
    }
}
