use crate::{
    card::{ProductCard, ProductCardProps},
    grid::{CardGrid, CardGridProps},
    page::{CatalogPage, CatalogPageProps},
};
use dioxus::prelude::*;
use storefront_card_core::RenderTree;

/// Render a single card to an HTML fragment.
pub fn render_card_html(tree: &RenderTree) -> String {
    let mut dom = VirtualDom::new_with_props(ProductCard, ProductCardProps { tree: tree.clone() });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Render a grid of cards to an HTML fragment.
pub fn render_catalog_html(trees: &[RenderTree]) -> String {
    let mut dom = VirtualDom::new_with_props(
        CardGrid,
        CardGridProps {
            trees: trees.to_vec(),
        },
    );
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);
    tracing::debug!(cards = trees.len(), bytes = html.len(), "rendered catalog");
    html
}

/// Wrap a catalog in a standalone HTML page, stylesheet included.
pub fn render_document(page_title: &str, trees: &[RenderTree]) -> String {
    let mut dom = VirtualDom::new_with_props(
        CatalogPage,
        CatalogPageProps {
            page_title: page_title.to_string(),
            trees: trees.to_vec(),
        },
    );
    dom.rebuild_in_place();
    format!("<!DOCTYPE html>\n<html>{}</html>\n", dioxus_ssr::render(&dom))
}
