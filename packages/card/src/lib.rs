#![doc = include_str!("../README.md")]

mod badge;
mod card;
mod grid;
mod page;
mod spacer;
mod ssr;
mod styles;

pub use badge::CardBadge;
pub use card::{ProductCard, ProductCardProps};
pub use grid::CardGrid;
pub use page::CatalogPage;
pub use spacer::{Axis, Spacer};
pub use ssr::{render_card_html, render_catalog_html, render_document};
pub use styles::{card_stylesheet, CardStyles};

pub use storefront_card_core as model;
