#![doc = include_str!("../README.md")]

pub mod attributes;
pub mod config;
pub mod error;
pub mod format;
pub mod recency;
pub mod render;
pub mod theme;
pub mod variant;

pub use crate::attributes::{parse_catalog, CardAttributes, RawCardAttributes};
pub use crate::config::CardConfig;
pub use crate::error::{CardError, Result};
pub use crate::recency::{Clock, FixedClock, RecencyWindow, SystemClock};
pub use crate::render::CardRenderer;
pub use crate::render::RenderTree;
pub use crate::variant::{Badge, DisplayVariant, TextDecoration, VariantStyle};
