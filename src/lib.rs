//! `card-render`: render storefront catalogs to HTML from the command line.

pub mod cli;
pub mod logging;

pub use cli::{Cli, Commands};
