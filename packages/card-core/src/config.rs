use crate::{
    error::Result,
    format::PriceFormat,
    recency::RecencyWindow,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "Card.toml";

/// Knobs for how cards are rendered, usually read from `Card.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Days after release during which an item gets the "Just Released!" badge.
    pub recent_window_days: u32,

    /// Prefix of the navigation target; the identifier is appended after a `/`.
    pub link_prefix: String,

    pub currency_symbol: String,

    pub minor_units_per_major: u32,

    /// Gap between the image and the text rows, in px.
    pub spacer_size: u32,
}

impl Default for CardConfig {
    fn default() -> Self {
        let price = PriceFormat::default();
        Self {
            recent_window_days: RecencyWindow::DEFAULT_DAYS,
            link_prefix: "/item".to_string(),
            currency_symbol: price.currency_symbol,
            minor_units_per_major: price.minor_units_per_major,
            spacer_size: 12,
        }
    }
}

impl CardConfig {
    /// Load the config from a file, falling back to the defaults when it doesn't exist.
    pub fn load(path: impl AsRef<Path>) -> Result<CardConfig> {
        let path = path.as_ref();

        if !path.is_file() {
            tracing::warn!(
                "Config file: `{}` not found; using default config.",
                path.display()
            );
            return Ok(CardConfig::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(?config, "loaded card config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<CardConfig> {
        Ok(toml::from_str(contents)?)
    }

    pub fn recency_window(&self) -> RecencyWindow {
        RecencyWindow::days(self.recent_window_days)
    }

    pub fn price_format(&self) -> PriceFormat {
        PriceFormat {
            currency_symbol: self.currency_symbol.clone(),
            minor_units_per_major: self.minor_units_per_major,
        }
    }

    pub fn href_for(&self, identifier: &str) -> String {
        format!("{}/{identifier}", self.link_prefix.trim_end_matches('/'))
    }
}
