pub mod inspect;
pub mod render;

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use storefront_card::model::{
    config::CONFIG_FILE_NAME, parse_catalog, CardAttributes, CardConfig, CardRenderer, Clock,
    FixedClock, RenderTree, SystemClock,
};

/// Render storefront product cards.
#[derive(Parser, Debug)]
#[clap(name = "card-render", version)]
pub struct Cli {
    #[clap(subcommand)]
    pub action: Commands,

    /// Enable verbose logging.
    #[clap(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render every card in a catalog to HTML.
    Render(render::Render),

    /// Print the resolved render trees as JSON.
    Inspect(inspect::Inspect),
}

impl Commands {
    pub fn run(self) -> anyhow::Result<()> {
        match self {
            Commands::Render(cmd) => cmd.render(),
            Commands::Inspect(cmd) => cmd.inspect(),
        }
    }
}

/// Arguments shared by every command that loads a catalog.
#[derive(Args, Clone, Debug)]
pub struct CatalogArgs {
    /// Catalog JSON: a single item or an array of items
    pub catalog: PathBuf,

    /// Card config file [default: Card.toml]
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Treat this RFC 3339 instant as "now" when checking release dates
    #[clap(long)]
    pub now: Option<DateTime<Utc>>,
}

impl CatalogArgs {
    pub fn load_config(&self) -> anyhow::Result<CardConfig> {
        let path = self
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
        Ok(CardConfig::load(path)?)
    }

    pub fn load_catalog(&self) -> anyhow::Result<Vec<CardAttributes>> {
        let contents = std::fs::read_to_string(&self.catalog)
            .with_context(|| format!("Failed to read catalog {}", self.catalog.display()))?;
        Ok(parse_catalog(&contents)?)
    }

    /// Resolve every card in the catalog against a single "now".
    pub fn resolve(&self) -> anyhow::Result<Vec<RenderTree>> {
        let config = self.load_config()?;
        let items = self.load_catalog()?;

        let now = self.now.unwrap_or_else(|| SystemClock.now());
        let renderer = CardRenderer::with_clock(&config, FixedClock(now));
        let trees = renderer.render_all(&items)?;

        tracing::info!(
            cards = trees.len(),
            "resolved catalog {}",
            self.catalog.display()
        );
        Ok(trees)
    }
}
