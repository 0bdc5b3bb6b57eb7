use super::CatalogArgs;
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

/// Render a catalog to HTML
#[derive(Clone, Debug, Args)]
pub struct Render {
    #[clap(flatten)]
    pub catalog: CatalogArgs,

    /// Output file, stdout if not present
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Only emit the card grid, without the surrounding page and stylesheet
    #[clap(long)]
    pub fragment: bool,

    /// Title of the generated page
    #[clap(long, default_value = "Catalog")]
    pub title: String,
}

impl Render {
    pub fn render(self) -> anyhow::Result<()> {
        let html = self.to_html()?;

        match &self.output {
            Some(output) => {
                std::fs::write(output, &html)
                    .with_context(|| format!("Failed to write {}", output.display()))?;
                tracing::info!("wrote {}", output.display());
            }
            None => print!("{html}"),
        }

        Ok(())
    }

    pub fn to_html(&self) -> anyhow::Result<String> {
        let trees = self.catalog.resolve()?;

        Ok(match self.fragment {
            true => storefront_card::render_catalog_html(&trees),
            false => storefront_card::render_document(&self.title, &trees),
        })
    }
}
