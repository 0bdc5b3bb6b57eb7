use super::CatalogArgs;
use clap::Args;

/// Print the resolved render trees as JSON
#[derive(Clone, Debug, Args)]
pub struct Inspect {
    #[clap(flatten)]
    pub catalog: CatalogArgs,
}

impl Inspect {
    pub fn inspect(self) -> anyhow::Result<()> {
        println!("{}", self.to_json()?);
        Ok(())
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        let trees = self.catalog.resolve()?;
        Ok(serde_json::to_string_pretty(&trees)?)
    }
}
