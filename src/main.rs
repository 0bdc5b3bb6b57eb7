use clap::Parser;
use storefront_card_cli::{logging, Cli};

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    logging::initialize(args.verbose);

    args.action.run()
}
