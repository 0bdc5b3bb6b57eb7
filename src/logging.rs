//! Log setup for the binary. Library code only emits `tracing` events.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_ENV: &str = "CARD_LOG";

/// Install the global subscriber.
///
/// `CARD_LOG` takes precedence; otherwise we log at `info`, or `debug` with `--verbose`.
/// Logs go to stderr so rendered HTML on stdout stays clean.
pub fn initialize(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            true => "info,storefront_card=debug,storefront_card_core=debug,storefront_card_cli=debug",
            false => "info",
        })
    });

    let fmt_layer = fmt::layer().with_writer(std::io::stderr).with_target(verbose);

    // A second call (tests, embedding) keeps the first subscriber.
    _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
