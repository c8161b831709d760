//! Logging setup

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter directive for the given verbosity
#[must_use]
pub fn filter_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

/// Install the global subscriber. Logs go to stderr; stdout is left for the
/// completion message.
pub fn setup_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::new(filter_level(verbose)))
        .init();
}
