//! Tests for setup_logging function
//!
//! Since the global tracing subscriber can only be initialized once per process,
//! these tests validate the filter selection and subscriber construction.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::logging::filter_level;

#[test]
fn test_verbose_selects_debug() {
    assert_eq!(filter_level(true), "debug");
}

#[test]
fn test_quiet_selects_info() {
    assert_eq!(filter_level(false), "info");
}

#[test]
fn test_env_filter_accepts_selected_levels() {
    for verbose in [false, true] {
        let level = filter_level(verbose);
        let debug_str = format!("{:?}", EnvFilter::new(level));
        assert!(debug_str.to_lowercase().contains(level));
    }
}

#[test]
fn test_registry_with_stderr_fmt_layer_creation() {
    let _subscriber = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::new(filter_level(false)));
}
