//! Collector module: File discovery and concatenation
//!
//! Responsible for walking the configured roots, matching files by
//! extension, and writing them to the combined output in walk order.

mod config;
mod error;
mod run;
mod walker;
mod writer;

pub use config::{CollectConfig, DEFAULT_EXTENSION, DEFAULT_OUTPUT, DEFAULT_ROOTS};
pub use error::CollectError;
pub use run::{CollectSummary, Collector};
pub use walker::{MatchedFile, Walker};
pub use writer::{CombinedWriter, header_line};

#[cfg(test)]
mod tests;
