//! Collect command: Combine every matched file into the output file

use std::path::Path;

use anyhow::Result;
use combine_core::{CollectConfig, CollectSummary, Collector};
use tracing::info;

/// Message printed once the output has been written
#[must_use]
pub fn success_message(output: &Path) -> String {
    format!("✅ All Dart files have been combined into: {}", output.display())
}

/// Run the collect command
///
/// # Errors
/// Returns an error if any root cannot be walked, a matched file cannot be
/// read, or the output cannot be written.
pub fn run(config: &CollectConfig) -> Result<CollectSummary> {
    info!(
        "Collecting {} files from: {}",
        config.extension,
        config
            .roots
            .iter()
            .map(|root| root.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let summary = Collector::new(config.clone()).run()?;

    println!("{}", success_message(&summary.output));
    Ok(summary)
}
