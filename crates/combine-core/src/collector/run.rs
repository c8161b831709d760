//! Collection run: walk, read and write in a single pass

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::{CollectConfig, CollectError, CombinedWriter, Walker};

/// Results of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectSummary {
    pub output: PathBuf,
    pub files_combined: usize,
    pub bytes_written: u64,
}

/// Combines every matched file under the configured roots into one output
#[derive(Debug, Clone)]
pub struct Collector {
    config: CollectConfig,
}

impl Collector {
    /// Create a new collector
    #[must_use]
    pub fn new(config: CollectConfig) -> Self {
        Self { config }
    }

    /// Get the configuration in use
    #[must_use]
    pub fn config(&self) -> &CollectConfig {
        &self.config
    }

    /// Create (or truncate) the output file and combine all matched files into it.
    ///
    /// # Errors
    /// Returns an error if the output cannot be created, a root cannot be
    /// walked, a matched file cannot be read, or writing fails. The first
    /// error aborts the run.
    pub fn run(&self) -> Result<CollectSummary, CollectError> {
        let output = &self.config.output;
        let file = File::create(output).map_err(|source| CollectError::CreateOutput {
            path: output.clone(),
            source,
        })?;

        info!(
            "Combining {} files from {} roots into {}",
            self.config.extension,
            self.config.roots.len(),
            output.display()
        );

        let (files_combined, bytes_written) = self.collect_into(BufWriter::new(file))?;

        info!(
            "✓ Combined {} files ({} bytes) into {}",
            files_combined,
            bytes_written,
            output.display()
        );

        Ok(CollectSummary {
            output: output.clone(),
            files_combined,
            bytes_written,
        })
    }

    /// Combine all matched files into `out`, returning the file and byte counts.
    ///
    /// # Errors
    /// Returns an error if a root cannot be walked, a matched file cannot be
    /// read, or writing to `out` fails.
    pub fn collect_into<W: Write>(&self, out: W) -> Result<(usize, u64), CollectError> {
        let walker = Walker::new(self.config.roots.clone(), self.config.extension.as_str());
        let mut writer = CombinedWriter::new(out);

        for matched in walker.scan() {
            let matched = matched?;
            let text = matched.read_text()?;
            writer.write_file(&matched.path, &text)?;
            log_combined(&matched.path, text.len());
        }

        let counts = (writer.files_written(), writer.bytes_written());
        writer.finish()?;
        Ok(counts)
    }
}

fn log_combined(path: &Path, len: usize) {
    debug!("Combined {} ({} bytes)", path.display(), len);
}
