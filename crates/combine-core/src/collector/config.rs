//! Collector configuration

use std::path::PathBuf;

/// Extension matched when none is given
pub const DEFAULT_EXTENSION: &str = ".dart";

/// Output file written to the current directory by default
pub const DEFAULT_OUTPUT: &str = "all_dart_code_combined.txt";

/// Roots walked by default, in order.
///
/// `./presentation/services/api_service.dart` is a file, not a directory,
/// so it contributes nothing. `.` picks up `main.dart` at the project root.
pub const DEFAULT_ROOTS: [&str; 6] = [
    "./data/models",
    "./data/repositories",
    "./domain/providers",
    "./presentation/services/api_service.dart",
    "./presentation/widgets",
    ".",
];

/// Configuration for a collection run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectConfig {
    pub roots: Vec<PathBuf>,
    pub extension: String,
    pub output: PathBuf,
}

impl CollectConfig {
    /// Create a new collection configuration
    #[must_use]
    pub fn new(
        roots: impl IntoIterator<Item = impl Into<PathBuf>>,
        extension: impl Into<String>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
            extension: extension.into(),
            output: output.into(),
        }
    }

    /// Replace the root list
    #[must_use]
    pub fn with_roots(mut self, roots: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        self.roots = roots.into_iter().map(Into::into).collect();
        self
    }

    /// Set the extension suffix to match
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Set the output file path
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROOTS, DEFAULT_EXTENSION, DEFAULT_OUTPUT)
    }
}
