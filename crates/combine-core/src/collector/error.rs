//! Errors raised while collecting files

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during a collection run
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("Failed to walk {}: {source}", .root.display())]
    Walk {
        root: PathBuf,
        source: walkdir::Error,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to create output file {}: {source}", .path.display())]
    CreateOutput { path: PathBuf, source: io::Error },

    #[error("Failed to write output: {0}")]
    Write(#[from] io::Error),
}
