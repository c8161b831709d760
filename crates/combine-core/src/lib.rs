//! combine-core: Core library for combining source files
//!
//! Walks a fixed list of root paths, picks out files whose name ends with
//! a given extension, and concatenates their text into a single output file.
//! Every file is preceded by a header line naming where it came from:
//!
//! ```text
//!
//!
//! // === File: ./data/models/user.dart ===
//! class User {}
//! ```

pub mod collector;

// Re-export commonly used types
pub use collector::{
    CollectConfig, CollectError, CollectSummary, CombinedWriter, Collector, MatchedFile, Walker,
    header_line,
};
