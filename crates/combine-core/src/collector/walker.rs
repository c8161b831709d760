//! File walker: Discovers matching files under each root

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use super::CollectError;

/// A file whose name ends with the configured extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedFile {
    pub path: PathBuf,
}

impl MatchedFile {
    /// Read the whole file as UTF-8 text with line endings normalised to `\n`
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or is not valid UTF-8.
    pub fn read_text(&self) -> Result<String, CollectError> {
        fs::read_to_string(&self.path)
            .map(normalize_newlines)
            .map_err(|source| CollectError::Read {
                path: self.path.clone(),
                source,
            })
    }
}

/// Walker over an ordered list of roots
#[derive(Debug)]
pub struct Walker {
    roots: Vec<PathBuf>,
    extension: String,
}

impl Walker {
    /// Create a new walker for the given roots and extension suffix
    #[must_use]
    pub fn new(roots: Vec<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            roots,
            extension: extension.into(),
        }
    }

    /// Lazily walk every root in order and yield the matching files.
    ///
    /// Inside each directory its files come first, then its subdirectories
    /// are descended in the order the filesystem lists them. A root that is
    /// a plain file yields nothing. Errors reading a root or any directory
    /// below it are yielded in place and the caller decides whether to stop.
    pub fn scan(&self) -> impl Iterator<Item = Result<MatchedFile, CollectError>> + '_ {
        self.roots.iter().flat_map(move |root| self.scan_root(root))
    }

    /// Get the roots being walked
    #[must_use]
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Get the extension suffix being matched
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    fn scan_root<'a>(
        &'a self,
        root: &'a Path,
    ) -> impl Iterator<Item = Result<MatchedFile, CollectError>> + 'a {
        let walk = if is_plain_file(root) {
            debug!("Skipping root {}: not a directory", root.display());
            None
        } else {
            Some(
                WalkDir::new(root)
                    .follow_links(false)
                    .sort_by(files_before_directories),
            )
        };

        walk.into_iter()
            .flatten()
            .filter_map(move |entry| match entry {
                Ok(entry) => self.match_entry(entry).map(Ok),
                Err(source) => Some(Err(CollectError::Walk {
                    root: root.to_path_buf(),
                    source,
                })),
            })
    }

    fn match_entry(&self, entry: DirEntry) -> Option<MatchedFile> {
        if is_directory(&entry) {
            return None;
        }
        let matched = entry
            .file_name()
            .to_string_lossy()
            .ends_with(self.extension.as_str());
        matched.then(|| MatchedFile {
            path: entry.into_path(),
        })
    }
}

/// True when the path exists and is not a directory (after following links)
fn is_plain_file(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|meta| !meta.is_dir())
}

/// Directories, including links to directories, which are listed but not followed
fn is_directory(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}

// Stable sort: keeps the filesystem order within files and within directories.
fn files_before_directories(a: &DirEntry, b: &DirEntry) -> Ordering {
    is_directory(a).cmp(&is_directory(b))
}

fn normalize_newlines(text: String) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text
    }
}
