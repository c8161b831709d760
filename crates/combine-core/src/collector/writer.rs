//! Combined output writer

use std::io::{self, Write};
use std::path::Path;

/// Header written before each file's content
#[must_use]
pub fn header_line(path: &Path) -> String {
    format!("\n\n// === File: {} ===\n", path.display())
}

/// Appends files to the combined output, each behind its header line
#[derive(Debug)]
pub struct CombinedWriter<W: Write> {
    inner: W,
    files_written: usize,
    bytes_written: u64,
}

impl<W: Write> CombinedWriter<W> {
    /// Wrap a writer
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            files_written: 0,
            bytes_written: 0,
        }
    }

    /// Write the header for `path`, then `text`, then a newline
    ///
    /// # Errors
    /// Returns an error if the underlying writer fails.
    pub fn write_file(&mut self, path: &Path, text: &str) -> io::Result<()> {
        let header = header_line(path);
        self.inner.write_all(header.as_bytes())?;
        self.inner.write_all(text.as_bytes())?;
        self.inner.write_all(b"\n")?;

        self.files_written += 1;
        self.bytes_written += (header.len() + text.len() + 1) as u64;
        Ok(())
    }

    /// Number of files written so far
    #[must_use]
    pub fn files_written(&self) -> usize {
        self.files_written
    }

    /// Number of bytes written so far
    #[must_use]
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Flush and hand back the inner writer
    ///
    /// # Errors
    /// Returns an error if flushing fails.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
