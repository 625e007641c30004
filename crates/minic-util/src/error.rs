//! Fatal error types for source loading.
//!
//! These errors abort a run before any scanning takes place. They are
//! deliberately separate from [`crate::Diagnostic`]: a diagnostic describes a
//! problem in the input text and the scan continues, while a [`LoadError`]
//! means there is no input text to scan at all.

use std::path::PathBuf;
use thiserror::Error;

/// Error raised while loading source text from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read (missing, unreadable, or other I/O failure).
    #[error("could not read '{path}': {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The file's bytes are not valid UTF-8.
    #[error("'{path}' is not valid UTF-8 text")]
    InvalidUtf8 {
        /// Path that was being decoded.
        path: PathBuf,
    },
}
