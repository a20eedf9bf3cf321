//! Error type for the boundary of the word pipeline.
//!
//! The ordered set itself cannot fail; only reading the input source and
//! writing the destination can.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure while reading the input text or writing the sorted words.
///
/// # Examples
///
/// ```
/// use std::io;
/// use wordsort::pipeline::PipelineError;
///
/// let error = PipelineError::read("missing.txt", io::Error::from(io::ErrorKind::NotFound));
/// assert!(error.to_string().starts_with("failed to read missing.txt"));
/// ```
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The input source is missing or unreadable.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Path of the input source.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The output destination could not be created or written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// Path of the output destination.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl PipelineError {
    /// Creates a [`PipelineError::Read`].
    #[must_use]
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a [`PipelineError::Write`].
    #[must_use]
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Returns the path the failing operation was working on.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } => path,
        }
    }
}
