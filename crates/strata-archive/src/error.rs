//! Error types for archive creation

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building an artifact
///
/// All of them are fatal for the backup run.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// The source path is missing or not a directory
    #[error("Source {} is not a directory", path.display())]
    SourceNotDirectory {
        /// Configured source path
        path: PathBuf,
    },

    /// A file or directory could not be read or written
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The source tree could not be walked
    #[error("Failed to walk source tree: {0}")]
    Walk(#[from] walkdir::Error),

    /// The zip writer failed
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

impl ArchiveError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ArchiveError::Io {
            path: path.into(),
            source,
        }
    }
}
