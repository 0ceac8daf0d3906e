//! Error types for rotation

use std::path::PathBuf;
use strata_domain::DateError;
use thiserror::Error;

/// Errors that abort a rotation run
///
/// Per-entry deletion failures are not errors; they are collected in the
/// [`RotationReport`](crate::RotationReport).
#[derive(Error, Debug)]
pub enum RotationError {
    /// A well-shaped `YYYY/MM/DD` path does not name a real day
    #[error("Invalid archive date at {}: {source}", path.display())]
    InvalidDate {
        /// The offending day directory
        path: PathBuf,
        /// Parse failure
        #[source]
        source: DateError,
    },

    /// A directory of the archive tree could not be listed
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Directory being listed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
