//! Error types for the backup runner.

use strata_archive::ArchiveError;
use strata_rotation::RotationError;
use thiserror::Error;

/// Result type alias for runner operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that abort a run with a non-zero exit code.
///
/// Upload and notification failures never surface here; they are logged and
/// folded into the [`RunSummary`](crate::pipeline::RunSummary).
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Archive creation failed
    #[error("Backup failed: {0}")]
    Archive(#[from] ArchiveError),

    /// The archive tree is corrupt or unreadable
    #[error("Rotation failed: {0}")]
    Rotation(#[from] RotationError),

    /// Logging could not be initialized
    #[error("Logging error: {0}")]
    Logging(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
