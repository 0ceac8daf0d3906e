//! Error types for remote operations

use std::path::PathBuf;
use thiserror::Error;

/// Remote copy errors
#[derive(Debug, Error)]
pub enum SyncError {
    /// The transfer tool could not be started
    #[error("Failed to run {}: {source}", binary.display())]
    Spawn {
        /// Binary that was invoked
        binary: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The transfer tool ran and reported failure
    #[error("{status}: {stderr}")]
    Failed {
        /// Rendered exit status
        status: String,
        /// Diagnostic output captured from the tool
        stderr: String,
    },
}

/// Webhook notification errors
#[derive(Debug, Error)]
pub enum NotifyError {
    /// HTTP client could not be constructed
    #[error("Client error: {0}")]
    Client(String),

    /// The endpoint did not answer within the timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Connection error (network, DNS, etc.)
    #[error("Connection error: {0}")]
    Connection(String),

    /// The endpoint answered with a non-2xx status
    #[error("HTTP {status}")]
    Status {
        /// Status code returned
        status: u16,
    },

    /// Any other request failure
    #[error("Request error: {0}")]
    Request(String),
}

impl From<reqwest::Error> for NotifyError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            NotifyError::Timeout(e.to_string())
        } else if e.is_connect() {
            NotifyError::Connection(e.to_string())
        } else if e.is_status() {
            match e.status() {
                Some(status) => NotifyError::Status {
                    status: status.as_u16(),
                },
                None => NotifyError::Request(e.to_string()),
            }
        } else {
            NotifyError::Request(e.to_string())
        }
    }
}
