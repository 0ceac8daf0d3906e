//! Values exchanged with the remote collaborators

use std::fmt;

/// Status literal carried by every success notification
pub const BACKUP_SUCCESS_STATUS: &str = "BackupSuccessful";

/// Destination descriptor for a remote copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteTarget {
    /// Configured remote name
    pub remote: String,

    /// Folder on the remote
    pub folder: String,
}

impl RemoteTarget {
    /// Create a new remote target
    pub fn new(remote: impl Into<String>, folder: impl Into<String>) -> Self {
        Self {
            remote: remote.into(),
            folder: folder.into(),
        }
    }
}

impl fmt::Display for RemoteTarget {
    /// Rendered as `remote:folder`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.remote, self.folder)
    }
}

/// A successful backup, as reported to the notifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupEvent {
    /// Project identifier
    pub project: String,

    /// ISO-8601 timestamp of the notification
    pub date: String,

    /// Base file name of the uploaded artifact
    pub file: String,
}

impl BackupEvent {
    /// The fixed status literal
    pub fn status(&self) -> &'static str {
        BACKUP_SUCCESS_STATUS
    }
}
