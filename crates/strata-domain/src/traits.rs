//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the backup pipeline and the
//! collaborators that do the I/O. Implementations live in other crates
//! (strata-archive, strata-remote); tests substitute fakes.

use crate::{ArchiveLayout, BackupEvent, RemoteTarget};
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

/// Trait for producing one compressed artifact from a source directory
///
/// Implemented by the infrastructure layer (strata-archive)
pub trait ArchiveBuilder {
    /// Error type for build operations
    type Error;

    /// Archive every regular file under `source` to `layout.artifact_path(instant)`
    ///
    /// Returns the path of the written artifact.
    fn build(
        &self,
        source: &Path,
        layout: &ArchiveLayout,
        instant: NaiveDateTime,
    ) -> Result<PathBuf, Self::Error>;
}

/// Trait for copying an artifact to remote storage
///
/// Implemented by the infrastructure layer (strata-remote)
pub trait RemoteSync {
    /// Error type for sync operations, carrying the tool's diagnostics
    type Error;

    /// Copy `artifact` to `target`
    fn sync(&self, artifact: &Path, target: &RemoteTarget) -> Result<(), Self::Error>;
}

/// Trait for announcing a successful backup
///
/// Implemented by the infrastructure layer (strata-remote)
pub trait Notifier {
    /// Error type for notify operations
    type Error;

    /// Deliver `event` to the configured endpoint
    fn notify(&self, event: &BackupEvent) -> Result<(), Self::Error>;
}
