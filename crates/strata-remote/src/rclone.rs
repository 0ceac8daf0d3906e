//! rclone-backed implementation of [`RemoteSync`]

use crate::SyncError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use strata_domain::traits::RemoteSync;
use strata_domain::RemoteTarget;

/// Copies artifacts with `rclone copy`
///
/// The subprocess runs without a deadline; the scheduler that launched the
/// backup owns the overall time bound.
#[derive(Debug, Clone)]
pub struct RcloneSync {
    binary: PathBuf,
}

impl Default for RcloneSync {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("rclone"),
        }
    }
}

impl RcloneSync {
    /// Use `rclone` from `PATH`
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit rclone binary
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// The binary that will be invoked
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    fn args(artifact: &Path, target: &RemoteTarget) -> Vec<OsString> {
        vec![
            OsString::from("copy"),
            artifact.as_os_str().to_os_string(),
            OsString::from(target.to_string()),
        ]
    }
}

impl RemoteSync for RcloneSync {
    type Error = SyncError;

    fn sync(&self, artifact: &Path, target: &RemoteTarget) -> Result<(), SyncError> {
        tracing::debug!(
            "Running {} copy {} {}",
            self.binary.display(),
            artifact.display(),
            target
        );

        let output = Command::new(&self.binary)
            .args(Self::args(artifact, target))
            .output()
            .map_err(|source| SyncError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        if output.status.success() {
            return Ok(());
        }

        let mut stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if stderr.is_empty() {
            stderr = String::from_utf8_lossy(&output.stdout).trim().to_string();
        }

        Err(SyncError::Failed {
            status: output.status.to_string(),
            stderr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_binary() {
        assert_eq!(RcloneSync::new().binary(), Path::new("rclone"));
        assert_eq!(
            RcloneSync::with_binary("/opt/rclone/bin/rclone").binary(),
            Path::new("/opt/rclone/bin/rclone")
        );
    }

    #[test]
    fn test_copy_arguments() {
        let target = RemoteTarget::new("gdrive", "backups/webapp");
        let args = RcloneSync::args(Path::new("/b/webapp/2024/03/15/webapp_x.zip"), &target);
        assert_eq!(
            args,
            vec![
                OsString::from("copy"),
                OsString::from("/b/webapp/2024/03/15/webapp_x.zip"),
                OsString::from("gdrive:backups/webapp"),
            ]
        );
    }

    #[test]
    fn test_missing_binary_is_a_spawn_error() {
        let sync = RcloneSync::with_binary("/nonexistent/strata-test-rclone");
        let err = sync
            .sync(Path::new("a.zip"), &RemoteTarget::new("r", "f"))
            .unwrap_err();
        assert!(matches!(err, SyncError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_status_decides_success() {
        let target = RemoteTarget::new("r", "f");
        assert!(RcloneSync::with_binary("true")
            .sync(Path::new("a.zip"), &target)
            .is_ok());

        let err = RcloneSync::with_binary("false")
            .sync(Path::new("a.zip"), &target)
            .unwrap_err();
        assert!(matches!(err, SyncError::Failed { .. }));
    }
}
