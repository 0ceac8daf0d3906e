//! Archive layout - the on-disk path scheme for artifacts
//!
//! `{backup_root}/{project}/{YYYY}/{MM}/{DD}/{project}_{YYYYMMDD_HHMMSS}.zip`
//!
//! The rotation scan parses this exact structure, so it must stay stable.

use crate::date::ArchiveDate;
use chrono::NaiveDateTime;
use std::path::PathBuf;

/// File extension of every artifact
pub const ARCHIVE_EXTENSION: &str = "zip";

/// Path scheme for one project's archive tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveLayout {
    backup_root: PathBuf,
    project: String,
}

impl ArchiveLayout {
    /// Create a layout rooted at `backup_root` for `project`
    pub fn new(backup_root: impl Into<PathBuf>, project: impl Into<String>) -> Self {
        Self {
            backup_root: backup_root.into(),
            project: project.into(),
        }
    }

    /// The project identifier
    pub fn project(&self) -> &str {
        &self.project
    }
    /// Root of this project's date-partitioned tree
    pub fn project_root(&self) -> PathBuf {
        self.backup_root.join(&self.project)
    }

    /// Directory holding every artifact created on `date`
    pub fn day_dir(&self, date: ArchiveDate) -> PathBuf {
        let (year, month, day) = date.path_components();
        self.project_root().join(year).join(month).join(day)
    }

    /// Artifact file name for a creation instant
    pub fn artifact_name(&self, instant: NaiveDateTime) -> String {
        format!(
            "{}_{}.{}",
            self.project,
            instant.format("%Y%m%d_%H%M%S"),
            ARCHIVE_EXTENSION
        )
    }

    /// Full artifact path for a creation instant
    pub fn artifact_path(&self, instant: NaiveDateTime) -> PathBuf {
        self.day_dir(ArchiveDate::new(instant.date()))
            .join(self.artifact_name(instant))
    }
}
