//! Report of a single rotation run

use std::collections::BTreeMap;
use std::path::PathBuf;
use strata_domain::KeepReason;

/// A day directory that could not be removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionFailure {
    /// Day directory that survived
    pub path: PathBuf,

    /// Rendered I/O error
    pub error: String,
}

/// Outcome of a rotation run
///
/// Tracks entries deleted, entries kept per retention tier and deletions that
/// failed. Purely observational: nothing in the pipeline branches on it.
#[derive(Debug, Clone, Default)]
pub struct RotationReport {
    /// Day directories removed (or, in dry-run mode, that would be removed)
    pub deleted: Vec<PathBuf>,

    /// Entries kept per tier
    pub kept: BTreeMap<KeepReason, usize>,

    /// Deletions that failed
    pub failed: Vec<DeletionFailure>,

    /// True if nothing was actually removed
    pub dry_run: bool,
}

impl RotationReport {
    /// Create an empty report
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    /// Record a kept entry
    pub fn record_kept(&mut self, reason: KeepReason) {
        *self.kept.entry(reason).or_insert(0) += 1;
    }

    /// Record a removed entry
    pub fn record_deleted(&mut self, path: PathBuf) {
        self.deleted.push(path);
    }

    /// Record a failed removal
    pub fn record_failure(&mut self, path: PathBuf, error: impl ToString) {
        self.failed.push(DeletionFailure {
            path,
            error: error.to_string(),
        });
    }

    /// Number of entries deleted
    pub fn total_deleted(&self) -> usize {
        self.deleted.len()
    }

    /// Number of entries kept across all tiers
    pub fn total_kept(&self) -> usize {
        self.kept.values().sum()
    }

    /// Number of entries kept by one tier
    pub fn kept_by(&self, reason: KeepReason) -> usize {
        self.kept.get(&reason).copied().unwrap_or(0)
    }

    /// One-line outcome, as written to the backup log
    pub fn headline(&self) -> String {
        match (self.dry_run, self.total_deleted()) {
            (false, 0) => "No old backups deleted.".to_string(),
            (false, n) => format!("Deleted {} old backups.", n),
            (true, 0) => "Dry run: no old backups would be deleted.".to_string(),
            (true, n) => format!("Dry run: would delete {} old backups.", n),
        }
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Rotation Summary".to_string(),
            "================".to_string(),
            self.headline(),
            String::new(),
        ];

        if !self.kept.is_empty() {
            lines.push("Kept by tier:".to_string());
            for (reason, count) in &self.kept {
                lines.push(format!("  {}: {}", reason.as_str(), count));
            }
            lines.push(format!("  Total: {}", self.total_kept()));
            lines.push(String::new());
        }

        if !self.failed.is_empty() {
            lines.push("Failed deletions:".to_string());
            for failure in &self.failed {
                lines.push(format!("  {}: {}", failure.path.display(), failure.error));
            }
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_creation() {
        let report = RotationReport::new(false);
        assert_eq!(report.total_deleted(), 0);
        assert_eq!(report.total_kept(), 0);
        assert!(report.failed.is_empty());
        assert!(!report.dry_run);
    }

    #[test]
    fn test_record_kept() {
        let mut report = RotationReport::new(false);
        report.record_kept(KeepReason::Daily);
        report.record_kept(KeepReason::Daily);
        report.record_kept(KeepReason::Monthly);

        assert_eq!(report.kept_by(KeepReason::Daily), 2);
        assert_eq!(report.kept_by(KeepReason::Weekly), 0);
        assert_eq!(report.kept_by(KeepReason::Monthly), 1);
        assert_eq!(report.total_kept(), 3);
    }

    #[test]
    fn test_headline() {
        let mut report = RotationReport::new(false);
        assert_eq!(report.headline(), "No old backups deleted.");

        report.record_deleted(PathBuf::from("/b/p/2023/11/15"));
        report.record_deleted(PathBuf::from("/b/p/2023/11/16"));
        assert_eq!(report.headline(), "Deleted 2 old backups.");
    }

    #[test]
    fn test_dry_run_headline() {
        let mut report = RotationReport::new(true);
        assert_eq!(report.headline(), "Dry run: no old backups would be deleted.");

        report.record_deleted(PathBuf::from("/b/p/2023/11/15"));
        assert_eq!(report.headline(), "Dry run: would delete 1 old backups.");
    }

    #[test]
    fn test_summary() {
        let mut report = RotationReport::new(false);
        report.record_kept(KeepReason::Weekly);
        report.record_deleted(PathBuf::from("/b/p/2023/11/15"));
        report.record_failure(PathBuf::from("/b/p/2023/11/16"), "permission denied");

        let summary = report.summary();
        assert!(summary.contains("Deleted 1 old backups."));
        assert!(summary.contains("weekly: 1"));
        assert!(summary.contains("/b/p/2023/11/16: permission denied"));
    }
}
