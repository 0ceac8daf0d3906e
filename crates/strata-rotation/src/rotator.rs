//! Core rotation implementation: scan, plan, prune

use crate::{RotationError, RotationReport};
use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use std::path::{Path, PathBuf};
use strata_domain::date::{is_month_or_day_component, is_year_component};
use strata_domain::{ArchiveDate, DateError, RetentionPolicy, Verdict};

/// A day directory found in the archive tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatedEntry {
    /// Calendar day the directory stands for
    pub date: ArchiveDate,

    /// Absolute path of the day directory
    pub path: PathBuf,
}

/// A dated entry together with its retention verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedEntry {
    /// The scanned entry
    pub entry: DatedEntry,

    /// Keep or delete
    pub verdict: Verdict,
}

/// Retention engine for one project's archive tree
///
/// Responsible for:
/// - Walking `root/YYYY/MM/DD` and validating every day directory
/// - Deciding, per day, whether any retention tier still protects it
/// - Removing unprotected day directories and reporting the outcome
///
/// # Examples
///
/// ```no_run
/// use chrono::Local;
/// use strata_domain::RetentionPolicy;
/// use strata_rotation::Rotator;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let rotator = Rotator::new(RetentionPolicy::default());
/// let report = rotator.rotate("/var/backups/webapp".as_ref(), Local::now().naive_local())?;
/// println!("{}", report.summary());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Rotator {
    policy: RetentionPolicy,
    dry_run: bool,
}

impl Rotator {
    /// Create a rotator for the given policy
    pub fn new(policy: RetentionPolicy) -> Self {
        Self {
            policy,
            dry_run: false,
        }
    }

    /// Dry-run mode: report what would be deleted without deleting
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// The retention policy in force
    pub fn policy(&self) -> &RetentionPolicy {
        &self.policy
    }

    /// Collect every day directory under `root`, sorted by date
    ///
    /// A missing root yields no entries. Files and names that do not look like
    /// `YYYY`, `MM` or `DD` are skipped. A well-shaped path that is not a real
    /// calendar day aborts the scan.
    pub fn scan(&self, root: &Path) -> Result<Vec<DatedEntry>, RotationError> {
        if !root.is_dir() {
            tracing::debug!("Archive root {} does not exist, nothing to scan", root.display());
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();

        for (year, year_path) in subdirectories(root)? {
            if !is_year_component(&year) {
                tracing::debug!("Skipping non-year directory {}", year_path.display());
                continue;
            }
            for (month, month_path) in subdirectories(&year_path)? {
                if !is_month_or_day_component(&month) {
                    tracing::debug!("Skipping non-month directory {}", month_path.display());
                    continue;
                }
                for (day, day_path) in subdirectories(&month_path)? {
                    if !is_month_or_day_component(&day) {
                        tracing::debug!("Skipping non-day directory {}", day_path.display());
                        continue;
                    }

                    let date = ArchiveDate::from_components(&year, &month, &day).map_err(
                        |source: DateError| RotationError::InvalidDate {
                            path: day_path.clone(),
                            source,
                        },
                    )?;
                    entries.push(DatedEntry {
                        date,
                        path: day_path,
                    });
                }
            }
        }

        entries.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.path.cmp(&b.path)));
        Ok(entries)
    }

    /// Attach a verdict to every entry, as of `today`
    pub fn plan(&self, entries: Vec<DatedEntry>, today: NaiveDate) -> Vec<PlannedEntry> {
        entries
            .into_iter()
            .map(|entry| {
                let verdict = self.policy.evaluate(entry.date, today);
                PlannedEntry { entry, verdict }
            })
            .collect()
    }

    /// Prune the archive tree rooted at `root` as of `now`
    ///
    /// The whole tree is scanned and validated before anything is removed.
    /// A failed removal is logged and recorded; the remaining entries are still
    /// processed.
    pub fn rotate(&self, root: &Path, now: NaiveDateTime) -> Result<RotationReport, RotationError> {
        let entries = self.scan(root)?;
        let planned = self.plan(entries, now.date());
        let mut report = RotationReport::new(self.dry_run);

        for PlannedEntry { entry, verdict } in planned {
            match verdict {
                Verdict::Keep(reason) => {
                    tracing::debug!("Keeping {} ({})", entry.date, reason.as_str());
                    report.record_kept(reason);
                }
                Verdict::Delete if self.dry_run => {
                    tracing::info!("DRY RUN: Would delete {}", entry.path.display());
                    report.record_deleted(entry.path);
                }
                Verdict::Delete => match fs::remove_dir_all(&entry.path) {
                    Ok(()) => {
                        tracing::debug!("Deleted {}", entry.path.display());
                        report.record_deleted(entry.path);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to delete {}: {}", entry.path.display(), e);
                        report.record_failure(entry.path, e);
                    }
                },
            }
        }

        tracing::info!("{}", report.headline());
        Ok(report)
    }
}

/// List the directories directly under `dir` (symlinks followed) with their UTF-8 names
fn subdirectories(dir: &Path) -> Result<Vec<(String, PathBuf)>, RotationError> {
    let io_error = |source: std::io::Error| RotationError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let entry = entry.map_err(io_error)?;
        // Follows symlinks; a dangling link is not a directory
        let is_dir = fs::metadata(entry.path()).map(|m| m.is_dir()).unwrap_or(false);
        if !is_dir {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => dirs.push((name, entry.path())),
            Err(_) => tracing::debug!("Skipping non UTF-8 name {}", entry.path().display()),
        }
    }
    Ok(dirs)
}
