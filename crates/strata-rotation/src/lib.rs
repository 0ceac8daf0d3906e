//! Strata Rotation
//!
//! Retention engine for the date-partitioned archive tree.
//!
//! # Overview
//!
//! Artifacts live under `{backup_root}/{project}/{YYYY}/{MM}/{DD}/`. One day
//! directory is one dated entry. A rotation run:
//! - **Scans** the three-level tree, skipping foreign files and names, and
//!   failing on a path that is not a real calendar day
//! - **Plans** a keep/delete verdict per entry from the [`RetentionPolicy`](strata_domain::RetentionPolicy)
//! - **Prunes** every unprotected day directory, recursively
//! - **Reports** the outcome in a [`RotationReport`]
//!
//! ## Retention tiers
//!
//! | Tier | Protects | Window |
//! |------|----------|--------|
//! | **Daily** | every entry | `RETENTION_DAYS` |
//! | **Weekly** | Sundays | `RETENTION_WEEKS * 7` days |
//! | **Monthly** | first of the month | `RETENTION_MONTHS * 30` days |
//!
//! # Usage
//!
//! ```no_run
//! use chrono::Local;
//! use strata_domain::RetentionPolicy;
//! use strata_rotation::Rotator;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let rotator = Rotator::new(RetentionPolicy::new(7, 4, 3));
//! let report = rotator.rotate("/var/backups/webapp".as_ref(), Local::now().naive_local())?;
//!
//! println!("Deleted: {}", report.total_deleted());
//! println!("Kept: {}", report.total_kept());
//! # Ok(())
//! # }
//! ```
//!
//! Dry-run mode reports would-be deletions without touching the tree:
//!
//! ```
//! use strata_domain::RetentionPolicy;
//! use strata_rotation::Rotator;
//!
//! let rotator = Rotator::new(RetentionPolicy::default()).with_dry_run(true);
//! assert_eq!(rotator.policy().days, 7);
//! ```

#![warn(missing_docs)]

mod error;
mod report;
mod rotator;

pub use error::RotationError;
pub use report::{DeletionFailure, RotationReport};
pub use rotator::{DatedEntry, PlannedEntry, Rotator};
