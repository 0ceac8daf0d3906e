//! Strata Domain Layer
//!
//! Core concepts for scheduled directory backups with tiered retention.
//! The only external dependency is `chrono` for calendar arithmetic; everything
//! that touches the filesystem, a subprocess or the network lives in other crates
//! behind the traits in [`traits`].
//!
//! ## Key Concepts
//!
//! - **Archive date**: a validated `(year, month, day)` parsed from a `YYYY/MM/DD` directory triple
//! - **Archive layout**: the persisted `{root}/{project}/{YYYY}/{MM}/{DD}/{project}_{stamp}.zip` scheme
//! - **Retention policy**: daily, weekly (Sunday) and monthly (first-of-month) keep windows
//! - **Verdict**: the keep/delete decision for one dated entry
//!
//! ## Architecture
//!
//! - Pure business logic only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod date;
pub mod event;
pub mod layout;
pub mod retention;
pub mod traits;

// Re-exports for convenience
pub use date::{ArchiveDate, DateError};
pub use event::{BackupEvent, RemoteTarget, BACKUP_SUCCESS_STATUS};
pub use layout::{ArchiveLayout, ARCHIVE_EXTENSION};
pub use retention::{KeepReason, RetentionPolicy, Verdict};
