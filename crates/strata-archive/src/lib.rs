//! Strata Archive
//!
//! Builds one deflate-compressed zip artifact per backup run.
//!
//! Every regular file under the source directory is stored under its path
//! relative to the source root. The artifact lands at the deterministic path
//! given by [`ArchiveLayout::artifact_path`](strata_domain::ArchiveLayout::artifact_path).
//!
//! ```no_run
//! use chrono::Local;
//! use strata_archive::ZipArchiveBuilder;
//! use strata_domain::traits::ArchiveBuilder;
//! use strata_domain::ArchiveLayout;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let layout = ArchiveLayout::new("/var/backups", "webapp");
//! let artifact = ZipArchiveBuilder::new().build(
//!     "/srv/webapp".as_ref(),
//!     &layout,
//!     Local::now().naive_local(),
//! )?;
//! println!("Created backup: {}", artifact.display());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod builder;
mod error;

pub use builder::ZipArchiveBuilder;
pub use error::ArchiveError;
