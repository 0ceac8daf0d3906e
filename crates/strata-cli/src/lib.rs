//! Strata CLI library.
//!
//! Configuration loading, logging setup, the backup pipeline and the
//! `strata` command implementations.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod pipeline;

pub use cli::{Cli, Command};
pub use config::BackupConfig;
pub use error::{CliError, Result};
pub use output::{Formatter, OutputFormat};
pub use pipeline::{BackupPipeline, RunSummary};
