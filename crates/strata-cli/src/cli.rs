//! CLI command definitions and argument parsing.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strata - scheduled project backups with tiered retention.
#[derive(Debug, Parser)]
#[command(name = "strata")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Load configuration from a TOML file instead of the environment
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Dotenv file to load (defaults to `.env` when present)
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Archive, upload, notify and rotate (default)
    Run,

    /// Apply the retention policy to the archive tree
    Rotate(RotateArgs),

    /// Show the retention verdict for every backup day without deleting
    Plan(PlanArgs),
}

/// Arguments for the rotate command.
#[derive(Debug, Parser)]
pub struct RotateArgs {
    /// Report what would be deleted without deleting it
    #[arg(long)]
    pub dry_run: bool,

    /// Evaluate ages against this date instead of today (YYYY-MM-DD)
    #[arg(long)]
    pub as_of: Option<NaiveDate>,
}

/// Arguments for the plan command.
#[derive(Debug, Parser)]
pub struct PlanArgs {
    /// Evaluate ages against this date instead of today (YYYY-MM-DD)
    #[arg(long)]
    pub as_of: Option<NaiveDate>,
}

impl From<CliFormat> for crate::output::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::output::OutputFormat::Table,
            CliFormat::Json => crate::output::OutputFormat::Json,
        }
    }
}
