//! Rotate command implementation.

use crate::cli::RotateArgs;
use crate::config::BackupConfig;
use crate::error::Result;
use crate::output::Formatter;
use chrono::{Local, NaiveTime};
use strata_rotation::{RotationReport, Rotator};

/// Execute the retention engine on its own.
pub fn execute_rotate(
    args: RotateArgs,
    config: &BackupConfig,
    formatter: &Formatter,
) -> Result<RotationReport> {
    let now = match args.as_of {
        Some(date) => date.and_time(NaiveTime::MIN),
        None => Local::now().naive_local(),
    };

    let rotator = Rotator::new(config.policy()).with_dry_run(args.dry_run);
    let report = rotator.rotate(&config.layout().project_root(), now)?;

    println!("{}", formatter.format_report(&report)?);
    Ok(report)
}
