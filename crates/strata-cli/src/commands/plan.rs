//! Plan command implementation.

use crate::cli::PlanArgs;
use crate::config::BackupConfig;
use crate::error::Result;
use crate::output::Formatter;
use chrono::Local;
use strata_rotation::{PlannedEntry, Rotator};

/// Print the retention verdict of every backup day.
pub fn execute_plan(
    args: PlanArgs,
    config: &BackupConfig,
    formatter: &Formatter,
) -> Result<Vec<PlannedEntry>> {
    let today = args.as_of.unwrap_or_else(|| Local::now().date_naive());

    let rotator = Rotator::new(config.policy());
    let entries = rotator.scan(&config.layout().project_root())?;
    let plan = rotator.plan(entries, today);

    println!("{}", formatter.format_plan(&plan, today)?);
    Ok(plan)
}
