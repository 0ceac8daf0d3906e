//! Output formatting for the CLI.

use crate::error::Result;
use crate::pipeline::RunSummary;
use chrono::NaiveDate;
use colored::*;
use serde::{Deserialize, Serialize};
use strata_domain::{KeepReason, Verdict};
use strata_rotation::{PlannedEntry, RotationReport};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the outcome of a full run.
    pub fn format_run(&self, summary: &RunSummary) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "artifact": summary.artifact.display().to_string(),
                    "uploaded": summary.uploaded,
                    "notified": summary.notified,
                    "rotation": report_json(&summary.rotation),
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => {
                let mut lines = vec![self.success(&format!(
                    "Created backup: {}",
                    summary.artifact.display()
                ))];
                lines.push(if summary.uploaded {
                    self.success("Uploaded")
                } else {
                    self.error("Upload failed")
                });
                if summary.notified {
                    lines.push(self.success("Webhook notification sent"));
                }
                lines.push(self.format_report_table(&summary.rotation));
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format a rotation report.
    pub fn format_report(&self, report: &RotationReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&report_json(report))?),
            OutputFormat::Table => Ok(self.format_report_table(report)),
        }
    }

    fn format_report_table(&self, report: &RotationReport) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Tier", "Kept"]);
        for reason in [KeepReason::Daily, KeepReason::Weekly, KeepReason::Monthly] {
            builder.push_record([reason.as_str().to_string(), report.kept_by(reason).to_string()]);
        }
        let deleted_label = if report.dry_run { "would delete" } else { "deleted" };
        builder.push_record([deleted_label.to_string(), report.total_deleted().to_string()]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let mut lines = vec![self.info(&report.headline()), table.to_string()];
        for failure in &report.failed {
            lines.push(self.warning(&format!(
                "Could not delete {}: {}",
                failure.path.display(),
                failure.error
            )));
        }
        lines.join("\n")
    }

    /// Format a retention plan.
    pub fn format_plan(&self, plan: &[PlannedEntry], today: NaiveDate) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_plan_json(plan, today),
            OutputFormat::Table => Ok(self.format_plan_table(plan, today)),
        }
    }

    fn format_plan_json(&self, plan: &[PlannedEntry], today: NaiveDate) -> Result<String> {
        let entries: Vec<serde_json::Value> = plan
            .iter()
            .map(|planned| {
                serde_json::json!({
                    "date": planned.entry.date.to_string(),
                    "age_days": planned.entry.date.age_days(today),
                    "path": planned.entry.path.display().to_string(),
                    "verdict": verdict_label(&planned.verdict),
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&entries)?)
    }

    fn format_plan_table(&self, plan: &[PlannedEntry], today: NaiveDate) -> String {
        if plan.is_empty() {
            return self.colorize("No backups found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Date", "Age (days)", "Verdict"]);

        for planned in plan {
            let verdict = verdict_label(&planned.verdict);
            let verdict = if planned.verdict.is_delete() {
                self.colorize(&verdict, "red")
            } else {
                self.colorize(&verdict, "green")
            };
            builder.push_record([
                planned.entry.date.to_string(),
                planned.entry.date.age_days(today).to_string(),
                verdict,
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Human label for a verdict, e.g. `keep (weekly)`.
pub fn verdict_label(verdict: &Verdict) -> String {
    match verdict {
        Verdict::Keep(reason) => format!("keep ({})", reason.as_str()),
        Verdict::Delete => "delete".to_string(),
    }
}

fn report_json(report: &RotationReport) -> serde_json::Value {
    serde_json::json!({
        "dry_run": report.dry_run,
        "deleted": report
            .deleted
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>(),
        "kept": {
            "daily": report.kept_by(KeepReason::Daily),
            "weekly": report.kept_by(KeepReason::Weekly),
            "monthly": report.kept_by(KeepReason::Monthly),
        },
        "failed": report
            .failed
            .iter()
            .map(|f| serde_json::json!({
                "path": f.path.display().to_string(),
                "error": f.error,
            }))
            .collect::<Vec<_>>(),
    })
}
