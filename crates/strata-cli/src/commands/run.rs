//! Run command implementation.

use crate::config::BackupConfig;
use crate::error::Result;
use crate::output::Formatter;
use crate::pipeline::{BackupPipeline, RunSummary};
use chrono::Local;
use strata_archive::ZipArchiveBuilder;
use strata_remote::{RcloneSync, WebhookNotifier};

/// Execute the full backup pipeline.
pub fn execute_run(config: &BackupConfig, formatter: &Formatter) -> Result<RunSummary> {
    let notifier = webhook_notifier(config);
    let pipeline = BackupPipeline::new(
        config,
        ZipArchiveBuilder::new(),
        RcloneSync::with_binary(config.remote.binary.clone()),
        notifier,
    );

    let summary = pipeline.run(Local::now().naive_local())?;
    println!("{}", formatter.format_run(&summary)?);

    Ok(summary)
}

/// Build the webhook client when notifications are on and a URL is set.
fn webhook_notifier(config: &BackupConfig) -> Option<WebhookNotifier> {
    if !config.notify.enabled {
        return None;
    }
    let url = config.notify.url.as_deref()?;

    match WebhookNotifier::with_timeout(url, config.notify.timeout()) {
        Ok(notifier) => Some(notifier),
        Err(e) => {
            tracing::warn!("Webhook client unavailable: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(extra: &[(&'static str, &'static str)]) -> BackupConfig {
        let mut vars = HashMap::from([
            ("PROJECT_NAME", "webapp"),
            ("PROJECT_DIR", "/srv/webapp"),
            ("BACKUP_DIR", "/var/backups"),
            ("RCLONE_REMOTE", "gdrive"),
            ("RCLONE_FOLDER", "backups"),
        ]);
        vars.extend(extra.iter().copied());
        BackupConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string())).unwrap()
    }

    #[test]
    fn test_no_notifier_without_url() {
        assert!(webhook_notifier(&config(&[])).is_none());
    }

    #[test]
    fn test_no_notifier_when_disabled() {
        let config = config(&[
            ("NOTIFY_URL", "http://127.0.0.1:9/hook"),
            ("ENABLE_NOTIFY", "false"),
        ]);
        assert!(webhook_notifier(&config).is_none());
    }

    #[test]
    fn test_notifier_with_url() {
        let config = config(&[("NOTIFY_URL", "http://127.0.0.1:9/hook")]);
        let notifier = webhook_notifier(&config).unwrap();
        assert_eq!(notifier.url(), "http://127.0.0.1:9/hook");
    }
}
