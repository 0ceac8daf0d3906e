//! The backup run: archive, upload, notify, rotate.

use crate::config::BackupConfig;
use crate::error::{CliError, Result};
use chrono::NaiveDateTime;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use strata_domain::traits::{ArchiveBuilder, Notifier, RemoteSync};
use strata_domain::BackupEvent;
use strata_rotation::{RotationReport, Rotator};

/// Timestamp layout of the `date` field in notifications.
pub const EVENT_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Outcome of one completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Artifact written by this run
    pub artifact: PathBuf,

    /// The remote copy succeeded
    pub uploaded: bool,

    /// A notification was delivered
    pub notified: bool,

    /// Retention outcome
    pub rotation: RotationReport,
}

/// Sequential backup pipeline.
///
/// Archive creation and rotation failures abort the run. Upload and
/// notification failures are logged and the run carries on; rotation runs
/// whether or not the upload succeeded.
pub struct BackupPipeline<'a, B, S, N> {
    config: &'a BackupConfig,
    builder: B,
    sync: S,
    notifier: Option<N>,
}

impl<'a, B, S, N> BackupPipeline<'a, B, S, N>
where
    B: ArchiveBuilder,
    B::Error: Into<CliError>,
    S: RemoteSync,
    S::Error: Display,
    N: Notifier,
    N::Error: Display,
{
    /// Assemble a pipeline. `notifier` is `None` when no webhook is configured.
    pub fn new(config: &'a BackupConfig, builder: B, sync: S, notifier: Option<N>) -> Self {
        Self {
            config,
            builder,
            sync,
            notifier,
        }
    }

    /// Execute one run at `now`.
    pub fn run(&self, now: NaiveDateTime) -> Result<RunSummary> {
        let layout = self.config.layout();

        let artifact = self
            .builder
            .build(&self.config.source_dir, &layout, now)
            .map_err(Into::<CliError>::into)?;
        tracing::info!("Created backup: {}", artifact.display());

        let uploaded = self.upload(&artifact);

        let notified = if uploaded && self.config.notify.enabled {
            self.announce(&artifact, now)
        } else {
            false
        };

        let rotator = Rotator::new(self.config.policy());
        let rotation = rotator.rotate(&layout.project_root(), now)?;

        tracing::info!("Backup process completed.");

        Ok(RunSummary {
            artifact,
            uploaded,
            notified,
            rotation,
        })
    }

    fn upload(&self, artifact: &Path) -> bool {
        let target = self.config.remote_target();
        match self.sync.sync(artifact, &target) {
            Ok(()) => {
                tracing::info!("Uploaded to {}: {}", target, file_name(artifact));
                true
            }
            Err(e) => {
                tracing::error!("Upload failed: {}", e);
                false
            }
        }
    }

    fn announce(&self, artifact: &Path, now: NaiveDateTime) -> bool {
        let Some(notifier) = &self.notifier else {
            tracing::warn!("Notifications enabled but NOTIFY_URL is not set; skipping webhook.");
            return false;
        };

        let event = BackupEvent {
            project: self.config.project.clone(),
            date: now.format(EVENT_DATE_FORMAT).to_string(),
            file: file_name(artifact),
        };

        match notifier.notify(&event) {
            Ok(()) => {
                tracing::info!("Webhook notification sent.");
                true
            }
            Err(e) => {
                tracing::warn!("Webhook failed: {}", e);
                false
            }
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
