//! Webhook implementation of [`Notifier`]

use crate::NotifyError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use strata_domain::traits::Notifier;
use strata_domain::BackupEvent;

/// Upper bound on a notification round trip
pub const DEFAULT_NOTIFY_TIMEOUT: Duration = Duration::from_secs(10);

/// JSON body posted to the webhook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookPayload {
    /// Project identifier
    pub project: String,
    /// ISO-8601 timestamp
    pub date: String,
    /// Always `BackupSuccessful`
    pub status: String,
    /// Artifact base file name
    pub file: String,
}

impl From<&BackupEvent> for WebhookPayload {
    fn from(event: &BackupEvent) -> Self {
        Self {
            project: event.project.clone(),
            date: event.date.clone(),
            status: event.status().to_string(),
            file: event.file.clone(),
        }
    }
}

/// Posts backup events to an HTTP endpoint
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    http_client: reqwest::blocking::Client,
    url: String,
}

impl WebhookNotifier {
    /// Create a notifier for `url` with the default 10 second timeout
    pub fn new(url: impl Into<String>) -> Result<Self, NotifyError> {
        Self::with_timeout(url, DEFAULT_NOTIFY_TIMEOUT)
    }

    /// Create a notifier with an explicit request timeout
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self, NotifyError> {
        let http_client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NotifyError::Client(e.to_string()))?;

        Ok(Self {
            http_client,
            url: url.into(),
        })
    }

    /// Target URL
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Notifier for WebhookNotifier {
    type Error = NotifyError;

    fn notify(&self, event: &BackupEvent) -> Result<(), NotifyError> {
        let payload = WebhookPayload::from(event);

        self.http_client
            .post(&self.url)
            .json(&payload)
            .send()?
            .error_for_status()?;

        Ok(())
    }
}
