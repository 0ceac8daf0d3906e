//! Strata Remote
//!
//! Collaborators that leave the machine:
//! - [`RcloneSync`]: copies an artifact to an rclone remote (`rclone copy <file> <remote>:<folder>`)
//! - [`WebhookNotifier`]: posts a JSON success event to a webhook with a bounded timeout
//!
//! Neither retries. Callers decide what a failure means for the rest of the run.

#![warn(missing_docs)]

mod error;
mod rclone;
mod webhook;

pub use error::{NotifyError, SyncError};
pub use rclone::RcloneSync;
pub use webhook::{WebhookNotifier, WebhookPayload, DEFAULT_NOTIFY_TIMEOUT};
