//! Backup configuration.
//!
//! Built once at startup, from the process environment (after `.env` is
//! loaded) or from a TOML file, and passed by reference to every stage.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use strata_domain::{ArchiveLayout, RemoteTarget, RetentionPolicy};

/// Complete configuration for one backup job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupConfig {
    /// Project identifier, namespaces the archive tree and file names
    pub project: String,

    /// Directory to archive
    pub source_dir: PathBuf,

    /// Root of the date-partitioned archive tree
    pub backup_root: PathBuf,

    /// Append-only log file
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// Remote copy destination
    pub remote: RemoteConfig,

    /// Webhook notification settings
    #[serde(default)]
    pub notify: NotifyConfig,

    /// Retention tiers
    #[serde(default)]
    pub retention: RetentionConfig,
}

/// rclone destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// rclone remote name
    pub remote: String,

    /// Folder on the remote
    pub folder: String,

    /// rclone binary
    #[serde(default = "default_rclone_binary")]
    pub binary: PathBuf,
}

/// Webhook notification settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyConfig {
    /// Webhook URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Send a notification after a successful upload
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Request timeout in seconds
    #[serde(default = "default_notify_timeout_secs")]
    pub timeout_secs: u64,
}

/// Retention tier parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RetentionConfig {
    /// Keep everything this many days old or younger
    #[serde(default = "default_retention_days")]
    pub days: u32,

    /// Keep Sundays for this many weeks
    #[serde(default = "default_retention_weeks")]
    pub weeks: u32,

    /// Keep month starts for this many 30-day months
    #[serde(default = "default_retention_months")]
    pub months: u32,
}

impl BackupConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = EnvVars { lookup };

        let config = Self {
            project: vars.required("PROJECT_NAME")?,
            source_dir: PathBuf::from(vars.required("PROJECT_DIR")?),
            backup_root: PathBuf::from(vars.required("BACKUP_DIR")?),
            log_file: vars
                .optional("LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(default_log_file),
            remote: RemoteConfig {
                remote: vars.required("RCLONE_REMOTE")?,
                folder: vars.required("RCLONE_FOLDER")?,
                binary: vars
                    .optional("RCLONE_BIN")
                    .map(PathBuf::from)
                    .unwrap_or_else(default_rclone_binary),
            },
            notify: NotifyConfig {
                url: vars.optional("NOTIFY_URL"),
                enabled: vars
                    .optional("ENABLE_NOTIFY")
                    .map(|value| value.eq_ignore_ascii_case("true"))
                    .unwrap_or(true),
                timeout_secs: vars
                    .parse("NOTIFY_TIMEOUT_SECS")?
                    .unwrap_or_else(default_notify_timeout_secs),
            },
            retention: RetentionConfig {
                days: vars
                    .parse("RETENTION_DAYS")?
                    .unwrap_or_else(default_retention_days),
                weeks: vars
                    .parse("RETENTION_WEEKS")?
                    .unwrap_or_else(default_retention_weeks),
                months: vars
                    .parse("RETENTION_MONTHS")?
                    .unwrap_or_else(default_retention_months),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: BackupConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants the path scheme depends on.
    pub fn validate(&self) -> Result<()> {
        let project = self.project.trim();
        if project.is_empty() {
            return Err(CliError::Config("PROJECT_NAME must not be empty".into()));
        }
        if project.contains(['/', '\\']) || project == "." || project == ".." {
            return Err(CliError::Config(format!(
                "PROJECT_NAME '{}' must be a single path component",
                self.project
            )));
        }
        if self.notify.timeout_secs == 0 {
            return Err(CliError::Config(
                "NOTIFY_TIMEOUT_SECS must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Path scheme for this project.
    pub fn layout(&self) -> ArchiveLayout {
        ArchiveLayout::new(&self.backup_root, &self.project)
    }

    /// Remote copy destination.
    pub fn remote_target(&self) -> RemoteTarget {
        RemoteTarget::new(&self.remote.remote, &self.remote.folder)
    }

    /// Retention policy.
    pub fn policy(&self) -> RetentionPolicy {
        self.retention.policy()
    }
}

impl NotifyConfig {
    /// Request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            url: None,
            enabled: true,
            timeout_secs: default_notify_timeout_secs(),
        }
    }
}

impl RetentionConfig {
    /// Domain policy for these parameters
    pub fn policy(&self) -> RetentionPolicy {
        RetentionPolicy::new(self.days, self.weeks, self.months)
    }
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            days: default_retention_days(),
            weeks: default_retention_weeks(),
            months: default_retention_months(),
        }
    }
}

/// Environment access with trimming and typed parsing.
struct EnvVars<F> {
    lookup: F,
}

impl<F> EnvVars<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn optional(&self, name: &str) -> Option<String> {
        (self.lookup)(name)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    fn required(&self, name: &str) -> Result<String> {
        self.optional(name)
            .ok_or_else(|| CliError::Config(format!("{name} is required")))
    }

    fn parse<T>(&self, name: &str) -> Result<Option<T>>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        match self.optional(name) {
            Some(value) => value.parse::<T>().map(Some).map_err(|error| {
                CliError::Config(format!("invalid {name} value '{value}': {error}"))
            }),
            None => Ok(None),
        }
    }
}

fn default_log_file() -> PathBuf {
    PathBuf::from("backup.log")
}

fn default_rclone_binary() -> PathBuf {
    PathBuf::from("rclone")
}

fn default_true() -> bool {
    true
}

fn default_notify_timeout_secs() -> u64 {
    10
}

fn default_retention_days() -> u32 {
    7
}

fn default_retention_weeks() -> u32 {
    4
}

fn default_retention_months() -> u32 {
    3
}
