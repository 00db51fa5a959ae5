//! Application configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::services::{DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY, RetryPolicy};
use crate::infrastructure::catalog::DEFAULT_CATALOG_BASE;
use crate::infrastructure::image::{DEFAULT_HEADER_THRESHOLD, HeaderFetchConfig};

use super::args::CliArgs;
use super::storage::ConfigError;

pub(super) const APP_NAME: &str = "albumgen";
pub(super) const APP_QUALIFIER: &str = "com";
pub(super) const APP_ORGANIZATION: &str = "albumshuffler";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, read from file and overridden by CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path. Logs go to stderr when unset.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Image header fetching.
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Catalog source.
    #[serde(default)]
    pub source: SourceConfig,
}

/// Image header fetching configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Bytes read from an image before the download is abandoned.
    #[serde(default = "default_header_threshold")]
    pub header_threshold: usize,

    /// Total attempts per image.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Pause between attempts in milliseconds.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,

    /// Whole-request timeout for image downloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            header_threshold: default_header_threshold(),
            max_attempts: default_max_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
            request_timeout_secs: None,
        }
    }
}

impl FetchConfig {
    /// Retry policy for image fetches.
    #[must_use]
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts, Duration::from_millis(self.retry_delay_ms))
    }

    /// Header fetcher settings using `user_agent`.
    #[must_use]
    pub fn header_fetch_config(&self, user_agent: &str) -> HeaderFetchConfig {
        HeaderFetchConfig {
            header_threshold: self.header_threshold,
            timeout_secs: self.request_timeout_secs,
            user_agent: user_agent.to_string(),
        }
    }
}

/// Catalog source configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Base URL of the published catalog.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// User agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
        }
    }
}

const fn default_header_threshold() -> usize {
    DEFAULT_HEADER_THRESHOLD
}

const fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

#[allow(clippy::cast_possible_truncation)]
const fn default_retry_delay_ms() -> u64 {
    DEFAULT_RETRY_DELAY.as_millis() as u64
}

fn default_base_url() -> String {
    DEFAULT_CATALOG_BASE.to_string()
}

fn default_user_agent() -> String {
    format!("{APP_NAME}/{}", crate::VERSION)
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(config_path) = &args.config {
            self.config = Some(config_path.clone());
        }
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(base_url) = &args.source_url {
            self.source.base_url.clone_from(base_url);
        }
        if let Some(threshold) = args.header_threshold {
            self.fetch.header_threshold = threshold;
        }
        if let Some(max_attempts) = args.max_attempts {
            self.fetch.max_attempts = max_attempts;
        }
        if let Some(delay) = args.retry_delay_ms {
            self.fetch.retry_delay_ms = delay;
        }
    }

    /// Checks value ranges.
    ///
    /// # Errors
    /// Returns `ConfigError::Invalid` for a zero threshold or zero attempts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fetch.header_threshold == 0 {
            return Err(ConfigError::Invalid {
                reason: "fetch.header_threshold must be at least 1".to_string(),
            });
        }
        if self.fetch.max_attempts == 0 {
            return Err(ConfigError::Invalid {
                reason: "fetch.max_attempts must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            fetch: FetchConfig::default(),
            source: SourceConfig::default(),
        }
    }
}
