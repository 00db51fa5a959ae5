//! Loading and first-run creation of the TOML configuration file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::app_config::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, AppConfig};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform offers no configuration directory.
    #[error("no configuration directory available on this platform")]
    NoConfigDir,

    /// The configuration file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that was read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The default configuration could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// File that was written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The default configuration could not be serialized.
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A value is out of range.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// What is wrong.
        reason: String,
    },
}

/// Location of the configuration file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store for `config.toml` in the platform configuration directory.
    ///
    /// # Errors
    /// Returns `ConfigError::NoConfigDir` if the platform has none.
    pub fn platform() -> Result<Self, ConfigError> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| Self::at(dirs.config_dir().join(CONFIG_FILE_NAME)))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Store for an explicit file.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the configuration file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the configuration.
    ///
    /// A missing file is created with defaults. A malformed file is left
    /// untouched and defaults are used for this run.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read or the default cannot be written.
    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "Config file not found, writing defaults");
            let config = AppConfig::default();
            self.write_default(&config)?;
            return Ok(config);
        }

        let content = fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;

        match toml::from_str::<AppConfig>(&content) {
            Ok(config) => {
                debug!(path = %self.path.display(), "Loaded config file");
                Ok(config)
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Malformed config file, using defaults");
                Ok(AppConfig::default())
            }
        }
    }

    fn write_default(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(config)?;
        let write_error = |source| ConfigError::Write {
            path: self.path.clone(),
            source,
        };

        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir).map_err(write_error)?;

        // Written beside the target so the rename stays on one filesystem.
        let mut staged = tempfile::NamedTempFile::new_in(dir).map_err(write_error)?;
        staged.write_all(content.as_bytes()).map_err(write_error)?;
        staged.persist(&self.path).map_err(|e| write_error(e.error))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_written_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("albumgen").join(CONFIG_FILE_NAME);
        let store = ConfigStore::at(&path);

        let config = store.load().unwrap();

        assert_eq!(config.fetch.header_threshold, 5000);
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("[fetch]"));
        assert!(written.contains("header_threshold = 5000"));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[fetch]\nmax_attempts = 7\n").unwrap();

        let config = ConfigStore::at(&path).load().unwrap();

        assert_eq!(config.fetch.max_attempts, 7);
        assert_eq!(config.fetch.retry_delay_ms, 500);
    }

    #[test]
    fn test_malformed_file_left_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "max_attempts = [").unwrap();

        let config = ConfigStore::at(&path).load().unwrap();

        assert_eq!(config.fetch.max_attempts, 3);
        assert_eq!(fs::read_to_string(&path).unwrap(), "max_attempts = [");
    }

    #[test]
    fn test_written_default_reloads_equal() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::at(dir.path().join(CONFIG_FILE_NAME));

        let created = store.load().unwrap();
        let reloaded = store.load().unwrap();

        assert_eq!(created.fetch, reloaded.fetch);
        assert_eq!(created.source, reloaded.source);
        assert_eq!(store.path(), dir.path().join(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_unreadable_path_is_read_error() {
        let dir = tempdir().unwrap();

        let err = ConfigStore::at(dir.path()).load().unwrap_err();

        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
