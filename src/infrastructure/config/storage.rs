//! Config file storage in the platform config directory.

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::app_config::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, AppConfig};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration storage failures.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    #[error("config path has no parent directory: {0}")]
    NoParent(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// How a loaded configuration was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from an existing file.
    File,
    /// No file existed; defaults were written.
    CreatedDefault,
    /// The file did not parse; defaults are used and the file is left alone.
    InvalidFallback(String),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => f.write_str("file"),
            Self::CreatedDefault => f.write_str("created default"),
            Self::InvalidFallback(_) => f.write_str("defaults after parse error"),
        }
    }
}

/// A configuration together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The parsed or default configuration.
    pub config: AppConfig,
    /// File the configuration belongs to.
    pub path: PathBuf,
    /// How it was obtained.
    pub source: ConfigSource,
}

/// Reads and writes `config.toml`.
#[derive(Debug)]
pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// Uses the platform config directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConfigDirNotFound` when no home directory is known.
    pub fn new() -> Result<Self, ConfigError> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| Self::with_dir(dirs.config_dir().to_path_buf()))
            .ok_or(ConfigError::ConfigDirNotFound)
    }

    /// Uses `config_dir` instead of the platform directory.
    #[must_use]
    pub const fn with_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Directory holding the default config file.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Path of the config file, honoring `path_override`.
    #[must_use]
    pub fn config_path(&self, path_override: Option<&Path>) -> PathBuf {
        path_override.map_or_else(|| self.config_dir.join(CONFIG_FILE_NAME), Path::to_path_buf)
    }

    /// Loads the configuration, writing defaults when the file is missing.
    ///
    /// A file that fails to parse is not overwritten.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or the defaults
    /// cannot be written.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
        let path = self.config_path(path_override);

        if !path.exists() {
            info!(path = %path.display(), "Config file not found, writing defaults");
            let config = AppConfig::default();
            self.write_config(&path, &config)?;
            return Ok(LoadedConfig {
                config,
                path,
                source: ConfigSource::CreatedDefault,
            });
        }

        let content = fs::read_to_string(&path)?;
        let (config, source) = match toml::from_str::<AppConfig>(&content) {
            Ok(config) => (config, ConfigSource::File),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Config file is invalid, using defaults");
                (AppConfig::default(), ConfigSource::InvalidFallback(e.to_string()))
            }
        };
        debug!(path = %path.display(), %source, "Config loaded");

        Ok(LoadedConfig {
            config,
            path,
            source,
        })
    }

    /// Writes `config` to the default config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization or the write fails.
    pub fn save_config(&self, config: &AppConfig) -> Result<PathBuf, ConfigError> {
        let path = self.config_path(None);
        self.write_config(&path, config)?;
        Ok(path)
    }

    // Temp file in the target directory, then rename, so readers never see a partial file.
    #[allow(clippy::unused_self)]
    fn write_config(&self, path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(config)?;
        let dir = path
            .parent()
            .ok_or_else(|| ConfigError::NoParent(path.to_path_buf()))?;
        fs::create_dir_all(dir)?;

        let mut staged = tempfile::NamedTempFile::new_in(dir)?;
        staged.write_all(content.as_bytes())?;
        staged.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}
