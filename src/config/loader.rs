use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

const APP_DIR: &str = "resqlink";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Directory holding the config file and the default log file.
    ///
    /// Uses `dirs::config_dir()`, falling back to the current directory.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    /// Returns the path to the configuration file
    /// (`~/.config/resqlink/config.toml` on Linux).
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::read_from(path)
    }

    /// Loads configuration from a file the user named explicitly.
    ///
    /// Unlike [`Config::load_from`], a missing file is a `ReadError`.
    pub fn read_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The quick donation amount is positive
    /// - The fulfillment step is positive
    /// - The tick rate is positive
    /// - The log filter is not blank
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.defaults.quick_donation_amount == 0 {
            return Err(ConfigError::ValidationError {
                message: "quick_donation_amount must be greater than zero".to_string(),
            });
        }

        if self.defaults.fulfillment_step == 0 {
            return Err(ConfigError::ValidationError {
                message: "fulfillment_step must be greater than zero".to_string(),
            });
        }

        if self.defaults.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "tick_rate_ms must be greater than zero".to_string(),
            });
        }

        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "logging.filter must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Log file path, resolved against the config directory when unset.
    pub fn log_file(&self) -> PathBuf {
        self.logging
            .file
            .clone()
            .unwrap_or_else(|| Self::config_dir().join("resqlink.log"))
    }
}
