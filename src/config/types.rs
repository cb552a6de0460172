use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::Role;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Startup defaults for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Role the dashboard opens with (default: ngo).
    #[serde(default)]
    pub role: Role,
    /// Amount given by the quick-donate key (default: 100).
    #[serde(default = "default_quick_donation_amount")]
    pub quick_donation_amount: u64,
    /// Currency recorded on quick donations (default: USD).
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Donate anonymously from the quick-donate key (default: false).
    #[serde(default)]
    pub anonymous_donations: bool,
    /// Fulfillment step for the fulfill key, clamped to what remains (default: 100).
    #[serde(default = "default_fulfillment_step")]
    pub fulfillment_step: u64,
    /// UI tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// JSON seed loaded at startup when `--seed` is not given.
    #[serde(default)]
    pub seed_path: Option<PathBuf>,
}

/// Log output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Log file used while the terminal UI owns stdout.
    /// Defaults to `resqlink.log` next to the config file.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_quick_donation_amount() -> u64 {
    100
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_fulfillment_step() -> u64 {
    100
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            role: Role::default(),
            quick_donation_amount: default_quick_donation_amount(),
            currency: default_currency(),
            anonymous_donations: false,
            fulfillment_step: default_fulfillment_step(),
            tick_rate_ms: default_tick_rate_ms(),
            seed_path: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            file: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            logging: LoggingConfig::default(),
        }
    }
}
