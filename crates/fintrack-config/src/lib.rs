//! Configuration management for fintrack
//!
//! Loads and validates reporting configuration from YAML files. Every field
//! has a default that reproduces the stock reporting behavior, so an empty
//! file (or no file at all) is a valid configuration.

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use error::ConfigError;

/// Reporting engine settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportingConfig {
    /// Number of entries in the top-categories view
    #[serde(default = "default_top_categories")]
    pub top_categories: usize,
    /// Length in days of the trailing summary window
    #[serde(default = "default_summary_window_days")]
    pub summary_window_days: i64,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            top_categories: default_top_categories(),
            summary_window_days: default_summary_window_days(),
        }
    }
}

fn default_top_categories() -> usize {
    5
}

fn default_summary_window_days() -> i64 {
    30
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Reporting engine settings
    #[serde(default)]
    pub reporting: ReportingConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound {
                    path: path.to_string_lossy().to_string(),
                }
            } else {
                ConfigError::IoError
            }
        })?;

        let config: Config =
            serde_yaml::from_str(&content).map_err(|_| ConfigError::InvalidYaml)?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reporting.top_categories == 0 {
            return Err(ConfigError::InvalidValue {
                field: "reporting.top_categories".to_string(),
                reason: "Top category count must be greater than 0".to_string(),
            });
        }

        if self.reporting.summary_window_days <= 0 {
            return Err(ConfigError::InvalidValue {
                field: "reporting.summary_window_days".to_string(),
                reason: "Summary window must be at least one day".to_string(),
            });
        }

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }
}

// ==================== Tests ====================
