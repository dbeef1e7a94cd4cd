//! Application configuration
//!
//! Layered as: built-in defaults, then an optional `config.toml` (or an
//! explicit file), then `CONTRACTWATCH_*` environment variables, e.g.
//! `CONTRACTWATCH_THRESHOLDS__CRITICAL_DAYS=14`.

use std::path::Path;

use application::error::ApplicationError;
use application::services::WarningThresholds;
use serde::{Deserialize, Serialize};

use crate::telemetry::LoggingConfig;

/// Environment variable prefix
const ENV_PREFIX: &str = "CONTRACTWATCH";

/// Where contract records are read from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Path to a JSON export of the contract listing
    #[serde(default = "default_contracts_path")]
    pub contracts_path: String,
}

fn default_contracts_path() -> String {
    "contracts.json".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            contracts_path: default_contracts_path(),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Expiry warning thresholds
    #[serde(default)]
    pub thresholds: WarningThresholds,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Contract source configuration
    #[serde(default)]
    pub source: SourceConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file (required when given) and
    /// environment
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file_source = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("source.contracts_path", default_contracts_path())?
            // Load from file if exists
            .add_source(file_source)
            // Override with environment variables (e.g., CONTRACTWATCH_LOGGING__FILTER)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<(), ApplicationError> {
        self.thresholds
            .validate()
            .map_err(|e| ApplicationError::Configuration(e.to_string()))
    }
}
