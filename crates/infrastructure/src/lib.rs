//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer and owns process-level
//! concerns: configuration loading and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::JsonFileContractSource;
pub use self::config::{AppConfig, SourceConfig};
pub use telemetry::{LogFormat, LoggingConfig, TelemetryError, init_logging};
