//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Contract source (file, export, backend) could not be read
    #[error("Contract source error: {0}")]
    Source(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Whether the error points at a defective contract record rather than
    /// at the environment
    pub const fn is_data_defect(&self) -> bool {
        matches!(self, Self::Domain(DomainError::InvalidInput(_)))
    }
}
