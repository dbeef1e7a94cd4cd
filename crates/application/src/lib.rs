//! Application layer - Use cases and orchestration
//!
//! Contains the expiry/risk classification rules, the summary formatter and
//! the early-warning use cases, plus the port through which contract
//! records are obtained.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
