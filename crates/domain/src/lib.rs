//! Domain layer for ContractWatch
//!
//! Contains the contract record, its closed vocabularies (status, risk level,
//! warning category) and domain errors. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
