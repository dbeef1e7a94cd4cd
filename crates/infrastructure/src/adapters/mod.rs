//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod json_contract_source;

pub use json_contract_source::JsonFileContractSource;
