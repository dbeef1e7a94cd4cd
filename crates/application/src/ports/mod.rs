//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod contract_source;

pub use contract_source::ContractSourcePort;
#[cfg(test)]
pub use contract_source::MockContractSourcePort;
