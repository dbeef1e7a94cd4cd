//! Contract source port
//!
//! Defines how contract records reach the application. The records are
//! owned by the contract backend; this side only reads them.

use async_trait::async_trait;
use domain::{Contract, ContractId};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for reading contract records
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ContractSourcePort: Send + Sync {
    /// List every known contract
    async fn list_contracts(&self) -> Result<Vec<Contract>, ApplicationError>;

    /// Get a single contract by ID
    async fn get_contract(&self, id: ContractId) -> Result<Option<Contract>, ApplicationError> {
        let contracts = self.list_contracts().await?;
        Ok(contracts.into_iter().find(|contract| contract.id == id))
    }
}
