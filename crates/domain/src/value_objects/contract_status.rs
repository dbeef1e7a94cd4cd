//! Contract status value object
//!
//! Represents where a contract stands in its lifecycle. Only active
//! contracts are subject to expiry and risk warnings.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Lifecycle status of a contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    /// Contract is in force
    #[default]
    Active,
    /// Contract has run out without renewal
    Expired,
    /// Contract was superseded by a renewal
    Renewed,
    /// Contract is not yet in force
    Pending,
}

impl ContractStatus {
    /// Check if the contract is still in force
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Wire value used by the backend
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Expired => "expired",
            Self::Renewed => "renewed",
            Self::Pending => "pending",
        }
    }

    /// Get a human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Expired => "Expired",
            Self::Renewed => "Renewed",
            Self::Pending => "Pending",
        }
    }

    /// All statuses in backend order
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Active, Self::Expired, Self::Renewed, Self::Pending]
    }
}

impl fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for ContractStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "expired" => Ok(Self::Expired),
            "renewed" => Ok(Self::Renewed),
            "pending" => Ok(Self::Pending),
            other => Err(DomainError::invalid_input(format!(
                "unknown contract status '{other}'"
            ))),
        }
    }
}
