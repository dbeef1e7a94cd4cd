//! Contract list filters
//!
//! Filters offered by the contract list: by lifecycle status, by the
//! warnings membership test, by dashboard bucket and by exact risk level.

use std::fmt;

use chrono::NaiveDate;
use domain::{Contract, ContractStatus, DomainError, RiskLevel};

use super::expiry_classifier::{ExpiryRiskClassifier, days_until_expiry};
use super::warning_buckets::{WarningBucket, matches_bucket};

/// A contract list filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContractFilter {
    /// Every contract
    #[default]
    All,
    /// Contracts with the given status
    Status(ContractStatus),
    /// Active contracts that pass the warnings membership test
    Warnings,
    /// Active contracts in a dashboard bucket
    Bucket(WarningBucket),
    /// Contracts with exactly this risk level
    Risk(RiskLevel),
}

impl ContractFilter {
    /// Message shown when the filter leaves nothing
    #[must_use]
    pub const fn empty_message(&self) -> &'static str {
        match self {
            Self::All => "No contracts found. Upload your first contract!",
            Self::Status(_) => "No contracts with this status.",
            Self::Warnings => "No warnings! All active contracts are in good standing.",
            Self::Bucket(WarningBucket::Critical) => "No critical contracts found!",
            Self::Bucket(_) => "No contracts in this category.",
            Self::Risk(_) => "No contracts with this risk level.",
        }
    }

    /// Apply the filter, preserving input order
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInput` when a warnings or bucket filter
    /// meets an active contract without a usable end date.
    pub fn apply<'a>(
        &self,
        contracts: &'a [Contract],
        classifier: &ExpiryRiskClassifier,
        now: NaiveDate,
    ) -> Result<Vec<&'a Contract>, DomainError> {
        let mut selected = Vec::new();

        for contract in contracts {
            let keep = match self {
                Self::All => true,
                Self::Status(status) => contract.status == *status,
                Self::Risk(level) => contract.risk_level() == Some(*level),
                Self::Warnings => {
                    contract.status.is_active()
                        && classifier.classify_contract(contract, now)?.has_warning()
                },
                Self::Bucket(bucket) => {
                    contract.status.is_active()
                        && matches_bucket(
                            *bucket,
                            days_until_expiry(contract.end_date()?, now),
                            contract.risk_level(),
                            classifier.thresholds(),
                        )
                },
            };
            if keep {
                selected.push(contract);
            }
        }

        Ok(selected)
    }
}

impl fmt::Display for ContractFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Status(status) => write!(f, "{}", status.as_str()),
            Self::Warnings => write!(f, "warnings"),
            Self::Bucket(bucket) => {
                let name = match bucket {
                    WarningBucket::Critical => "critical",
                    WarningBucket::Warning => "warning",
                    WarningBucket::Info => "info",
                    WarningBucket::Risk => "risk",
                };
                write!(f, "bucket-{name}")
            },
            Self::Risk(level) => write!(f, "risk-{}", level.as_str()),
        }
    }
}

impl std::str::FromStr for ContractFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_lowercase();
        match value.as_str() {
            "" | "all" => return Ok(Self::All),
            "warnings" | "critical" => return Ok(Self::Warnings),
            _ => {},
        }

        if let Some(bucket) = value.strip_prefix("bucket-") {
            return bucket.parse().map(Self::Bucket);
        }
        if let Some(level) = value.strip_prefix("risk-") {
            return RiskLevel::from_label(level)
                .map(Self::Risk)
                .ok_or_else(|| DomainError::invalid_input(format!("unknown risk level '{level}'")));
        }

        value
            .parse::<ContractStatus>()
            .map(Self::Status)
            .map_err(|_| DomainError::invalid_input(format!("unknown contract filter '{s}'")))
    }
}
