//! Early warning service
//!
//! Scans contracts from a [`ContractSourcePort`] and produces the alert
//! feed for upcoming expirations, overdue contracts and high-risk ratings,
//! plus the aggregate statistics shown on the dashboard.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use domain::{Contract, ContractId, DomainError, RiskLevel, WarningCategory};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::expiry_classifier::{ClassificationResult, ExpiryRiskClassifier};
use crate::error::ApplicationError;
use crate::ports::ContractSourcePort;

/// What a warning is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// End date is approaching
    Expiration,
    /// End date has passed while the contract is still active
    Expired,
    /// Risk rating is high or critical
    HighRisk,
}

impl fmt::Display for WarningType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Expiration => "Expiration",
            Self::Expired => "Expired",
            Self::HighRisk => "High Risk",
        };
        write!(f, "{label}")
    }
}

/// Severity of a warning in the feed
///
/// Expiry warnings use the warning categories; risk warnings reuse the
/// risk rating, so the two scales interleave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningSeverity {
    /// Expired, expiring imminently, or critical risk
    Critical,
    /// High risk
    High,
    /// Expiring within the warning window
    Warning,
    /// Medium risk
    Medium,
    /// Expiring within the info window
    Info,
    /// Low risk
    Low,
}

impl WarningSeverity {
    /// Position in the feed, most severe first
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::High => 1,
            Self::Warning => 2,
            Self::Medium => 3,
            Self::Info => 4,
            Self::Low => 5,
        }
    }

    /// Map an expiry category; `None` has no severity
    #[must_use]
    pub const fn from_category(category: WarningCategory) -> Option<Self> {
        match category {
            WarningCategory::Critical => Some(Self::Critical),
            WarningCategory::Warning => Some(Self::Warning),
            WarningCategory::Info => Some(Self::Info),
            WarningCategory::None => None,
        }
    }
}

impl From<RiskLevel> for WarningSeverity {
    fn from(level: RiskLevel) -> Self {
        match level {
            RiskLevel::Critical => Self::Critical,
            RiskLevel::High => Self::High,
            RiskLevel::Medium => Self::Medium,
            RiskLevel::Low => Self::Low,
        }
    }
}

impl fmt::Display for WarningSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Warning => "warning",
            Self::Medium => "medium",
            Self::Info => "info",
            Self::Low => "low",
        };
        write!(f, "{label}")
    }
}

/// One entry in the warning feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractWarning {
    /// Contract the warning is about
    pub contract_id: ContractId,
    /// Contract display name
    pub contract_name: String,
    /// Business contract number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_number: Option<String>,
    /// What the warning is about
    pub warning_type: WarningType,
    /// How severe it is
    pub severity: WarningSeverity,
    /// Days until expiry, for expiry warnings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_remaining: Option<i64>,
    /// Human-readable message
    pub message: String,
    /// End date, for expiry warnings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

impl ContractWarning {
    fn expiry(contract: &Contract, result: &ClassificationResult, end_date: NaiveDate) -> Option<Self> {
        let severity = WarningSeverity::from_category(result.expiry_category)?;
        let days = result.days_until_expiry;

        let (warning_type, message) = if result.is_expired() {
            (
                WarningType::Expired,
                format!("Contract expired {} days ago!", days.unsigned_abs()),
            )
        } else if severity == WarningSeverity::Critical {
            (
                WarningType::Expiration,
                format!("Contract expires in {days} days!"),
            )
        } else {
            (
                WarningType::Expiration,
                format!("Contract expires in {days} days"),
            )
        };

        Some(Self {
            contract_id: contract.id,
            contract_name: contract.contract_name.clone(),
            contract_number: contract.contract_number.clone(),
            warning_type,
            severity,
            days_remaining: Some(days),
            message,
            due_date: Some(end_date),
        })
    }

    fn risk(contract: &Contract, level: RiskLevel) -> Self {
        Self {
            contract_id: contract.id,
            contract_name: contract.contract_name.clone(),
            contract_number: contract.contract_number.clone(),
            warning_type: WarningType::HighRisk,
            severity: level.into(),
            days_remaining: None,
            message: format!("Contract marked as {} risk", level.as_str()),
            due_date: None,
        }
    }
}

/// Aggregate statistics over a warning feed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningStats {
    /// Number of warnings
    pub total_warnings: usize,
    /// Warnings with critical severity
    pub critical_count: usize,
    /// Warnings with warning or high severity
    pub warning_count: usize,
    /// Warnings with info severity
    pub info_count: usize,
    /// Overdue contracts
    pub expired_count: usize,
    /// High-risk warnings
    pub high_risk_count: usize,
}

impl WarningStats {
    /// Compute statistics for a feed
    #[must_use]
    pub fn from_warnings(warnings: &[ContractWarning]) -> Self {
        let mut stats = Self {
            total_warnings: warnings.len(),
            ..Self::default()
        };

        for warning in warnings {
            match warning.severity {
                WarningSeverity::Critical => stats.critical_count += 1,
                WarningSeverity::Warning | WarningSeverity::High => stats.warning_count += 1,
                WarningSeverity::Info => stats.info_count += 1,
                WarningSeverity::Medium | WarningSeverity::Low => {},
            }
            match warning.warning_type {
                WarningType::Expired => stats.expired_count += 1,
                WarningType::HighRisk => stats.high_risk_count += 1,
                WarningType::Expiration => {},
            }
        }

        stats
    }
}

/// Early warning use cases
pub struct EarlyWarningService {
    source: Arc<dyn ContractSourcePort>,
    classifier: ExpiryRiskClassifier,
}

impl fmt::Debug for EarlyWarningService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EarlyWarningService")
            .field("classifier", &self.classifier)
            .finish_non_exhaustive()
    }
}

impl EarlyWarningService {
    /// Create a new service
    pub fn new(source: Arc<dyn ContractSourcePort>, classifier: ExpiryRiskClassifier) -> Self {
        Self { source, classifier }
    }

    /// Warnings for all active contracts, most severe first
    ///
    /// Each active contract contributes at most one expiry warning and at
    /// most one risk warning. Ties keep source order.
    #[instrument(skip(self))]
    pub async fn all_warnings(
        &self,
        now: NaiveDate,
    ) -> Result<Vec<ContractWarning>, ApplicationError> {
        let contracts = self.source.list_contracts().await?;
        let mut warnings = Vec::new();

        for contract in contracts.iter().filter(|c| c.status.is_active()) {
            warnings.extend(self.warnings_for(contract, now)?);
        }

        warnings.sort_by_key(|warning| warning.severity.rank());
        debug!(
            contracts = contracts.len(),
            warnings = warnings.len(),
            "Computed warning feed"
        );
        Ok(warnings)
    }

    /// Warnings for a single contract
    ///
    /// Only critical expiry warnings are reported here, alongside any
    /// risk warning. Inactive contracts yield no warnings.
    #[instrument(skip(self))]
    pub async fn contract_warnings(
        &self,
        id: ContractId,
        now: NaiveDate,
    ) -> Result<Vec<ContractWarning>, ApplicationError> {
        let contract = self
            .source
            .get_contract(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Contract", id.to_string()))?;

        if !contract.status.is_active() {
            debug!(%id, status = %contract.status, "Skipping inactive contract");
            return Ok(Vec::new());
        }

        let warnings = self
            .warnings_for(&contract, now)?
            .into_iter()
            .filter(|warning| {
                warning.warning_type == WarningType::HighRisk
                    || warning.severity == WarningSeverity::Critical
            })
            .collect();
        Ok(warnings)
    }

    /// Dashboard statistics for the current feed
    pub async fn dashboard_stats(&self, now: NaiveDate) -> Result<WarningStats, ApplicationError> {
        let warnings = self.all_warnings(now).await?;
        Ok(WarningStats::from_warnings(&warnings))
    }

    fn warnings_for(
        &self,
        contract: &Contract,
        now: NaiveDate,
    ) -> Result<Vec<ContractWarning>, DomainError> {
        let end_date = contract.end_date()?;
        let result =
            self.classifier
                .classify(contract.status, Some(end_date), contract.risk_level(), now)?;

        let mut warnings = Vec::with_capacity(2);
        if let Some(warning) = ContractWarning::expiry(contract, &result, end_date) {
            warnings.push(warning);
        }
        if let Some(level) = contract.risk_level().filter(RiskLevel::is_high_risk) {
            warnings.push(ContractWarning::risk(contract, level));
        }
        Ok(warnings)
    }
}
