//! Dashboard warning buckets
//!
//! The dashboard counts active contracts into exclusive expiry buckets
//! (critical, warning, info) and a separate, non-exclusive risk bucket. This
//! is a different question from the per-contract classification: a contract
//! can be counted under an expiry bucket and under risk at the same time.

use std::fmt;

use chrono::NaiveDate;
use domain::{Contract, DomainError, RiskLevel};
use serde::{Deserialize, Serialize};

use super::expiry_classifier::{WarningThresholds, days_until_expiry};

/// A dashboard aggregation bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningBucket {
    /// Expiring within the critical window, or already expired
    Critical,
    /// Expiring within the warning window
    Warning,
    /// Expiring within the info window
    Info,
    /// High or critical risk rating
    Risk,
}

impl WarningBucket {
    /// Get a human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Warning => "Warning",
            Self::Info => "Info",
            Self::Risk => "High Risk",
        }
    }

    /// Get an emoji representation
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Critical => "🔴",
            Self::Warning => "🟡",
            Self::Info => "🔵",
            Self::Risk => "⚠️",
        }
    }

    /// Describe what falls into the bucket
    #[must_use]
    pub fn description(&self, thresholds: &WarningThresholds) -> String {
        match self {
            Self::Critical => format!("Expiring ≤ {} days or Expired", thresholds.critical_days),
            Self::Warning => format!(
                "Expiring {}-{} days",
                thresholds.critical_days + 1,
                thresholds.warning_days
            ),
            Self::Info => format!(
                "Expiring {}-{} days",
                thresholds.warning_days + 1,
                thresholds.info_days
            ),
            Self::Risk => "High or Critical risk level".to_string(),
        }
    }

    /// All buckets in display order
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Critical, Self::Warning, Self::Info, Self::Risk]
    }
}

impl fmt::Display for WarningBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for WarningBucket {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "critical" => Ok(Self::Critical),
            "warning" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            "risk" => Ok(Self::Risk),
            other => Err(DomainError::invalid_input(format!(
                "unknown warning bucket '{other}'"
            ))),
        }
    }
}

/// Exclusive expiry bucket for a day count, if any
#[must_use]
pub fn expiry_bucket(days_until_expiry: i64, thresholds: &WarningThresholds) -> Option<WarningBucket> {
    if days_until_expiry <= thresholds.critical_days {
        Some(WarningBucket::Critical)
    } else if days_until_expiry <= thresholds.warning_days {
        Some(WarningBucket::Warning)
    } else if days_until_expiry <= thresholds.info_days {
        Some(WarningBucket::Info)
    } else {
        None
    }
}

/// Whether an active contract belongs in a bucket
#[must_use]
pub fn matches_bucket(
    bucket: WarningBucket,
    days_until_expiry: i64,
    risk_level: Option<RiskLevel>,
    thresholds: &WarningThresholds,
) -> bool {
    match bucket {
        WarningBucket::Risk => risk_level.is_some_and(|level| level.is_high_risk()),
        expiry => expiry_bucket(days_until_expiry, thresholds) == Some(expiry),
    }
}

/// Per-bucket counts for the dashboard header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardCounts {
    /// Active contracts expiring within the critical window or expired
    pub critical: usize,
    /// Active contracts expiring within the warning window
    pub warning: usize,
    /// Active contracts expiring within the info window
    pub info: usize,
    /// Active contracts rated high or critical risk
    pub risk: usize,
    /// Active contracts appearing in at least one bucket
    pub flagged: usize,
}

impl DashboardCounts {
    /// Count active contracts into buckets
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInput` for the first active contract
    /// whose end date is absent or unparseable.
    pub fn tally<'a, I>(
        contracts: I,
        thresholds: &WarningThresholds,
        now: NaiveDate,
    ) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = &'a Contract>,
    {
        let mut counts = Self::default();

        for contract in contracts.into_iter().filter(|c| c.status.is_active()) {
            let days = days_until_expiry(contract.end_date()?, now);
            let expiry = expiry_bucket(days, thresholds);
            let risky = contract.is_high_risk();

            match expiry {
                Some(WarningBucket::Critical) => counts.critical += 1,
                Some(WarningBucket::Warning) => counts.warning += 1,
                Some(WarningBucket::Info) => counts.info += 1,
                Some(WarningBucket::Risk) | None => {},
            }
            if risky {
                counts.risk += 1;
            }
            if expiry.is_some() || risky {
                counts.flagged += 1;
            }
        }

        Ok(counts)
    }

    /// Count for one bucket
    #[must_use]
    pub const fn count(&self, bucket: WarningBucket) -> usize {
        match bucket {
            WarningBucket::Critical => self.critical,
            WarningBucket::Warning => self.warning,
            WarningBucket::Info => self.info,
            WarningBucket::Risk => self.risk,
        }
    }

    /// Critical plus warning counts, as shown on the "needs attention" card
    #[must_use]
    pub const fn needs_attention(&self) -> usize {
        self.critical + self.warning
    }
}
