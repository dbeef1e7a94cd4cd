//! Expiry and risk classification
//!
//! Decides how urgently a contract needs attention from its status, end date
//! and risk rating, relative to a caller-supplied "today". The day
//! thresholds live in an ordered rule table so the precedence between
//! "already expired", "expiring soon" and "on the horizon" is explicit.
//!
//! # Examples
//!
//! ```
//! use application::ExpiryRiskClassifier;
//! use chrono::{Days, NaiveDate};
//! use domain::{ContractStatus, RiskLevel, WarningCategory};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let classifier = ExpiryRiskClassifier::default();
//!
//! let result = classifier
//!     .classify(
//!         ContractStatus::Active,
//!         today.checked_add_days(Days::new(45)),
//!         Some(RiskLevel::Low),
//!         today,
//!     )
//!     .unwrap();
//! assert_eq!(result.category, WarningCategory::Warning);
//! assert_eq!(result.days_until_expiry, 45);
//! assert!(!result.is_high_risk);
//! ```

use chrono::NaiveDate;
use domain::{Contract, ContractStatus, DomainError, RiskLevel, WarningCategory};
use serde::{Deserialize, Serialize};

/// Default days-before-expiry that count as critical
const DEFAULT_CRITICAL_DAYS: i64 = 30;
/// Default days-before-expiry that count as a warning
const DEFAULT_WARNING_DAYS: i64 = 90;
/// Default days-before-expiry that count as informational
const DEFAULT_INFO_DAYS: i64 = 180;

/// Suffix appended to an expiry reason when the contract is also high risk
const HIGH_RISK_SUFFIX: &str = " + High Risk";
/// Reason used when high risk is the only signal
const HIGH_RISK_REASON: &str = "High Risk";

/// Day thresholds separating the expiry categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningThresholds {
    /// Contracts expiring within this many days are critical (default: 30)
    #[serde(default = "default_critical_days")]
    pub critical_days: i64,

    /// Contracts expiring within this many days are warnings (default: 90)
    #[serde(default = "default_warning_days")]
    pub warning_days: i64,

    /// Contracts expiring within this many days are informational (default: 180)
    #[serde(default = "default_info_days")]
    pub info_days: i64,
}

const fn default_critical_days() -> i64 {
    DEFAULT_CRITICAL_DAYS
}

const fn default_warning_days() -> i64 {
    DEFAULT_WARNING_DAYS
}

const fn default_info_days() -> i64 {
    DEFAULT_INFO_DAYS
}

impl Default for WarningThresholds {
    fn default() -> Self {
        Self {
            critical_days: default_critical_days(),
            warning_days: default_warning_days(),
            info_days: default_info_days(),
        }
    }
}

impl WarningThresholds {
    /// Check that the thresholds are non-negative and strictly ascending
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.critical_days < 0 {
            return Err(DomainError::invalid_input(format!(
                "critical_days must be non-negative, got {}",
                self.critical_days
            )));
        }
        if self.critical_days >= self.warning_days || self.warning_days >= self.info_days {
            return Err(DomainError::invalid_input(format!(
                "thresholds must ascend: critical ({}) < warning ({}) < info ({})",
                self.critical_days, self.warning_days, self.info_days
            )));
        }
        Ok(())
    }
}

/// How a rule phrases its reason
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReasonTemplate {
    /// "Expired N days ago"
    ExpiredAgo,
    /// "Expires in N days"
    ExpiresIn,
}

impl ReasonTemplate {
    /// Render the reason for a day count
    #[must_use]
    pub fn render(self, days_until_expiry: i64) -> String {
        match self {
            Self::ExpiredAgo => format!("Expired {} days ago", days_until_expiry.unsigned_abs()),
            Self::ExpiresIn => format!("Expires in {days_until_expiry} days"),
        }
    }
}

/// One row of the expiry rule table
///
/// A rule matches when `days_until_expiry <= max_days`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryRule {
    /// Inclusive upper bound on days until expiry
    pub max_days: i64,
    /// Category assigned on match
    pub category: WarningCategory,
    /// Reason phrasing on match
    pub reason: ReasonTemplate,
}

/// Outcome of classifying one contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Final warning category, risk override included
    pub category: WarningCategory,
    /// Category from the expiry rule table alone
    pub expiry_category: WarningCategory,
    /// Whole calendar days until the end date (negative once expired)
    pub days_until_expiry: i64,
    /// Risk level is high or critical
    pub is_high_risk: bool,
    /// Human-readable reason combining the expiry and risk signals
    pub reason: String,
    /// Whether the contract was active when classified
    pub active: bool,
}

impl ClassificationResult {
    /// List-filter membership: active and either within the info horizon,
    /// already expired, or high risk
    #[must_use]
    pub fn has_warning(&self) -> bool {
        self.active && (self.expiry_category.is_reportable() || self.is_high_risk)
    }

    /// Whether the end date has passed
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        self.days_until_expiry < 0
    }

    /// Badge text shown next to a contract in the warnings list
    ///
    /// Empty when there is nothing to show.
    #[must_use]
    pub fn badge_label(&self) -> String {
        if !self.active {
            return String::new();
        }

        let mut label = if self.is_expired() {
            ReasonTemplate::ExpiredAgo.render(self.days_until_expiry)
        } else if self.expiry_category.is_reportable() {
            format!(
                "{} - {}",
                self.expiry_category.label(),
                ReasonTemplate::ExpiresIn.render(self.days_until_expiry)
            )
        } else {
            String::new()
        };

        if self.is_high_risk {
            if label.is_empty() {
                label.push_str(HIGH_RISK_REASON);
            } else {
                label.push_str(HIGH_RISK_SUFFIX);
            }
        }
        label
    }
}

/// Whole calendar days from `now` until `end_date`
#[must_use]
pub fn days_until_expiry(end_date: NaiveDate, now: NaiveDate) -> i64 {
    end_date.signed_duration_since(now).num_days()
}

/// Classifies contracts by expiry urgency and risk
#[derive(Debug, Clone)]
pub struct ExpiryRiskClassifier {
    thresholds: WarningThresholds,
    rules: [ExpiryRule; 4],
}

impl Default for ExpiryRiskClassifier {
    fn default() -> Self {
        Self::new(WarningThresholds::default())
    }
}

impl ExpiryRiskClassifier {
    /// Build a classifier from thresholds
    #[must_use]
    pub fn new(thresholds: WarningThresholds) -> Self {
        Self {
            rules: Self::rule_table(&thresholds),
            thresholds,
        }
    }

    /// Build a classifier, rejecting inconsistent thresholds
    pub fn try_new(thresholds: WarningThresholds) -> Result<Self, DomainError> {
        thresholds.validate()?;
        Ok(Self::new(thresholds))
    }

    fn rule_table(thresholds: &WarningThresholds) -> [ExpiryRule; 4] {
        [
            ExpiryRule {
                max_days: -1,
                category: WarningCategory::Critical,
                reason: ReasonTemplate::ExpiredAgo,
            },
            ExpiryRule {
                max_days: thresholds.critical_days,
                category: WarningCategory::Critical,
                reason: ReasonTemplate::ExpiresIn,
            },
            ExpiryRule {
                max_days: thresholds.warning_days,
                category: WarningCategory::Warning,
                reason: ReasonTemplate::ExpiresIn,
            },
            ExpiryRule {
                max_days: thresholds.info_days,
                category: WarningCategory::Info,
                reason: ReasonTemplate::ExpiresIn,
            },
        ]
    }

    /// Thresholds in use
    #[must_use]
    pub const fn thresholds(&self) -> &WarningThresholds {
        &self.thresholds
    }

    /// Rule table in evaluation order
    #[must_use]
    pub fn rules(&self) -> &[ExpiryRule] {
        &self.rules
    }

    /// First rule matching a day count
    #[must_use]
    pub fn matching_rule(&self, days_until_expiry: i64) -> Option<&ExpiryRule> {
        self.rules
            .iter()
            .find(|rule| days_until_expiry <= rule.max_days)
    }

    /// Classify a contract from its parts
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInput` if `end_date` is absent.
    pub fn classify(
        &self,
        status: ContractStatus,
        end_date: Option<NaiveDate>,
        risk_level: Option<RiskLevel>,
        now: NaiveDate,
    ) -> Result<ClassificationResult, DomainError> {
        let end_date =
            end_date.ok_or_else(|| DomainError::invalid_input("end date is required"))?;
        let days = days_until_expiry(end_date, now);
        let is_high_risk = risk_level.is_some_and(|level| level.is_high_risk());

        if !status.is_active() {
            return Ok(ClassificationResult {
                category: WarningCategory::None,
                expiry_category: WarningCategory::None,
                days_until_expiry: days,
                is_high_risk,
                reason: String::new(),
                active: false,
            });
        }

        let rule = self.matching_rule(days);
        let expiry_category = rule.map_or(WarningCategory::None, |rule| rule.category);
        let mut reason = rule.map(|rule| rule.reason.render(days)).unwrap_or_default();

        // High risk lifts an otherwise quiet contract to the lowest reportable level
        let category = if is_high_risk && expiry_category == WarningCategory::None {
            WarningCategory::Info
        } else {
            expiry_category
        };

        if is_high_risk {
            if reason.is_empty() {
                reason.push_str(HIGH_RISK_REASON);
            } else {
                reason.push_str(HIGH_RISK_SUFFIX);
            }
        }

        Ok(ClassificationResult {
            category,
            expiry_category,
            days_until_expiry: days,
            is_high_risk,
            reason,
            active: true,
        })
    }

    /// Classify a contract record
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInput` if the record's end date is
    /// absent or unparseable.
    pub fn classify_contract(
        &self,
        contract: &Contract,
        now: NaiveDate,
    ) -> Result<ClassificationResult, DomainError> {
        let end_date = contract.end_date()?;
        self.classify(contract.status, Some(end_date), contract.risk_level(), now)
    }
}
