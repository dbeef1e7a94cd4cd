//! Risk level value object
//!
//! An AI- or human-assigned severity rating, orthogonal to expiry urgency.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Assessed risk of a contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Routine contract
    Low,
    /// Needs periodic review
    Medium,
    /// Needs attention
    High,
    /// Needs immediate attention
    Critical,
}

impl RiskLevel {
    /// Parse a backend risk label leniently
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Unrecognised labels yield `None`, which callers treat the same as an
    /// absent rating.
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::RiskLevel;
    ///
    /// assert_eq!(RiskLevel::from_label("HIGH"), Some(RiskLevel::High));
    /// assert_eq!(RiskLevel::from_label("severe"), None);
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }

    /// High and critical ratings count as high risk
    #[must_use]
    pub const fn is_high_risk(&self) -> bool {
        matches!(self, Self::High | Self::Critical)
    }

    /// Wire value used by the backend
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Get a human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    /// All levels in ascending order
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Low, Self::Medium, Self::High, Self::Critical]
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
