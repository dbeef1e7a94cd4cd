//! Warning category value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency of attention a contract needs
///
/// Ordered by severity: `None < Info < Warning < Critical`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum WarningCategory {
    /// Nothing to report
    #[default]
    None,
    /// Expiry is on the horizon
    Info,
    /// Expiry is approaching
    Warning,
    /// Expired or expiring imminently
    Critical,
}

impl WarningCategory {
    /// Whether this category should be surfaced to the user
    #[must_use]
    pub const fn is_reportable(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Get a human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Critical => "Critical",
        }
    }

    /// Get an emoji representation
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Info => "🔵",
            Self::Warning => "🟡",
            Self::Critical => "🔴",
        }
    }
}

impl fmt::Display for WarningCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
