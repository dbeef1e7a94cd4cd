//! Contract identifier value object
//!
//! The backend assigns integer primary keys; this newtype keeps them from
//! being mixed up with day counts and other integers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A backend-assigned contract identifier
///
/// # Examples
///
/// ```
/// use domain::ContractId;
///
/// let id = ContractId::new(17);
/// assert_eq!(id.value(), 17);
/// assert_eq!(id.to_string(), "17");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractId(i64);

impl ContractId {
    /// Wrap a raw identifier
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw identifier
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ContractId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::str::FromStr for ContractId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}
