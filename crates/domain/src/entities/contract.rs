//! Contract entity - A record as served by the contract backend
//!
//! Mirrors the JSON shape of the backend's contract listing. Fields the
//! warning and summary logic do not need are carried along for display;
//! unknown fields are ignored on deserialization.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::{ContractId, ContractStatus, RiskLevel};

/// Naive timestamp layouts accepted after a plain date fails to parse
const NAIVE_TIMESTAMP_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Parse an ISO-8601 date or timestamp into a calendar date
///
/// Time-of-day and offsets are discarded; the calendar date is taken as
/// written.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use domain::parse_calendar_date;
///
/// let expected = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
/// assert_eq!(parse_calendar_date("2025-03-01").unwrap(), expected);
/// assert_eq!(parse_calendar_date("2025-03-01T23:59:59").unwrap(), expected);
/// assert!(parse_calendar_date("next tuesday").is_err());
/// ```
pub fn parse_calendar_date(raw: &str) -> Result<NaiveDate, DomainError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(DomainError::invalid_input("date is empty"));
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.date_naive());
    }
    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|timestamp| timestamp.date())
        .ok_or_else(|| DomainError::invalid_input(format!("unparseable date '{value}'")))
}

/// A contract record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    /// Backend identifier
    pub id: ContractId,
    /// Display name
    pub contract_name: String,
    /// Business contract number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_number: Option<String>,
    /// First party (usually the own organisation)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party_a: Option<String>,
    /// Counterparty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party_b: Option<String>,
    /// Start date as served (ISO-8601)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// End date as served (ISO-8601); see [`Contract::end_date`]
    #[serde(default)]
    pub end_date: Option<String>,
    /// Lifecycle status
    pub status: ContractStatus,
    /// Monetary value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_value: Option<f64>,
    /// Currency code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Risk rating as served; see [`Contract::risk_level`]
    #[serde(default)]
    pub risk_level: Option<String>,
    /// AI-generated explanation of the risk rating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_reason: Option<String>,
    /// AI-generated summary in lightweight markup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Extracted key clauses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_clauses: Option<String>,
}

impl Contract {
    /// Create a minimal contract record
    pub fn new(id: i64, name: impl Into<String>, status: ContractStatus) -> Self {
        Self {
            id: ContractId::new(id),
            contract_name: name.into(),
            contract_number: None,
            party_a: None,
            party_b: None,
            start_date: None,
            end_date: None,
            status,
            contract_value: None,
            currency: None,
            risk_level: None,
            risk_reason: None,
            summary: None,
            key_clauses: None,
        }
    }

    /// Set the end date
    #[must_use]
    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date.format("%Y-%m-%d").to_string());
        self
    }

    /// Set the risk level
    #[must_use]
    pub fn with_risk_level(mut self, risk_level: RiskLevel) -> Self {
        self.risk_level = Some(risk_level.as_str().to_string());
        self
    }

    /// Set the summary text
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Set the contract number
    #[must_use]
    pub fn with_contract_number(mut self, number: impl Into<String>) -> Self {
        self.contract_number = Some(number.into());
        self
    }

    /// Normalised risk level; unknown labels read as absent
    #[must_use]
    pub fn risk_level(&self) -> Option<RiskLevel> {
        self.risk_level.as_deref().and_then(RiskLevel::from_label)
    }

    /// Whether the risk rating is high or critical
    #[must_use]
    pub fn is_high_risk(&self) -> bool {
        self.risk_level().is_some_and(|level| level.is_high_risk())
    }

    /// Parsed end date
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInput` if the end date is absent or
    /// cannot be parsed.
    pub fn end_date(&self) -> Result<NaiveDate, DomainError> {
        let raw = self.end_date.as_deref().ok_or_else(|| {
            DomainError::invalid_input(format!("contract {} has no end_date", self.id))
        })?;
        parse_calendar_date(raw).map_err(|err| match err {
            DomainError::InvalidInput(reason) => {
                DomainError::invalid_input(format!("contract {}: {reason}", self.id))
            },
            other => other,
        })
    }

    /// Summary text, if present and non-blank
    #[must_use]
    pub fn summary_text(&self) -> Option<&str> {
        self.summary.as_deref().filter(|text| !text.trim().is_empty())
    }
}
