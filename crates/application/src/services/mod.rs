//! Application services - Use case implementations

mod contract_filter;
mod early_warning_service;
mod expiry_classifier;
mod reply_formatter;
mod summary_formatter;
mod warning_buckets;

pub use contract_filter::ContractFilter;
pub use early_warning_service::{
    ContractWarning, EarlyWarningService, WarningSeverity, WarningStats, WarningType,
};
pub use expiry_classifier::{
    ClassificationResult, ExpiryRiskClassifier, ExpiryRule, ReasonTemplate, WarningThresholds,
    days_until_expiry,
};
pub use reply_formatter::format_ai_reply;
pub use summary_formatter::{
    Block, BulletItem, FormattedDocument, Inline, RichText, escape_html, format_summary,
};
pub use warning_buckets::{DashboardCounts, WarningBucket, expiry_bucket, matches_bucket};
