//! Integration tests for the JSON contract source wired into the
//! application services
//!
//! These tests read a real export from disk and run it through the
//! warning feed, the dashboard counts and the list filters.

#![allow(clippy::expect_used)]

use std::io::Write;
use std::sync::Arc;

use application::ports::ContractSourcePort;
use application::{
    ContractFilter, DashboardCounts, EarlyWarningService, ExpiryRiskClassifier, WarningBucket,
    WarningSeverity, WarningType,
};
use chrono::NaiveDate;
use domain::ContractId;
use infrastructure::JsonFileContractSource;
use tempfile::NamedTempFile;

// ============================================================================
// Test Helpers
// ============================================================================

const EXPORT: &str = r#"{
    "contracts": [
        {"id": 1, "contract_name": "Office Lease", "contract_number": "OL-2021-7",
         "status": "active", "end_date": "2025-03-11", "risk_level": "low"},
        {"id": 2, "contract_name": "Cloud Hosting", "status": "active",
         "end_date": "2025-05-10T00:00:00", "risk_level": "high"},
        {"id": 3, "contract_name": "Cleaning", "status": "active",
         "end_date": "2025-02-19", "risk_level": "medium"},
        {"id": 4, "contract_name": "Legacy Support", "status": "expired",
         "end_date": "2024-01-01", "risk_level": "critical"},
        {"id": 5, "contract_name": "Insurance", "status": "active",
         "end_date": "2026-03-01", "risk_level": "low",
         "summary": "**COVERAGE**\n* Fire\n* Theft"}
    ]
}"#;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date")
}

fn export_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(json.as_bytes())
        .expect("Failed to write export");
    file
}

fn service_for(file: &NamedTempFile) -> EarlyWarningService {
    let source = Arc::new(JsonFileContractSource::new(file.path()));
    EarlyWarningService::new(source, ExpiryRiskClassifier::default())
}

// ============================================================================
// Warning feed
// ============================================================================

#[tokio::test]
async fn feed_orders_warnings_by_severity() {
    let file = export_file(EXPORT);
    let warnings = service_for(&file)
        .all_warnings(today())
        .await
        .expect("feed should load");

    let summary: Vec<(i64, WarningType, WarningSeverity)> = warnings
        .iter()
        .map(|w| (w.contract_id.value(), w.warning_type, w.severity))
        .collect();
    assert_eq!(
        summary,
        vec![
            (1, WarningType::Expiration, WarningSeverity::Critical),
            (3, WarningType::Expired, WarningSeverity::Critical),
            (2, WarningType::HighRisk, WarningSeverity::High),
            (2, WarningType::Expiration, WarningSeverity::Warning),
        ]
    );
    assert_eq!(warnings[0].message, "Contract expires in 10 days!");
    assert_eq!(warnings[0].contract_number.as_deref(), Some("OL-2021-7"));
    assert_eq!(warnings[1].message, "Contract expired 10 days ago!");
}

#[tokio::test]
async fn stats_match_feed() {
    let file = export_file(EXPORT);
    let stats = service_for(&file)
        .dashboard_stats(today())
        .await
        .expect("stats should load");

    assert_eq!(stats.total_warnings, 4);
    assert_eq!(stats.critical_count, 2);
    assert_eq!(stats.warning_count, 2);
    assert_eq!(stats.info_count, 0);
    assert_eq!(stats.expired_count, 1);
    assert_eq!(stats.high_risk_count, 1);
}

#[tokio::test]
async fn inactive_contract_has_no_warnings() {
    let file = export_file(EXPORT);
    let warnings = service_for(&file)
        .contract_warnings(ContractId::new(4), today())
        .await
        .expect("contract should be found");
    assert!(warnings.is_empty());
}

#[tokio::test]
async fn unknown_contract_is_not_found() {
    let file = export_file(EXPORT);
    let err = service_for(&file)
        .contract_warnings(ContractId::new(99), today())
        .await
        .expect_err("contract 99 does not exist");
    assert!(err.to_string().contains("99"));
}

// ============================================================================
// Dashboard and filters
// ============================================================================

#[tokio::test]
async fn dashboard_counts_from_export() {
    let file = export_file(EXPORT);
    let contracts = JsonFileContractSource::new(file.path())
        .list_contracts()
        .await
        .expect("export should parse");

    let counts = DashboardCounts::tally(
        &contracts,
        ExpiryRiskClassifier::default().thresholds(),
        today(),
    )
    .expect("all active contracts have end dates");

    assert_eq!(
        counts,
        DashboardCounts {
            critical: 2,
            warning: 1,
            info: 0,
            risk: 1,
            flagged: 3,
        }
    );
    assert_eq!(counts.needs_attention(), 3);
}

#[tokio::test]
async fn filters_select_from_export() {
    let file = export_file(EXPORT);
    let contracts = JsonFileContractSource::new(file.path())
        .list_contracts()
        .await
        .expect("export should parse");
    let classifier = ExpiryRiskClassifier::default();

    let ids = |filter: ContractFilter| -> Vec<i64> {
        filter
            .apply(&contracts, &classifier, today())
            .expect("filter should apply")
            .iter()
            .map(|c| c.id.value())
            .collect()
    };

    assert_eq!(ids(ContractFilter::Warnings), vec![1, 2, 3]);
    assert_eq!(ids(ContractFilter::Bucket(WarningBucket::Critical)), vec![1, 3]);
    assert_eq!(ids(ContractFilter::Bucket(WarningBucket::Risk)), vec![2]);
    assert_eq!(ids("expired".parse().expect("known filter")), vec![4]);
}

#[tokio::test]
async fn active_contract_without_end_date_fails_feed() {
    let file = export_file(r#"[{"id": 1, "contract_name": "Draft", "status": "active"}]"#);
    let result = service_for(&file).all_warnings(today()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn missing_export_is_a_source_error() {
    let source = JsonFileContractSource::new("/nonexistent/contracts.json");
    let err = source
        .list_contracts()
        .await
        .expect_err("file does not exist");
    assert!(err.to_string().contains("contracts.json"));
}
