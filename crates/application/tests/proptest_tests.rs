//! Property-based tests for classification and summary formatting
//!
//! These tests use proptest to verify invariants across many random inputs.

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::ContractSourcePort;
use application::{
    Block, EarlyWarningService, ExpiryRiskClassifier, WarningThresholds, expiry_bucket,
    format_summary,
};
use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use domain::{Contract, ContractStatus, RiskLevel, WarningCategory};
use proptest::prelude::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
}

fn end_date(days: i64) -> NaiveDate {
    let magnitude = Days::new(days.unsigned_abs());
    if days >= 0 {
        today().checked_add_days(magnitude).unwrap()
    } else {
        today().checked_sub_days(magnitude).unwrap()
    }
}

fn risk_strategy() -> impl Strategy<Value = Option<RiskLevel>> {
    prop_oneof![
        Just(None),
        Just(Some(RiskLevel::Low)),
        Just(Some(RiskLevel::Medium)),
        Just(Some(RiskLevel::High)),
        Just(Some(RiskLevel::Critical)),
    ]
}

fn status_strategy() -> impl Strategy<Value = ContractStatus> {
    prop_oneof![
        Just(ContractStatus::Active),
        Just(ContractStatus::Expired),
        Just(ContractStatus::Renewed),
        Just(ContractStatus::Pending),
    ]
}

// ============================================================================
// Classifier Property Tests
// ============================================================================

mod classifier_tests {
    use super::*;

    proptest! {
        #[test]
        fn inactive_contracts_never_warn(
            status in status_strategy(),
            days in -1000i64..1000,
            risk in risk_strategy()
        ) {
            prop_assume!(!status.is_active());
            let result = ExpiryRiskClassifier::default()
                .classify(status, Some(end_date(days)), risk, today())
                .unwrap();
            prop_assert_eq!(result.category, WarningCategory::None);
            prop_assert!(!result.has_warning());
        }

        #[test]
        fn day_count_matches_date_difference(days in -1000i64..1000) {
            let result = ExpiryRiskClassifier::default()
                .classify(ContractStatus::Active, Some(end_date(days)), None, today())
                .unwrap();
            prop_assert_eq!(result.days_until_expiry, days);
        }

        #[test]
        fn expired_is_critical_and_mentions_day_count(days in 1i64..1000, risk in risk_strategy()) {
            let result = ExpiryRiskClassifier::default()
                .classify(ContractStatus::Active, Some(end_date(-days)), risk, today())
                .unwrap();
            prop_assert_eq!(result.category, WarningCategory::Critical);
            let expected = format!("Expired {days} days ago");
            prop_assert!(result.reason.contains(&expected));
        }

        #[test]
        fn severity_is_monotonic_in_days(
            days in -1000i64..1000,
            earlier_by in 0i64..400,
            risk in risk_strategy()
        ) {
            let classifier = ExpiryRiskClassifier::default();
            let later = classifier
                .classify(ContractStatus::Active, Some(end_date(days)), risk, today())
                .unwrap();
            let sooner = classifier
                .classify(ContractStatus::Active, Some(end_date(days - earlier_by)), risk, today())
                .unwrap();
            prop_assert!(sooner.category >= later.category);
        }

        #[test]
        fn high_risk_is_always_a_warning(days in -1000i64..1000) {
            let result = ExpiryRiskClassifier::default()
                .classify(
                    ContractStatus::Active,
                    Some(end_date(days)),
                    Some(RiskLevel::High),
                    today(),
                )
                .unwrap();
            prop_assert!(result.has_warning());
            prop_assert!(result.reason.contains("High Risk"));
        }

        #[test]
        fn classification_is_deterministic(
            status in status_strategy(),
            days in -1000i64..1000,
            risk in risk_strategy()
        ) {
            let classifier = ExpiryRiskClassifier::default();
            let first = classifier.classify(status, Some(end_date(days)), risk, today()).unwrap();
            let second = classifier.classify(status, Some(end_date(days)), risk, today()).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn reportable_expiry_agrees_with_dashboard_bucket(days in -1000i64..1000) {
            let thresholds = WarningThresholds::default();
            let result = ExpiryRiskClassifier::new(thresholds)
                .classify(ContractStatus::Active, Some(end_date(days)), None, today())
                .unwrap();
            prop_assert_eq!(
                result.expiry_category.is_reportable(),
                expiry_bucket(days, &thresholds).is_some()
            );
        }
    }
}

// ============================================================================
// Summary Formatter Property Tests
// ============================================================================

mod formatter_tests {
    use super::*;

    proptest! {
        #[test]
        fn never_panics(raw in "(?s).{0,200}") {
            let _ = format_summary(&raw);
        }

        #[test]
        fn plain_words_become_one_paragraph(text in "[a-z][a-z ]{0,40}[a-z]") {
            let doc = format_summary(&text);
            prop_assert_eq!(doc.blocks.len(), 1);
            match &doc.blocks[0] {
                Block::Paragraph(rich) => prop_assert_eq!(rich.plain(), text),
                other => prop_assert!(false, "unexpected block {:?}", other),
            }
        }

        #[test]
        fn bullet_runs_merge_into_one_list(items in prop::collection::vec("[a-z]{1,12}", 1..10)) {
            let raw: Vec<String> = items.iter().map(|item| format!("- {item}")).collect();
            let doc = format_summary(&raw.join("\n"));
            prop_assert_eq!(doc.blocks.len(), 1);
            match &doc.blocks[0] {
                Block::BulletList(list) => {
                    let texts: Vec<String> = list.iter().map(|b| b.text.plain()).collect();
                    prop_assert_eq!(texts, items);
                },
                other => prop_assert!(false, "unexpected block {:?}", other),
            }
        }

        #[test]
        fn no_two_adjacent_bullet_lists(
            lines in prop::collection::vec(
                prop_oneof![
                    "[a-z]{1,8}".prop_map(|w| format!("* {w}")),
                    "[a-z]{1,8}",
                    "[A-Z]{1,8}".prop_map(|w| format!("**{w}**")),
                    Just(String::new()),
                ],
                0..20
            )
        ) {
            let doc = format_summary(&lines.join("\n"));
            for pair in doc.blocks.windows(2) {
                let both_lists = matches!(pair[0], Block::BulletList(_))
                    && matches!(pair[1], Block::BulletList(_));
                prop_assert!(!both_lists);
            }
        }
    }
}

// ============================================================================
// Warning Feed Property Tests
// ============================================================================

mod feed_tests {
    use super::*;

    struct StaticSource(Vec<Contract>);

    #[async_trait]
    impl ContractSourcePort for StaticSource {
        async fn list_contracts(&self) -> Result<Vec<Contract>, ApplicationError> {
            Ok(self.0.clone())
        }
    }

    fn contracts_strategy() -> impl Strategy<Value = Vec<Contract>> {
        prop::collection::vec((status_strategy(), -400i64..400, risk_strategy()), 0..20).prop_map(
            |rows| {
                rows.into_iter()
                    .enumerate()
                    .map(|(i, (status, days, risk))| {
                        let mut contract =
                            Contract::new(i64::try_from(i).unwrap(), format!("C{i}"), status)
                                .with_end_date(end_date(days));
                        if let Some(level) = risk {
                            contract = contract.with_risk_level(level);
                        }
                        contract
                    })
                    .collect()
            },
        )
    }

    proptest! {
        #[test]
        fn feed_is_sorted_and_only_covers_active_contracts(contracts in contracts_strategy()) {
            let active: Vec<i64> = contracts
                .iter()
                .filter(|c| c.status.is_active())
                .map(|c| c.id.value())
                .collect();
            let service = EarlyWarningService::new(
                Arc::new(StaticSource(contracts)),
                ExpiryRiskClassifier::default(),
            );

            let warnings = tokio_test::block_on(service.all_warnings(today())).unwrap();

            prop_assert!(warnings
                .windows(2)
                .all(|pair| pair[0].severity.rank() <= pair[1].severity.rank()));
            prop_assert!(warnings.iter().all(|w| active.contains(&w.contract_id.value())));
        }
    }
}
