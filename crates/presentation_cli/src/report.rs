//! Plain-text report rendering for the CLI

use application::{
    Block, ClassificationResult, ContractFilter, ContractWarning, DashboardCounts,
    FormattedDocument, WarningBucket, WarningStats, WarningThresholds,
};
use domain::Contract;

/// One row per contract with its classification
pub fn classification_table(rows: &[(&Contract, ClassificationResult)]) -> String {
    if rows.is_empty() {
        return "No contracts found.".to_string();
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format!(
        "{:<6} {:<32} {:<9} {:>6}  {}",
        "ID", "NAME", "CATEGORY", "DAYS", "REASON"
    ));
    for (contract, result) in rows {
        lines.push(format!(
            "{:<6} {:<32} {:<9} {:>6}  {}",
            contract.id.value(),
            truncate(&contract.contract_name, 32),
            result.category.label(),
            result.days_until_expiry,
            result.reason
        ));
    }
    lines.join("\n")
}

/// Warning feed, most severe first
pub fn warning_feed(warnings: &[ContractWarning]) -> String {
    if warnings.is_empty() {
        return "✅ No warnings! All active contracts are in good standing.".to_string();
    }

    warnings
        .iter()
        .map(|warning| {
            let number = warning
                .contract_number
                .as_deref()
                .map(|n| format!(" ({n})"))
                .unwrap_or_default();
            format!(
                "[{}] {}{}: {}",
                warning.severity, warning.contract_name, number, warning.message
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Dashboard header with bucket counts and feed statistics
pub fn dashboard(
    counts: &DashboardCounts,
    stats: &WarningStats,
    thresholds: &WarningThresholds,
) -> String {
    let mut lines = vec![format!(
        "⚠️  Warning Contracts ({} Active Contracts)",
        counts.flagged
    )];
    for bucket in WarningBucket::all() {
        lines.push(format!(
            "  {} {:<9} {:>4}  {}",
            bucket.emoji(),
            bucket.label(),
            counts.count(bucket),
            bucket.description(thresholds)
        ));
    }
    lines.push(String::new());
    lines.push(format!(
        "Needs attention: {} | Total warnings: {} (critical {}, warning {}, info {}, expired {}, high risk {})",
        counts.needs_attention(),
        stats.total_warnings,
        stats.critical_count,
        stats.warning_count,
        stats.info_count,
        stats.expired_count,
        stats.high_risk_count
    ));
    lines.join("\n")
}

/// Filtered contract list with warning badges
pub fn contract_list(
    filter: ContractFilter,
    rows: &[(&Contract, ClassificationResult)],
) -> String {
    if rows.is_empty() {
        return filter.empty_message().to_string();
    }

    rows.iter()
        .map(|(contract, result)| {
            let risk = contract
                .risk_level()
                .map_or_else(|| "unrated".to_string(), |level| level.as_str().to_string());
            let mut line = format!(
                "#{} {} [{}] risk: {}",
                contract.id,
                contract.contract_name,
                contract.status.as_str(),
                risk
            );
            let badge = result.badge_label();
            if !badge.is_empty() {
                line.push_str(&format!("  {} {badge}", result.category.emoji()));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Indented plain-text outline of a formatted summary
pub fn summary_outline(doc: &FormattedDocument) -> String {
    let mut lines = Vec::new();
    for block in &doc.blocks {
        match block {
            Block::SectionHeader(text) => {
                if !lines.is_empty() {
                    lines.push(String::new());
                }
                lines.push(text.clone());
                lines.push("=".repeat(text.chars().count()));
            },
            Block::SubsectionHeader(text) => lines.push(format!("  {text}")),
            Block::BulletList(items) => {
                for item in items {
                    let indent = if item.indented { "      " } else { "    " };
                    lines.push(format!("{indent}• {}", item.text.plain()));
                }
            },
            Block::Paragraph(text) => lines.push(format!("  {}", text.plain())),
        }
    }
    lines.join("\n")
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}
