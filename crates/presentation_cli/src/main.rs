//! ContractWatch CLI
//!
//! Command-line front end for the early warning dashboard: classifies
//! contracts from a JSON export and renders warnings, counts and summaries.

#![allow(clippy::print_stdout)]

mod report;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use application::{
    ClassificationResult, ContractFilter, ContractSourcePort, DashboardCounts,
    EarlyWarningService, ExpiryRiskClassifier, format_ai_reply, format_summary,
};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use domain::{Contract, ContractId, DomainError, parse_calendar_date};
use infrastructure::{AppConfig, JsonFileContractSource, init_logging};
use tracing::info;

/// ContractWatch CLI
#[derive(Parser)]
#[command(name = "contractwatch-cli")]
#[command(author, version, about = "ContractWatch early warning CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long, env = "CONTRACTWATCH_CONFIG")]
    config: Option<PathBuf>,

    /// Contract export to read, overriding the configured path
    #[arg(long)]
    contracts: Option<PathBuf>,

    /// Reference date for day counts (defaults to today, UTC)
    #[arg(long, value_parser = parse_today)]
    today: Option<NaiveDate>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify every contract by expiry and risk
    Classify,

    /// Show the early warning feed
    Warnings {
        /// Only warnings for this contract
        #[arg(long)]
        contract: Option<i64>,
    },

    /// Show dashboard bucket counts and feed statistics
    Stats,

    /// List contracts through a filter
    ///
    /// Filters: all, active, expired, renewed, pending, warnings,
    /// bucket-critical, bucket-warning, bucket-info, bucket-risk,
    /// risk-low, risk-medium, risk-high, risk-critical
    List {
        /// Filter name
        #[arg(short, long, default_value = "all")]
        filter: ContractFilter,
    },

    /// Format a contract's stored summary
    Summary {
        /// Contract ID
        id: i64,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = SummaryFormat::Outline)]
        format: SummaryFormat,
    },

    /// Format an AI answer as HTML
    Reply {
        /// Answer text
        text: String,
    },
}

/// How `summary` renders its blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SummaryFormat {
    Outline,
    Html,
    Json,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

fn parse_today(raw: &str) -> Result<NaiveDate, String> {
    parse_calendar_date(raw).map_err(|e| e.to_string())
}

/// Pair each contract with its classification, stopping at the first bad record
fn classify_each<'a>(
    contracts: impl IntoIterator<Item = &'a Contract>,
    classifier: &ExpiryRiskClassifier,
    today: NaiveDate,
) -> Result<Vec<(&'a Contract, ClassificationResult)>, DomainError> {
    contracts
        .into_iter()
        .map(|contract| {
            classifier
                .classify_contract(contract, today)
                .map(|result| (contract, result))
        })
        .collect()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_from(cli.config.as_deref())
        .context("failed to load configuration")?;
    if let Some(filter) = log_filter_from_verbosity(cli.verbose) {
        config.logging = config.logging.with_filter(filter);
    }
    init_logging(&config.logging)?;
    config.validate()?;

    let contracts_path = cli
        .contracts
        .unwrap_or_else(|| PathBuf::from(&config.source.contracts_path));
    let today = cli.today.unwrap_or_else(|| Utc::now().date_naive());
    info!(path = %contracts_path.display(), %today, "Starting ContractWatch CLI");

    let source = Arc::new(JsonFileContractSource::new(contracts_path));
    let classifier = ExpiryRiskClassifier::new(config.thresholds);
    let service = EarlyWarningService::new(source.clone(), classifier.clone());

    match cli.command {
        Commands::Classify => {
            let contracts = source.list_contracts().await?;
            let rows = classify_each(&contracts, &classifier, today)?;

            if cli.json {
                let results: Vec<_> = rows.iter().map(|(_, result)| result).collect();
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                println!("{}", report::classification_table(&rows));
            }
        },

        Commands::Warnings { contract } => {
            let warnings = match contract {
                Some(id) => service.contract_warnings(ContractId::new(id), today).await?,
                None => service.all_warnings(today).await?,
            };

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&warnings)?);
            } else {
                println!("{}", report::warning_feed(&warnings));
            }
        },

        Commands::Stats => {
            let contracts = source.list_contracts().await?;
            let counts = DashboardCounts::tally(&contracts, classifier.thresholds(), today)?;
            let stats = service.dashboard_stats(today).await?;

            if cli.json {
                let payload = serde_json::json!({ "buckets": counts, "warnings": stats });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                println!(
                    "{}",
                    report::dashboard(&counts, &stats, classifier.thresholds())
                );
            }
        },

        Commands::List { filter } => {
            let contracts = source.list_contracts().await?;
            let selected = filter.apply(&contracts, &classifier, today)?;
            let rows = classify_each(selected, &classifier, today)?;

            if cli.json {
                let listed: Vec<&Contract> = rows.iter().map(|(contract, _)| *contract).collect();
                println!("{}", serde_json::to_string_pretty(&listed)?);
            } else {
                println!("{}", report::contract_list(filter, &rows));
            }
        },

        Commands::Summary { id, format } => {
            let id = ContractId::new(id);
            let contract = source
                .get_contract(id)
                .await?
                .with_context(|| format!("contract {id} not found"))?;
            let doc = format_summary(contract.summary_text().unwrap_or_default());

            match format {
                SummaryFormat::Json => println!("{}", serde_json::to_string_pretty(&doc)?),
                SummaryFormat::Html => println!("{}", doc.render_html()),
                SummaryFormat::Outline if doc.is_empty() => println!("No summary available."),
                SummaryFormat::Outline => println!("{}", report::summary_outline(&doc)),
            }
        },

        Commands::Reply { text } => {
            println!("{}", format_ai_reply(&text));
        },
    }

    Ok(())
}
