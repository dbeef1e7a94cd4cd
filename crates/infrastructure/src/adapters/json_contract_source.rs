//! JSON file contract source - Implements ContractSourcePort over an export
//! of the backend's contract listing

use std::path::PathBuf;

use application::error::ApplicationError;
use application::ports::ContractSourcePort;
use async_trait::async_trait;
use domain::Contract;
use serde::Deserialize;
use tracing::{debug, instrument};

/// Accepted file layouts: the bare listing or a wrapped one
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ContractPayload {
    Listing(Vec<Contract>),
    Wrapped { contracts: Vec<Contract> },
}

impl ContractPayload {
    fn into_contracts(self) -> Vec<Contract> {
        match self {
            Self::Listing(contracts) | Self::Wrapped { contracts } => contracts,
        }
    }
}

/// Reads contracts from a JSON file on every call
#[derive(Debug, Clone)]
pub struct JsonFileContractSource {
    path: PathBuf,
}

impl JsonFileContractSource {
    /// Create a source for a file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse a JSON document into contracts
    pub fn parse(json: &str) -> Result<Vec<Contract>, ApplicationError> {
        serde_json::from_str::<ContractPayload>(json)
            .map(ContractPayload::into_contracts)
            .map_err(|e| ApplicationError::Source(format!("invalid contract data: {e}")))
    }
}

#[async_trait]
impl ContractSourcePort for JsonFileContractSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn list_contracts(&self) -> Result<Vec<Contract>, ApplicationError> {
        let json = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            ApplicationError::Source(format!("failed to read {}: {e}", self.path.display()))
        })?;
        let contracts = Self::parse(&json)?;
        debug!(count = contracts.len(), "Loaded contracts");
        Ok(contracts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{ContractId, ContractStatus};
    use std::io::Write;

    const LISTING: &str = r#"[
        {"id": 1, "contract_name": "Office Lease", "status": "active",
         "end_date": "2025-09-30T00:00:00", "risk_level": "medium"},
        {"id": 2, "contract_name": "Support", "status": "renewed",
         "end_date": "2024-01-31", "risk_level": null, "summary": null}
    ]"#;

    #[test]
    fn parses_bare_listing() {
        let contracts = JsonFileContractSource::parse(LISTING).unwrap();
        assert_eq!(contracts.len(), 2);
        assert_eq!(contracts[1].status, ContractStatus::Renewed);
    }

    #[test]
    fn parses_wrapped_listing() {
        let wrapped = format!(r#"{{"contracts": {LISTING}}}"#);
        let contracts = JsonFileContractSource::parse(&wrapped).unwrap();
        assert_eq!(contracts[0].id, ContractId::new(1));
    }

    #[test]
    fn rejects_non_listing_documents() {
        let err = JsonFileContractSource::parse(r#"{"detail": "Internal Server Error"}"#)
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Source(_)));
    }

    #[test]
    fn rejects_unknown_status() {
        let json = r#"[{"id": 1, "contract_name": "X", "status": "archived"}]"#;
        assert!(JsonFileContractSource::parse(json).is_err());
    }

    #[tokio::test]
    async fn reads_contracts_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(LISTING.as_bytes()).unwrap();

        let source = JsonFileContractSource::new(file.path());
        let contracts = source.list_contracts().await.unwrap();
        assert_eq!(contracts.len(), 2);

        let found = source.get_contract(ContractId::new(2)).await.unwrap();
        assert_eq!(found.map(|c| c.contract_name), Some("Support".to_string()));
    }

    #[tokio::test]
    async fn missing_file_is_source_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileContractSource::new(dir.path().join("absent.json"));
        let err = source.list_contracts().await.unwrap_err();
        assert!(err.to_string().contains("absent.json"));
    }
}
