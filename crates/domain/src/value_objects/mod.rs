//! Value Objects - Immutable, identity-less domain primitives

mod contract_id;
mod contract_status;
mod risk_level;
mod warning_category;

pub use contract_id::ContractId;
pub use contract_status::ContractStatus;
pub use risk_level::RiskLevel;
pub use warning_category::WarningCategory;
