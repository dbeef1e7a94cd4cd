//! Domain entities - Objects with identity and lifecycle

mod contract;

pub use contract::{Contract, parse_calendar_date};
