//! passbook-core: statement data model, bank identification and analytics

pub mod amount;
pub mod analytics;
pub mod bank;
pub mod transaction;

pub use amount::parse_amount;
pub use analytics::{Analytics, compute_analytics};
pub use bank::{Bank, classify_bank};
pub use transaction::{Direction, Transaction};
