//! passbook-finance: summaries, quality checks and CSV export over parsed statements

pub mod export;
pub mod monthly;
pub mod quality;
pub mod summary;

pub use export::{transactions_csv_string, write_monthly_csv, write_transactions_csv};
pub use monthly::{MonthlySummary, monthly_summary, parse_txn_date};
pub use quality::{QualityReport, quality_report};
pub use summary::{HighestDebit, StatementSummary, summarize};
