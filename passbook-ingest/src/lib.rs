//! passbook-ingest: statement text extraction engine and bank-specific profiles.

pub mod error;
pub mod parsers;
pub mod pipeline;
pub mod profile;
pub mod types;

pub use error::{ExtractionFailure, IngestError};
pub use parsers::{parse_bank_statement, parse_sbi_text, parse_sib_text, parse_statement, profile_for};
pub use pipeline::Pipeline;
pub use profile::{BankProfile, KeywordSets, ProfileOverrides};
pub use types::{ExtractionOutcome, ParsedStatement, StatementText};
