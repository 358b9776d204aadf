use passbook_core::{Analytics, Bank, Transaction};
use serde::{Deserialize, Serialize};

use crate::error::ExtractionFailure;

/// Full-document text handed over by the PDF/OCR extraction step.
///
/// Construction rejects blobs too short to hold a statement, so an empty
/// extraction is never mistaken for a statement with zero transactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementText(String);

/// What the extraction step hands back: usable text or a typed failure
pub type ExtractionOutcome = std::result::Result<StatementText, ExtractionFailure>;

impl StatementText {
    pub const MIN_CHARS: usize = 50;

    pub fn new(raw: impl Into<String>) -> ExtractionOutcome {
        Self::with_min_chars(raw, Self::MIN_CHARS)
    }

    pub fn with_min_chars(raw: impl Into<String>, min: usize) -> ExtractionOutcome {
        let raw = raw.into();
        let chars = raw.trim().chars().count();
        if chars < min {
            return Err(ExtractionFailure::TooShort { chars, min });
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Result of a routed statement parse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedStatement {
    pub bank: Bank,
    pub transactions: Vec<Transaction>,
    pub analytics: Analytics,
}
