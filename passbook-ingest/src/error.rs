//! Error taxonomy for statement ingestion.
//!
//! Only whole-statement outcomes are errors. Per-chunk problems (missing
//! amounts, malformed numbers, ambiguous direction) are resolved locally by
//! the pipeline and never surface here.

use passbook_core::Bank;

/// Why the external text-extraction step produced nothing usable
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractionFailure {
    #[error("document is password protected; a password is required")]
    PasswordRequired,

    #[error("unable to extract readable text from document: {0}")]
    Unreadable(String),

    #[error("extracted text is too short ({chars} chars, need at least {min})")]
    TooShort { chars: usize, min: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error(transparent)]
    TextExtraction(#[from] ExtractionFailure),

    #[error("unsupported bank: only SBI and South Indian Bank statements are supported")]
    UnsupportedBank,

    #[error("no transactions could be parsed from the {0} statement")]
    NoTransactions(Bank),

    #[error("invalid {bank} profile: {message}")]
    Profile { bank: Bank, message: String },
}

impl IngestError {
    /// Stable machine-readable code for callers that report errors upward
    pub fn code(&self) -> &'static str {
        match self {
            IngestError::TextExtraction(ExtractionFailure::PasswordRequired) => "PASSWORD_REQUIRED",
            IngestError::TextExtraction(_) => "TEXT_EXTRACTION_FAILED",
            IngestError::UnsupportedBank => "UNSUPPORTED_BANK",
            IngestError::NoTransactions(_) => "NO_TRANSACTIONS",
            IngestError::Profile { .. } => "INTERNAL_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(IngestError::from(ExtractionFailure::PasswordRequired).code(), "PASSWORD_REQUIRED");
        assert_eq!(
            IngestError::from(ExtractionFailure::TooShort { chars: 3, min: 50 }).code(),
            "TEXT_EXTRACTION_FAILED"
        );
        assert_eq!(IngestError::UnsupportedBank.code(), "UNSUPPORTED_BANK");
        assert_eq!(IngestError::NoTransactions(Bank::Sib).code(), "NO_TRANSACTIONS");
    }

    #[test]
    fn test_messages() {
        let e = IngestError::NoTransactions(Bank::Sbi);
        assert_eq!(e.to_string(), "no transactions could be parsed from the SBI statement");
        let e = IngestError::from(ExtractionFailure::Unreadable("scanned image".into()));
        assert!(e.to_string().contains("scanned image"));
    }
}
