//! Bank-specific configurations and statement routing.

pub mod sbi;
pub mod sib;

use log::info;
use passbook_core::{Bank, classify_bank, compute_analytics};

use crate::error::{IngestError, Result};
use crate::pipeline::Pipeline;
use crate::profile::{BankProfile, ProfileOverrides};
use crate::types::{ParsedStatement, StatementText};

pub use sbi::{parse_sbi_text, sbi_profile};
pub use sib::{parse_sib_text, sib_profile};

/// Built-in profile for a bank, `None` for [`Bank::Unknown`]
pub fn profile_for(bank: Bank) -> Option<BankProfile> {
    match bank {
        Bank::Sbi => Some(sbi_profile()),
        Bank::Sib => Some(sib_profile()),
        Bank::Unknown => None,
    }
}

/// Identify the bank from title text, then parse the full text with its profile.
pub fn parse_statement(title: &str, text: &StatementText) -> Result<ParsedStatement> {
    parse_bank_statement(classify_bank(title), text, &ProfileOverrides::default())
}

/// Parse with an already-known bank and caller overrides.
///
/// An unknown bank is terminal, and so is a pass that yields nothing.
pub fn parse_bank_statement(
    bank: Bank,
    text: &StatementText,
    overrides: &ProfileOverrides,
) -> Result<ParsedStatement> {
    let profile = profile_for(bank).ok_or(IngestError::UnsupportedBank)?;
    let pipeline = Pipeline::new(overrides.apply(profile)).map_err(|e| IngestError::Profile {
        bank,
        message: format!("{e:#}"),
    })?;

    let transactions = pipeline.parse(text.as_str());
    if transactions.is_empty() {
        return Err(IngestError::NoTransactions(bank));
    }

    let analytics = compute_analytics(&transactions);
    info!(
        "{bank}: credit={:.2} debit={:.2} net={:.2}",
        analytics.total_credit, analytics.total_debit, analytics.net_cash_flow
    );

    Ok(ParsedStatement {
        bank,
        transactions,
        analytics,
    })
}
