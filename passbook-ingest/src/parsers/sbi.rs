//! State Bank of India statement parser (grid-table text)
//!
//! Table rows arrive one per line with cells joined by ` | `:
//!   Txn Date | Value Date | Description | Ref No./Cheque No. | Debit | Credit | Balance
//!   01/04/2024 | 01/04/2024 | TO TRANSFER-UPI/DR/409112345678/SWIGGY | | 250.00 | | 9,750.00

use anyhow::Result;
use passbook_core::{Bank, Transaction};

use crate::pipeline::Pipeline;
use crate::profile::{BankProfile, DEFAULT_TOLERANCE, KeywordSets, strings};

pub fn sbi_profile() -> BankProfile {
    BankProfile {
        bank: Bank::Sbi,
        date_pattern: r"\d{2}/\d{2}/\d{4}".to_string(),
        noise_patterns: strings(&[
            r"Txn\s+Date",
            r"Value\s+Date\s*\|",
            r"Account\s+Name",
            r"Account\s+Number",
            r"Account\s+Description",
            r"Address\s*:",
            r"Date\s+of\s+Statement",
            r"Statement\s+From",
            r"Drawing\s+Power",
            r"Interest\s+Rate",
            r"MOD\s+Balance",
            r"CIF\s+No",
            r"IFS\s*Code",
            r"MICR\s+Code",
            r"Nomination\s+Registered",
            r"Balance\s+as\s+on",
            r"Opening\s+Balance",
            r"Closing\s+Balance",
            r"Page\s+\d+\s+of\s+\d+",
            r"computer\s+generated",
        ]),
        footer_patterns: strings(&[
            r"Please\s+do\s+not\s+share",
            r"This\s+is\s+a\s+computer",
            r"\S+@\S+\.\S+",
            r"Toll\s+Free",
            r"Customer\s+Care",
            r"Statement\s+Summary",
            r"Page\s+\d+\s+of",
            r"-{3,}",
            r"\*{3,}",
        ]),
        // the value-date column repeats the transaction date
        artifact_patterns: strings(&[r"\b\d{2}/\d{2}/\d{4}\b"]),
        keywords: KeywordSets {
            credit: strings(&["BY TRANSFER", "BY CLEARING", "DEPOSIT", "CREDIT", "CR/", "NEFT CR"]),
            debit: strings(&[
                "TO TRANSFER",
                "TO CLEARING",
                "WITHDRAWAL",
                "DEBIT",
                "DR/",
                "ATM",
                "POS ",
                "CHARGES",
            ]),
            reversal: strings(&["REFUND", "REV"]),
        },
        tolerance: DEFAULT_TOLERANCE,
        trailing_money_columns: 0,
    }
}

/// Parse State Bank of India statement text into transactions.
pub fn parse_sbi_text(text: &str) -> Result<Vec<Transaction>> {
    Ok(Pipeline::new(sbi_profile())?.parse(text))
}
