//! South Indian Bank statement parser (visual-layout text)
//!
//! Free-flow layout without grid lines; a transaction may wrap across
//! several lines:
//!   01-04-24  UPI/DR/409112345678/SWIGGY/          250.00     9,750.00
//!             YESB/paytm-swiggy@ptybl
//!   02-04-24  NEFT BY ACME CORP SALARY                        5,000.00    14,750.00

use anyhow::Result;
use passbook_core::{Bank, Transaction};

use crate::pipeline::Pipeline;
use crate::profile::{BankProfile, DEFAULT_TOLERANCE, KeywordSets, strings};

pub fn sib_profile() -> BankProfile {
    BankProfile {
        bank: Bank::Sib,
        date_pattern: r"\d{2}-\d{2}-\d{2}".to_string(),
        noise_patterns: strings(&[
            r"Page\s+Total",
            r"Grand\s+Total",
            r"Statement\s+of\s+Account",
            r"Account\s+Summary",
            r"Opening\s+Balance",
            r"Closing\s+Balance",
            r"Page\s+\d+\s+of\s+\d+",
            r"Customer\s+ID",
            r"Branch\s+Code",
            r"Visit\s+us\s+at",
            r"System\s+Generated",
            r"IFSC\s*:",
            r"DATE\s+PARTICULARS",
            r"WITHDRAWALS\s+DEPOSITS",
        ]),
        footer_patterns: strings(&[
            r"IFSC\s*:",
            r"PIN\s*:\s*\d{6}",
            r"Ph\s*:\s*\d+",
            r"\S+@\S+\.\S+",
            r"GATE\s+NO",
            r"DATE\s*:",
            r"PAGE\s*:",
            r"Date/Time\s*:",
            r"This\s+is\s+a",
            r"C/O\s",
            r"Br\.\s*mail\s*id",
            r"Statement\s+of",
            r"Account\s+Summary",
            r"Period\s+From",
            r"-{3,}",
        ]),
        artifact_patterns: strings(&["RRN-"]),
        keywords: KeywordSets {
            credit: strings(&[" BY ", "CR/", "DEPOSIT", "CREDIT", "NEFT", "RTGS BY"]),
            debit: strings(&[" TO ", "DR/", "WITHDRAWAL", "DEBIT", "RTGS TO", "ATM", "CHARGES"]),
            reversal: strings(&["REFUND", "REV"]),
        },
        tolerance: DEFAULT_TOLERANCE,
        trailing_money_columns: 0,
    }
}

/// Parse South Indian Bank statement text into transactions.
pub fn parse_sib_text(text: &str) -> Result<Vec<Transaction>> {
    Ok(Pipeline::new(sib_profile())?.parse(text))
}
