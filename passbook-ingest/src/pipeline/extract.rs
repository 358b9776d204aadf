//! Pull the date and the amount/balance pair out of a chunk

use passbook_core::parse_amount;
use regex::Regex;

use super::chunker::first_date;

/// Digit groups with optional separators, two decimals, optional Cr/Dr
pub const AMOUNT_PATTERN: &str = r"[\d,]+\.\d{2}(?:[Cc][Rr]|[Dd][Rr])?";

/// Fields recovered from a single chunk
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkFields<'a> {
    pub date: &'a str,
    pub amount_token: &'a str,
    pub balance_token: &'a str,
    pub amount: f64,
    pub balance: f64,
}

/// Extract date, amount and running balance.
///
/// The balance is the last monetary token (ignoring `trailing` extra
/// columns) and the amount the one before it. Returns `None` when the
/// chunk carries too few tokens to tell them apart.
pub fn extract_fields<'a>(
    chunk: &'a str,
    date_re: &Regex,
    amount_re: &Regex,
    trailing: usize,
) -> Option<ChunkFields<'a>> {
    let date = first_date(date_re, chunk)?;

    let tokens: Vec<&str> = amount_re.find_iter(chunk).map(|m| m.as_str()).collect();
    if tokens.len() < 2 + trailing {
        return None;
    }

    let balance_token = tokens[tokens.len() - 1 - trailing];
    let amount_token = tokens[tokens.len() - 2 - trailing];

    Some(ChunkFields {
        date,
        amount_token,
        balance_token,
        amount: parse_amount(amount_token),
        balance: parse_amount(balance_token),
    })
}
