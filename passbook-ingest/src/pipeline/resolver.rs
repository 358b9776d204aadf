//! Debit/credit resolution.
//!
//! The running balance is authoritative: when the previous balance is known
//! we test both hypotheses (`P - A = B` and `P + A = B`) and take the
//! strictly better one if it lands within tolerance. Keywords are only
//! consulted for the first transaction or when the arithmetic is
//! inconclusive.

use passbook_core::Direction;

use crate::profile::KeywordSets;

/// How a direction was decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Balance arithmetic matched one hypothesis
    Reconciled,
    /// A keyword in the narration decided it
    Keyword,
    /// Nothing matched; defaulted to debit
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub direction: Direction,
    pub method: Method,
}

/// Balance-continuity check. `None` means inconclusive.
pub fn reconcile(previous: Option<f64>, amount: f64, balance: f64, tolerance: f64) -> Option<Direction> {
    let previous = previous?;

    let debit_residual = (previous - amount - balance).abs();
    let credit_residual = (previous + amount - balance).abs();

    if debit_residual < credit_residual && debit_residual < tolerance {
        Some(Direction::Debit)
    } else if credit_residual < debit_residual && credit_residual < tolerance {
        Some(Direction::Credit)
    } else {
        None
    }
}

/// Keyword fallback over the uppercased chunk.
///
/// Priority: credit markers, then debit markers, then reversal markers
/// (credit). Unlabeled lines default to debit.
pub fn classify_by_keywords(chunk: &str, keywords: &KeywordSets) -> Resolution {
    let upper = chunk.to_uppercase();

    let (direction, method) = if contains_any(&upper, &keywords.credit) {
        (Direction::Credit, Method::Keyword)
    } else if contains_any(&upper, &keywords.debit) {
        (Direction::Debit, Method::Keyword)
    } else if contains_any(&upper, &keywords.reversal) {
        (Direction::Credit, Method::Keyword)
    } else {
        (Direction::Debit, Method::Default)
    };

    Resolution { direction, method }
}

fn contains_any(upper: &str, set: &[String]) -> bool {
    set.iter().any(|k| upper.contains(k.as_str()))
}

pub fn resolve(
    previous: Option<f64>,
    amount: f64,
    balance: f64,
    chunk: &str,
    keywords: &KeywordSets,
    tolerance: f64,
) -> Resolution {
    match reconcile(previous, amount, balance, tolerance) {
        Some(direction) => Resolution {
            direction,
            method: Method::Reconciled,
        },
        None => classify_by_keywords(chunk, keywords),
    }
}
