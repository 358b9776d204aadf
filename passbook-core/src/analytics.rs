//! Aggregate figures over a parsed transaction list

use serde::{Deserialize, Serialize};

use crate::transaction::Transaction;

/// Totals reported alongside every parsed statement
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub total_credit: f64,
    pub total_debit: f64,
    /// `total_credit - total_debit`
    pub net_cash_flow: f64,
    pub flagged_count: usize,
}

/// Sum debits and credits and count flagged rows. Order-independent.
pub fn compute_analytics(txns: &[Transaction]) -> Analytics {
    let total_credit: f64 = txns.iter().filter_map(|t| t.credit).sum();
    let total_debit: f64 = txns.iter().filter_map(|t| t.debit).sum();

    Analytics {
        total_credit,
        total_debit,
        net_cash_flow: total_credit - total_debit,
        flagged_count: txns.iter().filter(|t| t.is_flagged).count(),
    }
}
