//! Dashboard-level statement summary

use passbook_core::{Analytics, Transaction, compute_analytics};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::monthly::month_key;

/// The single largest debit in a statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighestDebit {
    pub amount: f64,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementSummary {
    #[serde(flatten)]
    pub analytics: Analytics,
    pub highest_debit: Option<HighestDebit>,
    pub row_count: usize,
    /// Average net flow per calendar month covered by the statement
    pub projected_next_month: f64,
}

pub fn summarize(txns: &[Transaction]) -> StatementSummary {
    let analytics = compute_analytics(txns);

    let highest_debit = txns
        .iter()
        .filter_map(|t| t.debit.filter(|&d| d > 0.0).map(|d| (d, t)))
        .fold(None::<(f64, &Transaction)>, |best, (d, t)| match best {
            Some((max, _)) if max >= d => best,
            _ => Some((d, t)),
        })
        .map(|(amount, t)| HighestDebit {
            amount,
            date: t.txn_date.clone(),
            description: t.description.clone(),
        });

    let months: HashSet<String> = txns.iter().filter_map(month_key).collect();
    let month_count = months.len().max(1);

    StatementSummary {
        analytics,
        highest_debit,
        row_count: txns.len(),
        projected_next_month: analytics.net_cash_flow / month_count as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use passbook_core::Direction;

    fn txn(id: u32, date: &str, desc: &str, direction: Direction, amount: f64) -> Transaction {
        Transaction::new(id, date, desc, None, direction, amount, 0.0)
    }

    #[test]
    fn test_highest_debit_keeps_first_of_equal() {
        let txns = vec![
            txn(1, "01-04-24", "RENT", Direction::Debit, 900.0),
            txn(2, "02-04-24", "SALARY", Direction::Credit, 5000.0),
            txn(3, "03-04-24", "EMI", Direction::Debit, 900.0),
            txn(4, "04-04-24", "TEA", Direction::Debit, 20.0),
        ];
        let s = summarize(&txns);
        let top = s.highest_debit.unwrap();
        assert_eq!(top.amount, 900.0);
        assert_eq!(top.description, "RENT");
        assert_eq!(s.row_count, 4);
    }

    #[test]
    fn test_no_debits() {
        let txns = vec![txn(1, "01-04-24", "SALARY", Direction::Credit, 10.0)];
        assert!(summarize(&txns).highest_debit.is_none());
    }

    #[test]
    fn test_projection_averages_over_months() {
        let txns = vec![
            txn(1, "01-04-24", "SALARY", Direction::Credit, 1000.0),
            txn(2, "01-05-24", "RENT", Direction::Debit, 400.0),
        ];
        let s = summarize(&txns);
        assert_eq!(s.analytics.net_cash_flow, 600.0);
        assert_eq!(s.projected_next_month, 300.0);
    }

    #[test]
    fn test_empty_statement() {
        let s = summarize(&[]);
        assert_eq!(s.row_count, 0);
        assert_eq!(s.projected_next_month, 0.0);
    }

    #[test]
    fn test_flattened_json() {
        let v = serde_json::to_value(summarize(&[])).unwrap();
        assert_eq!(v["totalCredit"], 0.0);
        assert_eq!(v["rowCount"], 0);
        assert!(v["highestDebit"].is_null());
    }
}
