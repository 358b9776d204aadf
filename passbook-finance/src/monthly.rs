//! Per-month cash flow grouped from statement transactions

use chrono::{Datelike, NaiveDate};
use log::warn;
use passbook_core::Transaction;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Date formats printed by the supported banks
const DATE_FORMATS: &[&str] = &["%d-%m-%y", "%d/%m/%Y", "%d-%m-%Y"];

/// Parse a statement date token (`01-04-24`, `01/04/2024`, ...)
pub fn parse_txn_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// `YYYY-MM` key for a transaction, if its date parses
pub fn month_key(txn: &Transaction) -> Option<String> {
    parse_txn_date(&txn.txn_date).map(|d| format!("{:04}-{:02}", d.year(), d.month()))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub month: String,
    pub total_credit: f64,
    pub total_debit: f64,
    pub net_flow: f64,
    pub txn_count: usize,
}

/// Group transactions by calendar month, oldest first.
///
/// Rows whose date does not parse are skipped.
pub fn monthly_summary(txns: &[Transaction]) -> Vec<MonthlySummary> {
    let mut groups: BTreeMap<String, (f64, f64, usize)> = BTreeMap::new();

    for txn in txns {
        let Some(month) = month_key(txn) else {
            warn!("txn {}: unparseable date {:?}, left out of monthly summary", txn.id, txn.txn_date);
            continue;
        };
        let entry = groups.entry(month).or_default();
        entry.0 += txn.credit.unwrap_or(0.0);
        entry.1 += txn.debit.unwrap_or(0.0);
        entry.2 += 1;
    }

    groups
        .into_iter()
        .map(|(month, (credit, debit, count))| MonthlySummary {
            month,
            total_credit: credit,
            total_debit: debit,
            net_flow: credit - debit,
            txn_count: count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use passbook_core::Direction;

    fn txn(id: u32, date: &str, direction: Direction, amount: f64) -> Transaction {
        Transaction::new(id, date, "t", None, direction, amount, 0.0)
    }

    #[test]
    fn test_parse_known_formats() {
        let apr1 = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        assert_eq!(parse_txn_date("01-04-24"), Some(apr1));
        assert_eq!(parse_txn_date("01/04/2024"), Some(apr1));
        assert_eq!(parse_txn_date("01-04-2024"), Some(apr1));
        assert_eq!(parse_txn_date("31-02-24"), None);
        assert_eq!(parse_txn_date("April 1"), None);
    }

    #[test]
    fn test_groups_and_sorts_by_month() {
        let txns = vec![
            txn(1, "15-05-24", Direction::Debit, 40.0),
            txn(2, "01-04-24", Direction::Credit, 100.0),
            txn(3, "20-04-24", Direction::Debit, 30.0),
            txn(4, "02-05-24", Direction::Credit, 10.0),
        ];
        let months = monthly_summary(&txns);
        assert_eq!(months.len(), 2);

        assert_eq!(months[0].month, "2024-04");
        assert_eq!(months[0].total_credit, 100.0);
        assert_eq!(months[0].total_debit, 30.0);
        assert_eq!(months[0].net_flow, 70.0);
        assert_eq!(months[0].txn_count, 2);

        assert_eq!(months[1].month, "2024-05");
        assert_eq!(months[1].net_flow, -30.0);
    }

    #[test]
    fn test_skips_unparseable_dates() {
        let txns = vec![txn(1, "garbage", Direction::Debit, 1.0)];
        assert!(monthly_summary(&txns).is_empty());
    }
}
