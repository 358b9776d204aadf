//! Extraction quality report for review before export

use passbook_core::Transaction;
use serde::{Deserialize, Serialize};

/// Rows below this confidence count as low-confidence
pub const LOW_CONFIDENCE: f64 = 0.8;

/// Allowed drift when re-checking balance continuity
pub const BALANCE_TOLERANCE: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityReport {
    pub total_rows: usize,
    pub flagged_rows: usize,
    /// Rounded to two decimals
    pub avg_confidence: f64,
    pub low_confidence_rows: usize,
    /// Consecutive rows whose balances do not follow from the signed amount
    pub balance_mismatches: usize,
}

pub fn quality_report(txns: &[Transaction]) -> QualityReport {
    let avg_confidence = if txns.is_empty() {
        0.0
    } else {
        let avg = txns.iter().map(|t| t.confidence).sum::<f64>() / txns.len() as f64;
        (avg * 100.0).round() / 100.0
    };

    QualityReport {
        total_rows: txns.len(),
        flagged_rows: txns.iter().filter(|t| t.is_flagged).count(),
        avg_confidence,
        low_confidence_rows: txns.iter().filter(|t| t.confidence < LOW_CONFIDENCE).count(),
        balance_mismatches: count_balance_mismatches(txns),
    }
}

/// Walk the balance chain end to end, counting breaks
pub fn count_balance_mismatches(txns: &[Transaction]) -> usize {
    txns.windows(2)
        .filter(|w| (w[0].balance + w[1].signed_amount() - w[1].balance).abs() >= BALANCE_TOLERANCE)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use passbook_core::Direction;

    fn txn(id: u32, direction: Direction, amount: f64, balance: f64) -> Transaction {
        Transaction::new(id, "01-04-24", "t", None, direction, amount, balance)
    }

    #[test]
    fn test_consistent_chain() {
        let txns = vec![
            txn(1, Direction::Credit, 1000.0, 1000.0),
            txn(2, Direction::Debit, 200.0, 800.0),
            txn(3, Direction::Credit, 50.0, 850.0),
        ];
        let r = quality_report(&txns);
        assert_eq!(r.total_rows, 3);
        assert_eq!(r.balance_mismatches, 0);
        assert_eq!(r.avg_confidence, 1.0);
        assert_eq!(r.low_confidence_rows, 0);
    }

    #[test]
    fn test_broken_chain() {
        let txns = vec![
            txn(1, Direction::Credit, 1000.0, 1000.0),
            // a dropped row between these two
            txn(2, Direction::Debit, 200.0, 500.0),
        ];
        assert_eq!(count_balance_mismatches(&txns), 1);
    }

    #[test]
    fn test_confidence_and_flags() {
        let mut txns = vec![
            txn(1, Direction::Debit, 1.0, 0.0),
            txn(2, Direction::Debit, 1.0, 0.0),
            txn(3, Direction::Debit, 1.0, 0.0),
        ];
        txns[0].confidence = 0.5;
        txns[2].is_flagged = true;
        let r = quality_report(&txns);
        assert_eq!(r.avg_confidence, 0.83);
        assert_eq!(r.low_confidence_rows, 1);
        assert_eq!(r.flagged_rows, 1);
    }

    #[test]
    fn test_empty() {
        let r = quality_report(&[]);
        assert_eq!(r.total_rows, 0);
        assert_eq!(r.avg_confidence, 0.0);
    }
}
