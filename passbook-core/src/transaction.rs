//! Transaction records produced by statement extraction

use serde::{Deserialize, Serialize};

/// Which side of the ledger an amount landed on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Direction {
    #[serde(rename = "debit")]
    Debit,
    #[serde(rename = "credit")]
    Credit,
}

impl Direction {
    pub fn is_debit(&self) -> bool {
        matches!(self, Direction::Debit)
    }
}

/// One transaction line recovered from a statement, in document order.
///
/// Exactly one of `debit` / `credit` is set. Build through
/// [`Transaction::new`] to keep that true.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// 1-based position within a single parse
    pub id: u32,
    /// Date token exactly as printed on the statement
    pub txn_date: String,
    /// Whitespace-normalized narration
    pub description: String,
    /// Cheque / reference number (6-12 digits) when one was isolated
    pub ref_no: Option<String>,
    pub debit: Option<f64>,
    pub credit: Option<f64>,
    /// Running balance after this transaction, as printed
    pub balance: f64,
    /// Classification certainty (0.0 - 1.0)
    pub confidence: f64,
    /// Downstream review marker; extraction never sets it
    pub is_flagged: bool,
}

impl Transaction {
    /// Create a new Transaction with the amount placed on the given side
    pub fn new(
        id: u32,
        txn_date: impl Into<String>,
        description: impl Into<String>,
        ref_no: Option<String>,
        direction: Direction,
        amount: f64,
        balance: f64,
    ) -> Self {
        let (debit, credit) = match direction {
            Direction::Debit => (Some(amount), None),
            Direction::Credit => (None, Some(amount)),
        };
        Self {
            id,
            txn_date: txn_date.into(),
            description: description.into(),
            ref_no,
            debit,
            credit,
            balance,
            confidence: 1.0,
            is_flagged: false,
        }
    }

    pub fn direction(&self) -> Direction {
        if self.credit.is_some() {
            Direction::Credit
        } else {
            Direction::Debit
        }
    }

    /// The unsigned amount, whichever side it sits on
    pub fn amount(&self) -> f64 {
        self.debit.or(self.credit).unwrap_or(0.0)
    }

    /// Positive = money in, negative = money out
    pub fn signed_amount(&self) -> f64 {
        match self.direction() {
            Direction::Credit => self.amount(),
            Direction::Debit => -self.amount(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debit_and_credit_are_exclusive() {
        let d = Transaction::new(1, "01-04-24", "ATM WDL", None, Direction::Debit, 200.0, 800.0);
        assert_eq!(d.debit, Some(200.0));
        assert_eq!(d.credit, None);
        assert_eq!(d.signed_amount(), -200.0);

        let c = Transaction::new(2, "02-04-24", "BY CASH", None, Direction::Credit, 50.0, 850.0);
        assert_eq!(c.debit, None);
        assert_eq!(c.credit, Some(50.0));
        assert_eq!(c.direction(), Direction::Credit);
        assert_eq!(c.amount(), 50.0);
    }

    #[test]
    fn test_defaults_confidence_and_flag() {
        let t = Transaction::new(1, "01-04-24", "x", None, Direction::Debit, 1.0, 0.0);
        assert_eq!(t.confidence, 1.0);
        assert!(!t.is_flagged);
    }

    #[test]
    fn test_serializes_snake_case_fields() {
        let t = Transaction::new(
            3,
            "03-04-24",
            "NEFT BY ACME",
            Some("123456".into()),
            Direction::Credit,
            10.0,
            20.0,
        );
        let v = serde_json::to_value(&t).unwrap();
        assert_eq!(v["txn_date"], "03-04-24");
        assert_eq!(v["ref_no"], "123456");
        assert!(v["debit"].is_null());
        assert_eq!(v["is_flagged"], false);
    }
}
