//! CSV export of parsed statements

use anyhow::{Context, Result};
use passbook_core::Transaction;
use std::io::Write;

use crate::monthly::MonthlySummary;

const TRANSACTION_HEADERS: [&str; 8] = [
    "Date",
    "Description",
    "Ref No",
    "Debit",
    "Credit",
    "Balance",
    "Confidence",
    "Flagged",
];

fn money(v: Option<f64>) -> String {
    v.map(|x| format!("{x:.2}")).unwrap_or_default()
}

/// Write one row per transaction, header first
pub fn write_transactions_csv<W: Write>(writer: W, txns: &[Transaction]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(TRANSACTION_HEADERS)?;

    for t in txns {
        wtr.write_record([
            t.txn_date.clone(),
            t.description.clone(),
            t.ref_no.clone().unwrap_or_default(),
            money(t.debit),
            money(t.credit),
            format!("{:.2}", t.balance),
            format!("{:.1}%", t.confidence * 100.0),
            if t.is_flagged { "Yes" } else { "No" }.to_string(),
        ])
        .with_context(|| format!("writing transaction {}", t.id))?;
    }

    wtr.flush().context("flushing transaction csv")?;
    Ok(())
}

pub fn write_monthly_csv<W: Write>(writer: W, months: &[MonthlySummary]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["Month", "Total Credit", "Total Debit", "Net Flow", "Transaction Count"])?;

    for m in months {
        wtr.write_record([
            m.month.clone(),
            format!("{:.2}", m.total_credit),
            format!("{:.2}", m.total_debit),
            format!("{:.2}", m.net_flow),
            m.txn_count.to_string(),
        ])?;
    }

    wtr.flush().context("flushing monthly csv")?;
    Ok(())
}

/// Convenience for callers that want the CSV in memory
pub fn transactions_csv_string(txns: &[Transaction]) -> Result<String> {
    let mut buf = Vec::new();
    write_transactions_csv(&mut buf, txns)?;
    String::from_utf8(buf).context("csv output is not utf-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monthly::monthly_summary;
    use passbook_core::Direction;

    #[test]
    fn test_transactions_csv() {
        let txns = vec![
            Transaction::new(1, "01-04-24", "UPI, SWIGGY", Some("409112345678".into()), Direction::Debit, 250.0, 9750.0),
            Transaction::new(2, "02-04-24", "NEFT BY ACME", None, Direction::Credit, 5000.0, 14750.0),
        ];
        let csv = transactions_csv_string(&txns).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Date,Description,Ref No,Debit,Credit,Balance,Confidence,Flagged");
        assert_eq!(lines[1], "01-04-24,\"UPI, SWIGGY\",409112345678,250.00,,9750.00,100.0%,No");
        assert_eq!(lines[2], "02-04-24,NEFT BY ACME,,,5000.00,14750.00,100.0%,No");
    }

    #[test]
    fn test_monthly_csv() {
        let txns = vec![Transaction::new(1, "01-04-24", "x", None, Direction::Credit, 10.0, 10.0)];
        let mut buf = Vec::new();
        write_monthly_csv(&mut buf, &monthly_summary(&txns)).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out, "Month,Total Credit,Total Debit,Net Flow,Transaction Count\n2024-04,10.00,0.00,10.00,1\n");
    }
}
