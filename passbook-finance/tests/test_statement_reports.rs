use passbook_core::{Bank, Direction};
use passbook_finance::{monthly_summary, quality_report, summarize, transactions_csv_string};
use passbook_ingest::{ParsedStatement, StatementText, parse_statement};

const SIB_TITLE: &str = "THE SOUTH INDIAN BANK LTD.\nRegd. Office: Thrissur, Kerala";

const SIB_TEXT: &str = r#"
Statement of Account for the period 28-03-24 to 30-04-24
DATE        PARTICULARS                  CHQ.NO.   WITHDRAWALS   DEPOSITS    BALANCE
Opening Balance                                                              10,000.00
28-03-24    CASH DEPOSIT KOCHI                                   2,000.00    12,000.00
01-04-24    UPI/DR/RRN-409112345678/SWIGGY/           250.00                 11,750.00
            YESB/paytm-swiggy@ptybl
02-04-24    NEFT BY ACME CORP SALARY                            50,000.00    61,750.00
03-04-24    ATM WDL KOCHI MG ROAD                  10,000.00                 51,750.00
Page Total                                         10,250.00    52,000.00
15-04-24    UPI/DR/RRN-410598765432/HOUSE RENT     18,000.00                 33,750.00
29-04-24    SMS CHARGES QTR                            17.70                 33,732.30
Closing Balance                                                              33,732.30
This is a system generated statement. IFSC: SIBL0000123 Ph: 04842345678
"#;

fn parse() -> ParsedStatement {
    let text = StatementText::new(SIB_TEXT).unwrap();
    parse_statement(SIB_TITLE, &text).unwrap()
}

/// End to end: title routing, extraction, then every downstream report.
#[test]
fn test_sib_statement_reports() {
    let parsed = parse();
    assert_eq!(parsed.bank, Bank::Sib);
    assert_eq!(parsed.transactions.len(), 6);

    let directions: Vec<Direction> = parsed.transactions.iter().map(|t| t.direction()).collect();
    assert_eq!(
        directions,
        vec![
            Direction::Credit,
            Direction::Debit,
            Direction::Credit,
            Direction::Debit,
            Direction::Debit,
            Direction::Debit,
        ]
    );

    let summary = summarize(&parsed.transactions);
    assert_eq!(summary.analytics, parsed.analytics);
    assert_eq!(summary.analytics.total_credit, 52_000.0);
    assert!((summary.analytics.total_debit - 28_267.70).abs() < 1e-6);
    assert_eq!(summary.highest_debit.as_ref().unwrap().amount, 18_000.0);

    let months = monthly_summary(&parsed.transactions);
    let labels: Vec<&str> = months.iter().map(|m| m.month.as_str()).collect();
    assert_eq!(labels, vec!["2024-03", "2024-04"]);
    assert_eq!(months[0].txn_count, 1);
    assert_eq!(months[1].txn_count, 5);

    let quality = quality_report(&parsed.transactions);
    assert_eq!(quality.total_rows, 6);
    assert_eq!(quality.balance_mismatches, 0);
    assert_eq!(quality.flagged_rows, 0);
}

#[test]
fn test_reference_numbers_isolated() {
    let parsed = parse();
    let rent = parsed
        .transactions
        .iter()
        .find(|t| t.description.contains("HOUSE RENT"))
        .unwrap();
    assert_eq!(rent.ref_no.as_deref(), Some("410598765432"));
    assert!(!rent.description.contains("410598765432"));
}

#[test]
fn test_csv_has_row_per_transaction() {
    let parsed = parse();
    let csv = transactions_csv_string(&parsed.transactions).unwrap();
    assert_eq!(csv.lines().count(), parsed.transactions.len() + 1);
    assert!(csv.contains("NEFT BY ACME CORP SALARY"));
}

#[test]
fn test_wire_format() {
    let v = serde_json::to_value(parse()).unwrap();
    assert_eq!(v["bank"], "SIB");
    assert_eq!(v["analytics"]["totalCredit"], 52_000.0);
    assert_eq!(v["transactions"][0]["id"], 1);
    assert_eq!(v["transactions"][0]["txn_date"], "28-03-24");
}
