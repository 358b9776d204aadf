use passbook_finance::{MonthlySummary, QualityReport, StatementSummary};
use passbook_ingest::ParsedStatement;

/// Human-readable statement report on stdout
pub fn print_report(
    parsed: &ParsedStatement,
    summary: &StatementSummary,
    months: &[MonthlySummary],
    quality: &QualityReport,
) {
    println!("# {} statement\n", parsed.bank.display_name());

    println!("## Transactions\n");
    for t in &parsed.transactions {
        let (side, amount) = match (t.debit, t.credit) {
            (Some(d), _) => ("DR", d),
            (_, Some(c)) => ("CR", c),
            _ => ("--", 0.0),
        };
        println!(
            "{:>4} {} {} {:>12.2} bal={:>12.2} | {}{}",
            t.id,
            t.txn_date,
            side,
            amount,
            t.balance,
            t.description,
            t.ref_no
                .as_deref()
                .map(|r| format!(" (ref {r})"))
                .unwrap_or_default()
        );
    }

    let a = &summary.analytics;
    println!("\n## Totals\n");
    println!("- Credit:   {:.2}", a.total_credit);
    println!("- Debit:    {:.2}", a.total_debit);
    println!("- Net flow: {:.2}", a.net_cash_flow);
    println!("- Flagged:  {}", a.flagged_count);
    if let Some(h) = &summary.highest_debit {
        println!("- Highest debit: {:.2} on {} ({})", h.amount, h.date, h.description);
    }
    println!("- Projected next month: {:.2}", summary.projected_next_month);

    println!("\n## Monthly\n");
    for m in months {
        println!(
            "- {} credit={:.2} debit={:.2} net={:.2} count={}",
            m.month, m.total_credit, m.total_debit, m.net_flow, m.txn_count
        );
    }

    println!("\n## Quality\n");
    println!("- Rows: {}", quality.total_rows);
    println!("- Average confidence: {:.0}%", quality.avg_confidence * 100.0);
    println!("- Low confidence rows: {}", quality.low_confidence_rows);
    println!("- Balance mismatches: {}", quality.balance_mismatches);
}
