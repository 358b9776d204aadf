//! Monetary token parsing.
//!
//! Tokens look like `1,23,456.78`, optionally suffixed with `Cr` / `Dr`.

/// Parse a printed amount token into a number.
///
/// Group separators and the credit/debit suffix are stripped. Anything
/// that still fails to parse degrades to `0.0` instead of failing the
/// whole statement.
pub fn parse_amount(token: &str) -> f64 {
    let cleaned = token
        .to_uppercase()
        .replace(',', "")
        .replace("CR", "")
        .replace("DR", "");

    cleaned.trim().parse().unwrap_or(0.0)
}
