//! Per-bank configuration bundles for the generic extraction pipeline.
//!
//! Everything that differs between statement layouts lives here; the
//! pipeline stages themselves are bank-agnostic.

use passbook_core::Bank;

/// Absolute reconciliation tolerance in currency units
pub const DEFAULT_TOLERANCE: f64 = 5.0;

/// Keyword sets for the fallback debit/credit heuristic (uppercase substrings)
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordSets {
    pub credit: Vec<String>,
    pub debit: Vec<String>,
    pub reversal: Vec<String>,
}

/// Layout description of one bank's statements
#[derive(Debug, Clone, PartialEq)]
pub struct BankProfile {
    pub bank: Bank,
    /// Date token regex; matched with a "not followed by a digit" bound
    pub date_pattern: String,
    /// Lines matching any of these (case-insensitive) are dropped
    pub noise_patterns: Vec<String>,
    /// Descriptions are cut at the earliest match of any of these
    pub footer_patterns: Vec<String>,
    /// Removed from the description during the final polish
    pub artifact_patterns: Vec<String>,
    pub keywords: KeywordSets,
    pub tolerance: f64,
    /// Monetary tokens printed after the running balance on each line
    pub trailing_money_columns: usize,
}

impl BankProfile {
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_trailing_money_columns(mut self, columns: usize) -> Self {
        self.trailing_money_columns = columns;
        self
    }
}

/// Caller-supplied adjustments layered over a built-in profile
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileOverrides {
    pub tolerance: Option<f64>,
    pub trailing_money_columns: Option<usize>,
}

impl ProfileOverrides {
    pub fn apply(&self, mut profile: BankProfile) -> BankProfile {
        if let Some(t) = self.tolerance {
            profile = profile.with_tolerance(t);
        }
        if let Some(c) = self.trailing_money_columns {
            profile = profile.with_trailing_money_columns(c);
        }
        profile
    }
}

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
