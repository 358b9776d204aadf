//! Bank identification from statement title text

use serde::{Deserialize, Serialize};
use std::fmt;

/// Banks whose statement layouts are modeled
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Bank {
    /// State Bank of India (grid-tabular layout)
    #[serde(rename = "SBI")]
    Sbi,
    /// South Indian Bank (free-flow layout)
    #[serde(rename = "SIB")]
    Sib,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl Bank {
    /// Stable identifier used in output and error messages
    pub fn code(&self) -> &'static str {
        match self {
            Bank::Sbi => "SBI",
            Bank::Sib => "SIB",
            Bank::Unknown => "UNKNOWN",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Bank::Sbi => "State Bank of India",
            Bank::Sib => "South Indian Bank",
            Bank::Unknown => "Unknown bank",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Bank::Unknown)
    }

    /// Parse a user-supplied bank code (case-insensitive)
    pub fn from_code(code: &str) -> Option<Bank> {
        match code.trim().to_ascii_uppercase().as_str() {
            "SBI" => Some(Bank::Sbi),
            "SIB" => Some(Bank::Sib),
            _ => None,
        }
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Compact markers checked in priority order against letters-only text
const MARKERS: &[(&str, Bank)] = &[
    ("SOUTHINDIANBANK", Bank::Sib),
    ("STATEBANKOFINDIA", Bank::Sbi),
];

/// Identify the issuing bank from title-page text.
///
/// Uppercases and drops every non-letter so that OCR spacing such as
/// `S o u t h  I n d i a n  B a n k` still matches.
pub fn classify_bank(title: &str) -> Bank {
    let normalized: String = title
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase())
        .collect();

    MARKERS
        .iter()
        .find(|(marker, _)| normalized.contains(marker))
        .map(|(_, bank)| *bank)
        .unwrap_or(Bank::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_banks() {
        assert_eq!(classify_bank("SOUTH INDIAN BANK LTD\nStatement"), Bank::Sib);
        assert_eq!(classify_bank("State Bank of India - Account Statement"), Bank::Sbi);
    }

    #[test]
    fn test_classify_ignores_spacing_noise() {
        assert_eq!(classify_bank("S.o.u.t.h  Indian-Bank"), Bank::Sib);
        assert_eq!(classify_bank("STATE  BANK\nOF\tINDIA 12345"), Bank::Sbi);
    }

    #[test]
    fn test_sib_checked_first() {
        let both = "State Bank of India transfer to South Indian Bank";
        assert_eq!(classify_bank(both), Bank::Sib);
    }

    #[test]
    fn test_unknown() {
        assert_eq!(classify_bank("HDFC Bank"), Bank::Unknown);
        assert_eq!(classify_bank(""), Bank::Unknown);
        assert!(!Bank::Unknown.is_known());
    }

    #[test]
    fn test_codes() {
        assert_eq!(Bank::from_code("sib"), Some(Bank::Sib));
        assert_eq!(Bank::from_code("unknown"), None);
        assert_eq!(Bank::Sbi.to_string(), "SBI");
        assert_eq!(serde_json::to_value(Bank::Unknown).unwrap(), "UNKNOWN");
    }
}
