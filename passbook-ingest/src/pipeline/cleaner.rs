//! Description and reference-number cleanup

use regex::Regex;

use super::extract::ChunkFields;

/// 6-12 digit cheque / reference number
pub const REF_NO_PATTERN: &str = r"\b\d{6,12}\b";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cleaned {
    pub description: String,
    pub ref_no: Option<String>,
}

/// Compiled patterns the cleaner needs
pub struct CleanerPatterns<'a> {
    pub amount: &'a Regex,
    pub ref_no: &'a Regex,
    pub footers: &'a [Regex],
    pub artifacts: &'a [Regex],
}

/// Turn a raw chunk into a description plus optional reference number.
///
/// Consumed tokens go first, then everything from the earliest footer
/// marker on, so footer digits (PIN codes, phone numbers) never become a
/// reference number.
pub fn clean_chunk(chunk: &str, fields: &ChunkFields<'_>, patterns: &CleanerPatterns<'_>) -> Cleaned {
    let mut text = chunk.replace(['\r', '\n'], " ");
    for token in [fields.date, fields.balance_token, fields.amount_token] {
        text = text.replacen(token, "", 1);
    }

    let cut = patterns
        .footers
        .iter()
        .filter_map(|re| re.find(&text).map(|m| m.start()))
        .min()
        .unwrap_or(text.len());
    text.truncate(cut);

    let ref_no = find_ref_no(&text, patterns.amount, patterns.ref_no);
    if let Some(r) = &ref_no {
        text = text.replace(r.as_str(), "");
    }

    Cleaned {
        description: polish(&text, patterns.artifacts),
        ref_no,
    }
}

/// First 6-12 digit run that is not part of a monetary token
fn find_ref_no(text: &str, amount_re: &Regex, ref_re: &Regex) -> Option<String> {
    let money: Vec<(usize, usize)> = amount_re
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .collect();

    ref_re
        .find_iter(text)
        .find(|m| !money.iter().any(|&(s, e)| m.start() < e && s < m.end()))
        .map(|m| m.as_str().to_string())
}

fn polish(text: &str, artifacts: &[Regex]) -> String {
    let mut desc = text.trim().replace('|', " ");
    for re in artifacts {
        desc = re.replace_all(&desc, "").into_owned();
    }
    let desc = desc.replace("//", "/");
    let desc = desc.split_whitespace().collect::<Vec<_>>().join(" ");

    match desc.strip_suffix('/') {
        Some(stripped) => stripped.trim_end().to_string(),
        None => desc,
    }
}
