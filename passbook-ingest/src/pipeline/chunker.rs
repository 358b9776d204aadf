//! Split cleaned statement text into one chunk per transaction.
//!
//! A chunk starts on any line whose first non-blank content is a date
//! token and runs until the next such line.

use regex::Regex;

/// The date token at the very start of `s`, if there is one.
///
/// The token must not run on into more digits (`01-04-245` is not a date).
pub fn date_at_start<'a>(date_re: &Regex, s: &'a str) -> Option<&'a str> {
    let m = date_re.find(s)?;
    if m.start() != 0 || followed_by_digit(s, m.end()) {
        return None;
    }
    Some(m.as_str())
}

/// First bounded date token anywhere in `s`
pub fn first_date<'a>(date_re: &Regex, s: &'a str) -> Option<&'a str> {
    date_re
        .find_iter(s)
        .find(|m| !followed_by_digit(s, m.end()))
        .map(|m| m.as_str())
}

fn followed_by_digit(s: &str, end: usize) -> bool {
    s[end..].chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Partition `text` at date-anchored line starts, keeping only chunks that
/// begin with a date. Leading and trailing junk falls away.
pub fn split_chunks<'a>(text: &'a str, date_re: &Regex) -> Vec<&'a str> {
    let mut starts = Vec::new();
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if date_at_start(date_re, line.trim_start()).is_some() {
            starts.push(offset);
        }
        offset += line.len();
    }

    let mut bounds = vec![0];
    bounds.extend(starts.iter().copied().filter(|&s| s != 0));
    bounds.push(text.len());

    bounds
        .windows(2)
        .map(|w| &text[w[0]..w[1]])
        .filter(|chunk| date_at_start(date_re, chunk.trim_start()).is_some())
        .collect()
}
