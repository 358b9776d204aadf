//! Noise filter: undo layout stutter and drop boilerplate lines

use regex::Regex;

/// Collapse runs of 3+ identical uppercase letters to one (`SSSTTTAAA` -> `STA`).
///
/// Pairs are left alone since real words contain them.
pub fn collapse_stutter(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        let mut run = 1;
        while chars.peek() == Some(&c) {
            chars.next();
            run += 1;
        }

        let keep = if c.is_ascii_uppercase() && run >= 3 { 1 } else { run };
        out.extend(std::iter::repeat_n(c, keep));
    }

    out
}

/// Drop every line matching a boilerplate pattern. Order is preserved.
///
/// Patterns are tested against the whitespace-collapsed line; surviving
/// lines are kept as printed.
pub fn filter_noise(text: &str, noise: &[Regex]) -> String {
    let text = collapse_stutter(text);

    text.lines()
        .filter(|line| {
            let normalized = line.split_whitespace().collect::<Vec<_>>().join(" ");
            !noise.iter().any(|re| re.is_match(&normalized))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
