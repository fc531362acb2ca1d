//! Whitespace cleanup applied before any section splitting.
//!
//! PDF text extractors emit non-breaking spaces where the document used
//! layout spacing, and stray tabs/carriage returns between runs. Both defeat
//! the line-oriented heuristics downstream, so they are flattened to ordinary
//! spaces here. Ordinary newlines are deliberately untouched — section
//! splitting and entry detection depend on line boundaries.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_TAB_CR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\t\r]+").unwrap());

/// Normalize raw extracted text. Total over any input, including empty.
pub fn normalize(raw: &str) -> String {
    let spaced = raw.replace('\u{00A0}', " ");
    RE_TAB_CR.replace_all(&spaced, " ").into_owned()
}
