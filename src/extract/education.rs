//! Education extraction.
//!
//! Candidate entries are split at lines that begin with an uppercase letter,
//! a digit, a bullet glyph, or a pictographic symbol (degree emoji are common
//! in exported résumés). A candidate is accepted only when it carries an
//! institution/degree signal keyword; everything else is silently dropped,
//! because education sections routinely contain prose that is not an entry.
//!
//! Accepted candidates have degree, institute, period, and score extracted
//! independently — a field that does not match stays empty rather than
//! borrowing from a neighbour.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::model::EducationEntry;
use crate::patterns;

/// A line that opens a new candidate.
static RE_CANDIDATE_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\p{Extended_Pictographic}|\p{Lu}|\d|\s*•)").unwrap());

fn starts_candidate(line: &str) -> bool {
    RE_CANDIDATE_START.is_match(line)
}

/// Extract ordered education entries from the education block.
///
/// Zero accepted candidates → empty vector; the caller substitutes its
/// default education list wholesale.
pub fn extract(block: &str) -> Vec<EducationEntry> {
    let trimmed = block.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut candidates: Vec<String> = Vec::new();
    for line in trimmed.lines() {
        if candidates.is_empty() || starts_candidate(line) {
            candidates.push(line.to_string());
        } else if let Some(current) = candidates.last_mut() {
            current.push('\n');
            current.push_str(line);
        }
    }

    let entries: Vec<EducationEntry> = candidates
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .filter(|c| patterns::has_education_signal(c))
        .map(|c| EducationEntry {
            degree: patterns::degree(c).unwrap_or_default().to_string(),
            institute: patterns::institute(c).unwrap_or_default().to_string(),
            period: patterns::year_range(c).unwrap_or_default().to_string(),
            score: patterns::score(c).unwrap_or_default().to_string(),
        })
        .collect();

    debug!(entries = entries.len(), "education block extracted");
    entries
}
