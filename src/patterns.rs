//! Named field matchers used by the extractors.
//!
//! ## Why a pattern library instead of one big regex?
//!
//! Résumé text is noisy enough that any single document-wide pattern either
//! over-matches or silently misses whole sections. Splitting the matching
//! into small, named, independently testable functions keeps every failure
//! mode per-field: a phone number that does not match costs exactly one
//! field's fallback, never the document.
//!
//! Every matcher is total — it returns `Option`/`String` and never errors.
//! All fixed patterns are compiled once behind `Lazy`; only
//! [`full_name`] builds its regex per call because the pattern depends on the
//! caller's default record.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// Collapse any whitespace runs (including newlines) to single spaces.
pub(crate) fn collapse_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ── Contact fields ───────────────────────────────────────────────────────────

static RE_EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\w.\-]+@[\w.\-]+\.[A-Za-z]{2,}").unwrap());

/// First RFC-loose email-shaped token in the document.
pub fn email(text: &str) -> Option<&str> {
    RE_EMAIL.find(text).map(|m| m.as_str())
}

static RE_PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\+?\d[\d\-\s]{8,}").unwrap());

/// First phone-shaped token: optional leading `+`, a digit, then at least 8
/// more digits/dashes/spaces. Whitespace-collapsed.
pub fn phone(text: &str) -> Option<String> {
    RE_PHONE
        .find(text)
        .map(|m| collapse_ws(m.as_str()))
        .filter(|p| !p.is_empty())
}

static RE_LINKEDIN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)https?://\S*linkedin\S*").unwrap());

/// First URL-shaped token containing "linkedin".
pub fn linkedin(text: &str) -> Option<&str> {
    RE_LINKEDIN.find(text).map(|m| m.as_str())
}

/// First whole-document occurrence of the given full name, matched
/// case-insensitively with flexible inter-word whitespace.
///
/// The name comes from the caller's default record, so the regex is built per
/// call (with every part escaped). An unmatchable or empty name yields `None`
/// and the caller falls back.
pub fn full_name(name: &str, text: &str) -> Option<String> {
    let parts: Vec<String> = name.split_whitespace().map(|p| regex::escape(p)).collect();
    if parts.is_empty() {
        return None;
    }
    let pattern = format!(r"(?i)\b{}\b", parts.join(r"\s+"));
    let re = Regex::new(&pattern).ok()?;
    re.find(text).map(|m| collapse_ws(m.as_str()))
}

// ── Date periods ─────────────────────────────────────────────────────────────

/// Date-range shapes, most specific first. First match wins.
///
/// 1. "Jan 2020 – Mar 2022" / "April 2021 - June 2023"
/// 2. "Jul 2022 – Present" (open-ended month range)
/// 3. "2018 – 2022" (bare year range)
/// 4. "Mar. 2021 …" (abbreviated month + year, rest of line)
static PERIOD_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"\b\w{3,}\.?\s?\d{4}\s?[–-]\s?\w{3,}\.?\s?\d{4}").unwrap(),
        Regex::new(r"\b\w{3,}\.?\s?\d{4}\s?[–-]\s?\w{3,}").unwrap(),
        Regex::new(r"\b\d{4}\s?[–-]\s?\d{4}\b").unwrap(),
        Regex::new(r"\b\w{3}\.?\s?\d{4}\b.*").unwrap(),
    ]
});

/// First date-range match in `text`: the matched byte span plus the
/// whitespace-collapsed period string.
///
/// The span lets callers excise the period from a header line without
/// re-searching for the collapsed form (which may no longer appear verbatim).
pub fn period(text: &str) -> Option<(Range<usize>, String)> {
    PERIOD_PATTERNS
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| (m.range(), collapse_ws(m.as_str())))
}

/// Bare year range, e.g. "2014 – 2018". Used by the education extractor.
pub fn year_range(text: &str) -> Option<&str> {
    static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{4}\s?[–-]\s?\d{4}\b").unwrap());
    RE.find(text).map(|m| m.as_str())
}

// ── Education fields ─────────────────────────────────────────────────────────

/// Signal that a candidate line is an education entry at all.
///
/// The degree abbreviations are matched case-sensitively and word-bounded so
/// that prose containing "be" (Bengaluru, November, …) is not accepted.
static RE_EDU_SIGNAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i:institute|university|college|bachelor|master|cgpa)|\bB\.?E\.?\b|\bB\.?Tech\b")
        .unwrap()
});

/// Does this candidate carry an institution/degree signal keyword?
pub fn has_education_signal(text: &str) -> bool {
    RE_EDU_SIGNAL.is_match(text)
}

static RE_DEGREE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:(?i:bachelor|master)[^,\n]*|\bB\.?E\.?\b[^,\n]*|\bB\.?Tech\b[^,\n]*)").unwrap()
});

/// Degree clause, e.g. "B.E. in Electronics & Communication (ECE)".
pub fn degree(text: &str) -> Option<&str> {
    RE_DEGREE.find(text).map(|m| m.as_str())
}

static RE_INSTITUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[^,\n]*\b(?:institute|university|college)\b[^,\n]*").unwrap());

/// Institution clause: the comma-delimited segment containing an
/// institute/university/college keyword.
pub fn institute(text: &str) -> Option<&str> {
    RE_INSTITUTE.find(text).map(|m| m.as_str().trim())
}

static RE_SCORE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)CGPA\s*[-:]?\s*\d+(?:\.\d+)?").unwrap());

/// CGPA score, e.g. "CGPA 8.73" or "CGPA: 9".
pub fn score(text: &str) -> Option<&str> {
    RE_SCORE.find(text).map(|m| m.as_str())
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_finds_first_token() {
        let text = "Reach me at asha.rao@example.com or a.rao@old.example.org";
        assert_eq!(email(text), Some("asha.rao@example.com"));
        assert_eq!(email("no address here"), None);
    }

    #[test]
    fn phone_collapses_whitespace() {
        assert_eq!(
            phone("call +91 98450  12345 today").as_deref(),
            Some("+91 98450 12345")
        );
        assert_eq!(phone("room 42"), None);
    }

    #[test]
    fn linkedin_matches_case_insensitively() {
        let text = "profile: HTTPS://WWW.LINKEDIN.COM/in/asha-rao done";
        assert_eq!(linkedin(text), Some("HTTPS://WWW.LINKEDIN.COM/in/asha-rao"));
        assert_eq!(linkedin("https://example.com/asha"), None);
    }

    #[test]
    fn full_name_is_whitespace_flexible() {
        assert_eq!(
            full_name("Asha Rao", "…\nASHA   RAO\n…").as_deref(),
            Some("ASHA RAO")
        );
        assert_eq!(full_name("Asha Rao", "someone else"), None);
        assert_eq!(full_name("", "anything"), None);
    }

    #[test]
    fn period_prefers_full_month_range() {
        let (range, p) = period("Engineer Jan 2020 – Mar 2022 at Initech").unwrap();
        assert_eq!(p, "Jan 2020 – Mar 2022");
        assert_eq!(&"Engineer Jan 2020 – Mar 2022 at Initech"[range], p);
    }

    #[test]
    fn period_matches_open_ended_range() {
        let (_, p) = period("Senior Engineer April 2025 – Present").unwrap();
        assert_eq!(p, "April 2025 – Present");
    }

    #[test]
    fn period_matches_bare_year_range() {
        let (_, p) = period("Consultant, 2018-2022").unwrap();
        assert_eq!(p, "2018-2022");
    }

    #[test]
    fn period_matches_abbreviated_month_to_end_of_line() {
        let (_, p) = period("Intern Mar. 2021 (summer)").unwrap();
        assert_eq!(p, "Mar. 2021 (summer)");
    }

    #[test]
    fn period_absent_when_no_date_shape() {
        assert!(period("Software Engineer: Initech").is_none());
    }

    #[test]
    fn education_signal_requires_word_bounded_abbreviation() {
        assert!(has_education_signal("B.E. in Computer Science"));
        assert!(has_education_signal("Kempegowda Institute of Technology"));
        assert!(has_education_signal("cgpa 8.5"));
        // "Be" inside ordinary words must not count as a degree.
        assert!(!has_education_signal("Based in Bengaluru since November"));
    }

    #[test]
    fn degree_stops_at_comma() {
        assert_eq!(
            degree("B.E. in Electronics & Communication (ECE), M S Ramaiah Institute"),
            Some("B.E. in Electronics & Communication (ECE)")
        );
        assert_eq!(
            degree("Bachelor of Engineering, 2018"),
            Some("Bachelor of Engineering")
        );
        assert_eq!(degree("Worked in Bengaluru"), None);
    }

    #[test]
    fn institute_returns_containing_clause() {
        assert_eq!(
            institute("B.E., M S Ramaiah Institute of Technology, Bengaluru"),
            Some("M S Ramaiah Institute of Technology")
        );
        assert_eq!(institute("no school here"), None);
    }

    #[test]
    fn score_accepts_separator_variants() {
        assert_eq!(score("graduated with CGPA 8.73"), Some("CGPA 8.73"));
        assert_eq!(score("CGPA: 9"), Some("CGPA: 9"));
        assert_eq!(score("grade A"), None);
    }

    #[test]
    fn year_range_tolerates_dash_variants() {
        assert_eq!(year_range("studied 2014 – 2018 there"), Some("2014 – 2018"));
        assert_eq!(year_range("studied 2014-2018 there"), Some("2014-2018"));
        assert_eq!(year_range("class of 2018"), None);
    }
}
