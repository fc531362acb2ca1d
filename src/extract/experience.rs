//! Work-history extraction.
//!
//! An entry candidate starts at a line beginning with a known job-title
//! keyword and runs until a blank line, the next header-like line, or the end
//! of the block. The first line of the candidate is its header (title,
//! company, period); the remaining lines are bullets.
//!
//! Tags are always left empty here. Free-text extraction of a reliable
//! per-job skill-tag list is not achievable with these heuristics, so tags
//! come only from the caller's default data.

use tracing::debug;

use crate::extract::strip_bullet;
use crate::model::ExperienceEntry;
use crate::patterns;
use crate::sections::is_header_line;

/// Title keywords that open an experience entry, lowercase.
///
/// Matched as a case-insensitive prefix of the trimmed line. Seniority
/// variants are listed explicitly because prefix matching cannot see through
/// a leading "Senior".
const TITLE_KEYWORDS: &[&str] = &[
    "senior software engineer",
    "staff software engineer",
    "principal software engineer",
    "lead software engineer",
    "software engineer",
    "software developer",
    "backend engineer",
    "frontend engineer",
    "full stack engineer",
    "full-stack engineer",
    "data engineer",
    "devops engineer",
    "site reliability engineer",
];

/// Title substituted when the header line cannot be split into a title at
/// all. The entry invariant is "title is never empty".
const FALLBACK_TITLE: &str = "Software Engineer";

fn starts_entry(line: &str) -> bool {
    let lowered = line.trim_start().to_lowercase();
    TITLE_KEYWORDS.iter().any(|k| lowered.starts_with(k))
}

/// Extract ordered experience entries from the work-experience block.
///
/// Returns an empty vector when nothing matches; the caller substitutes its
/// default experience list wholesale. A partial list is considered worse
/// than a complete default, so there is no per-entry fallback here.
pub fn extract(block: &str) -> Vec<ExperienceEntry> {
    let lines: Vec<&str> = block.lines().collect();
    let mut entries = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if !starts_entry(lines[i]) {
            i += 1;
            continue;
        }

        // Candidate run: up to a blank line, a header-like line, or EOF.
        let start = i;
        let mut end = i + 1;
        while end < lines.len() && !lines[end].trim().is_empty() && !is_header_line(lines[end]) {
            end += 1;
        }
        i = end;

        let header = lines[start].trim();
        let bullets: Vec<String> = lines[start + 1..end]
            .iter()
            .map(|l| strip_bullet(l).to_string())
            .filter(|l| !l.is_empty())
            .collect();

        entries.push(parse_header(header, bullets));
    }

    debug!(entries = entries.len(), "experience block extracted");
    entries
}

/// Split a header line into (title, company, period).
fn parse_header(header: &str, bullets: Vec<String>) -> ExperienceEntry {
    let (period, remainder) = match patterns::period(header) {
        Some((range, period)) => {
            let mut rest = String::with_capacity(header.len());
            rest.push_str(&header[..range.start]);
            rest.push_str(&header[range.end..]);
            (period, rest.trim().to_string())
        }
        None => (String::new(), header.to_string()),
    };

    let (title, company) = match remainder.split_once(':') {
        Some((t, c)) => (t.trim().to_string(), c.trim().to_string()),
        None => match remainder.split_once(" - ") {
            Some((t, c)) => (t.trim().to_string(), c.trim().to_string()),
            None => (remainder.trim().to_string(), String::new()),
        },
    };

    ExperienceEntry {
        title: if title.is_empty() { FALLBACK_TITLE.to_string() } else { title },
        company,
        period,
        bullets,
        tags: Vec::new(),
    }
}
