//! Project extraction.
//!
//! The projects block is chunked at line boundaries that open either a
//! bulleted line or a short `label:` line. Within a chunk, the first line is
//! the header (the project name, minus any colon-introduced tail) and the
//! remaining lines join into the summary. The stack is whatever vocabulary
//! technology names appear in the summary — matched case-insensitively and
//! emitted in canonical casing, deduplicated, first-seen order.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

use crate::extract::strip_bullet;
use crate::model::ProjectEntry;

/// Fixed technology vocabulary recognized inside project summaries.
///
/// Deliberately closed: matching arbitrary capitalized tokens would turn
/// every product name into a "technology". Unknown stacks simply come out
/// empty and the UI renders the summary alone.
const STACK_VOCABULARY: &[&str] = &[
    "Django",
    "React",
    "PostgreSQL",
    "MySQL",
    "Redis",
    "Celery",
    "Kotlin",
    "Android",
    "Truffle",
    "Ganache",
    "MetaMask",
    "JWT",
    "REST",
    "GraphQL",
    "Python",
    "Rust",
    "Docker",
    "Kubernetes",
    "FastAPI",
    "AWS",
];

static RE_STACK_TOKEN: Lazy<Regex> = Lazy::new(|| {
    let alternation = STACK_VOCABULARY.join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).unwrap()
});

/// A line that opens a new chunk: a bullet, or a short `label:` prefix.
static RE_LABEL_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z][^:\n]{0,48}:").unwrap());

fn starts_chunk(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with('•') || RE_LABEL_LINE.is_match(trimmed)
}

/// Extract ordered project entries from the projects block.
///
/// Empty block or zero chunks → empty vector; the caller substitutes its
/// default project list wholesale.
pub fn extract(block: &str) -> Vec<ProjectEntry> {
    let trimmed = block.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut chunks: Vec<Vec<&str>> = Vec::new();
    for line in trimmed.lines() {
        if chunks.is_empty() || starts_chunk(line) {
            chunks.push(vec![line]);
        } else if let Some(current) = chunks.last_mut() {
            current.push(line);
        }
    }

    let entries: Vec<ProjectEntry> = chunks
        .into_iter()
        .filter_map(|chunk| parse_chunk(&chunk))
        .collect();

    debug!(entries = entries.len(), "projects block extracted");
    entries
}

fn parse_chunk(chunk: &[&str]) -> Option<ProjectEntry> {
    let lines: Vec<&str> = chunk.iter().map(|l| strip_bullet(l)).collect();
    if lines.iter().all(|l| l.is_empty()) {
        return None;
    }

    let header = lines.first().copied().unwrap_or_default();
    let header = if header.is_empty() { "Project" } else { header };
    let name = header.split(':').next().unwrap_or(header).trim().to_string();
    let summary = lines[1..]
        .iter()
        .filter(|l| !l.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    Some(ProjectEntry {
        stack: stack_of(&summary),
        name,
        summary,
    })
}

/// Vocabulary tokens found in `summary`, canonical casing, deduplicated
/// case-insensitively, first-seen order.
fn stack_of(summary: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut stack = Vec::new();
    for m in RE_STACK_TOKEN.find_iter(summary) {
        let canonical = STACK_VOCABULARY
            .iter()
            .find(|v| v.eq_ignore_ascii_case(m.as_str()))
            .copied()
            .unwrap_or(m.as_str());
        if seen.insert(canonical.to_ascii_lowercase()) {
            stack.push(canonical.to_string());
        }
    }
    stack
}
