//! Header-line detection and section splitting.
//!
//! A résumé is partitioned into named blocks by scanning for header lines —
//! lines consisting predominantly of uppercase letters, spaces, and colons,
//! at least four characters long. A section's block runs from just after its
//! label line to the *nearest* following header line (non-greedy), or the end
//! of the document.
//!
//! Known limitation, kept on purpose: a body line written entirely in
//! capitals (a shouted achievement bullet, say) is indistinguishable from a
//! header and truncates the current section early. Fixing it would require a
//! known-header vocabulary; the per-list fallbacks downstream make the
//! failure mode "default list", not a crash.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// The five recognized top-level résumé sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    WorkExperience,
    Projects,
    Skills,
    Education,
    Certificates,
}

impl Section {
    /// All sections, in customary résumé order.
    pub const ALL: [Section; 5] = [
        Section::WorkExperience,
        Section::Projects,
        Section::Skills,
        Section::Education,
        Section::Certificates,
    ];

    /// The header label this section is recognized by (matched
    /// case-insensitively, line-anchored).
    pub fn label(&self) -> &'static str {
        match self {
            Section::WorkExperience => "WORK EXPERIENCE",
            Section::Projects => "PROJECTS",
            Section::Skills => "SKILLS",
            Section::Education => "EDUCATION",
            Section::Certificates => "CERTIFICATES",
        }
    }
}

static RE_HEADER_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][A-Z :]{3,}$").unwrap());

/// Does this line look like a section header — predominantly uppercase
/// letters/spaces/colons, length ≥ 4?
pub(crate) fn is_header_line(line: &str) -> bool {
    RE_HEADER_LINE.is_match(line.trim())
}

/// If `line` starts (after leading whitespace) with `label`, return the
/// remainder of the line after the label and an optional colon.
fn match_label<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let trimmed = line.trim_start();
    let head = trimmed.get(..label.len())?;
    if !head.eq_ignore_ascii_case(label) {
        return None;
    }
    let tail = &trimmed[label.len()..];
    Some(tail.strip_prefix(':').unwrap_or(tail))
}

/// Extract the block of text belonging to `section`.
///
/// Returns the substring after the first line-anchored, case-insensitive
/// occurrence of the section label (optional trailing colon), up to but not
/// including the next header line, trimmed. A missing label yields an empty
/// string — never an error.
pub fn section_block(text: &str, section: Section) -> String {
    let label = section.label();
    let mut block = String::new();
    let mut collecting = false;

    for line in text.lines() {
        if !collecting {
            if let Some(tail) = match_label(line, label) {
                collecting = true;
                if !tail.trim().is_empty() {
                    block.push_str(tail.trim_start());
                    block.push('\n');
                }
            }
            continue;
        }
        if is_header_line(line) {
            break;
        }
        block.push_str(line);
        block.push('\n');
    }

    let block = block.trim().to_string();
    trace!(section = label, bytes = block.len(), "section block resolved");
    block
}
