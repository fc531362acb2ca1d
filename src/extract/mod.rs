//! Entity extractors — one per section kind.
//!
//! Each submodule turns one section block into an ordered sequence of
//! structured entities (or scalar fields, for contact). Extractors are
//! independent: none reads another's output, and each is total over its
//! input — "no match" produces an empty result that the parse entry point
//! replaces with the caller's default.
//!
//! ## Data Flow
//!
//! ```text
//! raw text ──▶ normalize ──▶ section blocks ──▶ extractors ──▶ assembly
//!                              (splitter)        (this mod)    (parse.rs)
//! ```

pub mod certificates;
pub mod contact;
pub mod education;
pub mod experience;
pub mod projects;
pub mod skills;

use once_cell::sync::Lazy;
use regex::Regex;

static RE_BULLET_GLYPH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*[•·▪‣∙]\s*").unwrap());

/// Strip one leading bullet glyph (and surrounding whitespace) from a line.
pub(crate) fn strip_bullet(line: &str) -> &str {
    match RE_BULLET_GLYPH.find(line) {
        Some(m) => line[m.end()..].trim(),
        None => line.trim(),
    }
}
