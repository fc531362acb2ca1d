//! Skills extraction.
//!
//! One `Category: item, item, …` line per category. Lines with no colon or
//! no items are ignored — résumé skills sections are full of stray prose and
//! that is not an error. Recognized category labels populate their bucket
//! directly; an unrecognized label keeps its items by folding them into
//! Tooling instead of discarding them.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::model::{SkillCategory, SkillMatrix};

/// Item separators: comma or any of the common bullet glyph variants.
static RE_ITEM_SEP: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,•·‣]").unwrap());

fn split_items(raw: &str) -> Vec<String> {
    RE_ITEM_SEP
        .split(raw)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extract the skill matrix from the skills block.
///
/// An all-empty matrix signals the caller to substitute its default map
/// wholesale.
pub fn extract(block: &str) -> SkillMatrix {
    let mut matrix = SkillMatrix::default();

    for line in block.lines() {
        let Some((label, rest)) = line.split_once(':') else {
            continue;
        };
        let items = split_items(rest);
        if items.is_empty() {
            continue;
        }
        match SkillCategory::from_label(label) {
            Some(category) => *matrix.bucket_mut(category) = items,
            None => matrix.tooling.extend(items),
        }
    }

    debug!(items = matrix.len(), "skills block extracted");
    matrix
}
