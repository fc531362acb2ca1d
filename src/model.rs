//! The structured record produced by a parse, and the default record the
//! caller supplies alongside it.
//!
//! Every type here is plain data with serde derives: the default record is
//! hand-authored JSON loaded once by the caller, and the parsed record is
//! printed back out as JSON. [`ParsedResume`] is the contract with the
//! presentation layer — every field is always populated, so a renderer never
//! needs a null-check.

use serde::{Deserialize, Serialize};

/// Identity/contact fields matched against the whole document.
///
/// Each field falls back *individually* to the default record — a résumé with
/// an email but no phone keeps its extracted email and the default phone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub linkedin: String,
}

/// One position in the work history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    /// Always non-empty; a generic label is substituted when the header line
    /// cannot be split.
    pub title: String,
    /// Empty when the header line carried no company part.
    pub company: String,
    /// Date range as written in the source, whitespace-collapsed.
    pub period: String,
    /// Bullet lines in source order, glyphs stripped.
    pub bullets: Vec<String>,
    /// Never inferred from free text — copied from the default record only.
    /// Per-job skill tags extracted heuristically are too unreliable to show.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// One project, with its technology stack matched against a fixed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    pub summary: String,
    /// Deduplicated, canonical vocabulary casing, first-seen order.
    #[serde(default)]
    pub stack: Vec<String>,
}

/// One education entry. Each field defaults independently to `""` — fields
/// never borrow from each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institute: String,
    pub period: String,
    pub score: String,
}

/// The fixed set of skill buckets.
///
/// Source labels are mapped onto this enum case-insensitively; anything that
/// does not map is folded into [`SkillCategory::Tooling`] rather than
/// discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    Languages,
    Frameworks,
    Databases,
    Tooling,
    Data,
}

impl SkillCategory {
    /// All categories, in display order.
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Languages,
        SkillCategory::Frameworks,
        SkillCategory::Databases,
        SkillCategory::Tooling,
        SkillCategory::Data,
    ];

    /// Map a source label onto a category, case-insensitively.
    ///
    /// Returns `None` for unrecognized labels; the skills extractor folds
    /// those into Tooling.
    pub fn from_label(label: &str) -> Option<SkillCategory> {
        match label.trim().to_ascii_lowercase().as_str() {
            "languages" => Some(SkillCategory::Languages),
            "frameworks" => Some(SkillCategory::Frameworks),
            "databases" => Some(SkillCategory::Databases),
            "tooling" => Some(SkillCategory::Tooling),
            "data" => Some(SkillCategory::Data),
            _ => None,
        }
    }

    /// Canonical display name, also the JSON key.
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Languages => "Languages",
            SkillCategory::Frameworks => "Frameworks",
            SkillCategory::Databases => "Databases",
            SkillCategory::Tooling => "Tooling",
            SkillCategory::Data => "Data",
        }
    }
}

/// Ordered skill names per fixed category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillMatrix {
    #[serde(rename = "Languages", default)]
    pub languages: Vec<String>,
    #[serde(rename = "Frameworks", default)]
    pub frameworks: Vec<String>,
    #[serde(rename = "Databases", default)]
    pub databases: Vec<String>,
    #[serde(rename = "Tooling", default)]
    pub tooling: Vec<String>,
    #[serde(rename = "Data", default)]
    pub data: Vec<String>,
}

impl SkillMatrix {
    /// Immutable view of one bucket.
    pub fn bucket(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::Languages => &self.languages,
            SkillCategory::Frameworks => &self.frameworks,
            SkillCategory::Databases => &self.databases,
            SkillCategory::Tooling => &self.tooling,
            SkillCategory::Data => &self.data,
        }
    }

    /// Mutable view of one bucket.
    pub fn bucket_mut(&mut self, category: SkillCategory) -> &mut Vec<String> {
        match category {
            SkillCategory::Languages => &mut self.languages,
            SkillCategory::Frameworks => &mut self.frameworks,
            SkillCategory::Databases => &mut self.databases,
            SkillCategory::Tooling => &mut self.tooling,
            SkillCategory::Data => &mut self.data,
        }
    }

    /// True when no bucket holds any item — the whole-map fallback trigger.
    pub fn is_empty(&self) -> bool {
        SkillCategory::ALL.iter().all(|c| self.bucket(*c).is_empty())
    }

    /// Total item count across all buckets.
    pub fn len(&self) -> usize {
        SkillCategory::ALL.iter().map(|c| self.bucket(*c).len()).sum()
    }
}

/// The fully-populated output record.
///
/// Also the shape of the caller-supplied default record: every fallback path
/// reads from an instance of this type, per-field or per-list. Produced once
/// per parse invocation and owned by the caller; the parser holds no state
/// across calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub name: String,
    pub role: String,
    pub contact: ContactInfo,
    pub about: String,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: SkillMatrix,
    pub certificates: Vec<String>,
}

impl ParsedResume {
    /// Deserialize a record (typically the caller's defaults file) from JSON.
    pub fn from_json(json: &str) -> Result<ParsedResume, serde_json::Error> {
        serde_json::from_str(json)
    }
}
