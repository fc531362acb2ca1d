//! Contact fields and the synthesized "about" narrative.
//!
//! Contact values are pattern-matched against the whole document rather than
//! a section block — résumés put them in headers, footers, and sidebars, so
//! section attribution would lose more than it gains. Each field falls back
//! individually to the default record.
//!
//! The about text is synthesized, not extracted. Free-text "About" sections
//! are too unstructured for these heuristics, so a fixed template is emitted
//! instead, substituting the caller's role and — when experience parsing
//! found anything — the first employer name.

use crate::model::ContactInfo;
use crate::patterns;

/// Extract contact fields, falling back per-field to `defaults`.
pub fn extract(text: &str, defaults: &ContactInfo) -> ContactInfo {
    ContactInfo {
        email: patterns::email(text)
            .map(str::to_string)
            .unwrap_or_else(|| defaults.email.clone()),
        phone: patterns::phone(text).unwrap_or_else(|| defaults.phone.clone()),
        linkedin: patterns::linkedin(text)
            .map(str::to_string)
            .unwrap_or_else(|| defaults.linkedin.clone()),
    }
}

/// Synthesize the about narrative from the role and, when present, the first
/// parsed employer.
pub fn synthesize_about(role: &str, first_company: Option<&str>) -> String {
    let mut about = format!("Experienced {role} with a track record of shipping production software.");
    if let Some(company) = first_company.filter(|c| !c.trim().is_empty()) {
        about.push_str(&format!(" Worked at {company}."));
    }
    about
}
