//! The parse entry point: one input string + one default record in, one
//! fully-populated [`ParsedResume`] out.
//!
//! ## Why an explicit defaults parameter?
//!
//! Every fallback path reads from the default record the caller passes in —
//! there is no hidden global fallback object. That makes the fallback
//! behaviour an explicit, testable contract per component: lists fall back
//! wholesale when extraction yields nothing (a partial experience list reads
//! worse than a complete default one), scalar contact fields fall back
//! individually.
//!
//! The function is a pure, synchronous transformation with no I/O and no
//! state across calls; it is safe to invoke concurrently without
//! coordination. It never fails: the worst case for any input — including
//! empty text — is "return the default record", which is the designed safety
//! net.

use tracing::debug;

use crate::extract::{certificates, contact, education, experience, projects, skills};
use crate::model::ParsedResume;
use crate::normalize::normalize;
use crate::patterns;
use crate::sections::{section_block, Section};

/// Parse linearized résumé text into a structured record.
///
/// `defaults` must be a complete record; any section that extracts to
/// nothing is answered from it.
///
/// # Example
/// ```rust
/// use resume_sift::{parse_resume, ParsedResume};
///
/// let defaults = ParsedResume::from_json(r#"{
///     "name": "Asha Rao",
///     "role": "Senior Software Engineer",
///     "contact": {
///         "email": "asha.rao@example.com",
///         "phone": "+91 98450 12345",
///         "linkedin": "https://www.linkedin.com/in/asha-rao"
///     },
///     "about": "Backend engineer.",
///     "education": [],
///     "experience": [],
///     "projects": [],
///     "skills": {},
///     "certificates": []
/// }"#).unwrap();
///
/// let text = "WORK EXPERIENCE\nSoftware Engineer: Initech Jan 2020 – Mar 2022\n• Shipped it.\n";
/// let parsed = parse_resume(text, &defaults);
/// assert_eq!(parsed.experience[0].company, "Initech");
/// ```
pub fn parse_resume(raw_text: &str, defaults: &ParsedResume) -> ParsedResume {
    let text = normalize(raw_text);

    // ── Whole-document fields ────────────────────────────────────────────
    let name = patterns::full_name(&defaults.name, &text).unwrap_or_else(|| defaults.name.clone());
    let contact = contact::extract(&text, &defaults.contact);

    // ── Section blocks ───────────────────────────────────────────────────
    let work_block = section_block(&text, Section::WorkExperience);
    let projects_block = section_block(&text, Section::Projects);
    let skills_block = section_block(&text, Section::Skills);
    let education_block = section_block(&text, Section::Education);
    let certificates_block = section_block(&text, Section::Certificates);

    // ── Entity extraction ────────────────────────────────────────────────
    let experience = experience::extract(&work_block);
    let projects = projects::extract(&projects_block);
    let skills = skills::extract(&skills_block);
    let education = education::extract(&education_block);
    let certificates = certificates::extract(&certificates_block);

    // About is synthesized from the entries actually parsed, before any
    // fallback: a default experience list must not masquerade as a parsed
    // employer.
    let about = contact::synthesize_about(
        &defaults.role,
        experience.first().map(|e| e.company.as_str()),
    );

    debug!(
        experience = experience.len(),
        projects = projects.len(),
        education = education.len(),
        skills = skills.len(),
        certificates = certificates.len(),
        "résumé parsed"
    );

    // ── Assembly with entry-level fallbacks ──────────────────────────────
    ParsedResume {
        name,
        role: defaults.role.clone(),
        contact,
        about,
        education: fallback_list(education, &defaults.education),
        experience: fallback_list(experience, &defaults.experience),
        projects: fallback_list(projects, &defaults.projects),
        skills: if skills.is_empty() {
            defaults.skills.clone()
        } else {
            skills
        },
        certificates: fallback_list(certificates, &defaults.certificates),
    }
}

/// Whole-list fallback: an empty extraction is answered by the default list.
fn fallback_list<T: Clone>(extracted: Vec<T>, default: &[T]) -> Vec<T> {
    if extracted.is_empty() {
        default.to_vec()
    } else {
        extracted
    }
}
