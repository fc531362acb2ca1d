//! Integration tests for resume-sift.
//!
//! These drive the public API over a realistic fixture résumé
//! (`fixtures/resume.txt`) and a complete hand-authored default record
//! (`fixtures/defaults.json`), plus the contract properties the parser
//! guarantees: full population, exact default substitution, and round-trip
//! stability against the default record's own rendered text.

use resume_sift::{parse_resume, ParsedResume, SkillCategory};

// ── Test helpers ─────────────────────────────────────────────────────────────

fn load_defaults() -> ParsedResume {
    ParsedResume::from_json(include_str!("fixtures/defaults.json"))
        .expect("defaults fixture must be a complete record")
}

fn fixture_text() -> &'static str {
    include_str!("fixtures/resume.txt")
}

/// Assert the record is safe to render: every top-level field populated.
fn assert_fully_populated(record: &ParsedResume, context: &str) {
    assert!(!record.name.is_empty(), "[{context}] name is empty");
    assert!(!record.role.is_empty(), "[{context}] role is empty");
    assert!(!record.about.is_empty(), "[{context}] about is empty");
    assert!(!record.contact.email.is_empty(), "[{context}] email is empty");
    assert!(!record.contact.phone.is_empty(), "[{context}] phone is empty");
    assert!(
        !record.contact.linkedin.is_empty(),
        "[{context}] linkedin is empty"
    );
    assert!(!record.education.is_empty(), "[{context}] education is empty");
    assert!(!record.experience.is_empty(), "[{context}] experience is empty");
    assert!(!record.projects.is_empty(), "[{context}] projects is empty");
    assert!(!record.skills.is_empty(), "[{context}] skill matrix is empty");
    assert!(
        !record.certificates.is_empty(),
        "[{context}] certificates is empty"
    );
    for entry in &record.experience {
        assert!(!entry.title.is_empty(), "[{context}] entry title is empty");
    }
}

/// Render a record back to the plain-text layout the parser expects.
/// Mirrors the header layout of the fixture résumé.
fn render_to_text(record: &ParsedResume) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n{}\n", record.name, record.role));
    out.push_str(&format!(
        "{} | {} | {}\n\n",
        record.contact.phone, record.contact.email, record.contact.linkedin
    ));

    out.push_str("WORK EXPERIENCE\n");
    for e in &record.experience {
        out.push_str(&format!("{}: {} {}\n", e.title, e.company, e.period));
        for b in &e.bullets {
            out.push_str(&format!("• {b}\n"));
        }
        out.push('\n');
    }

    out.push_str("PROJECTS\n");
    for p in &record.projects {
        out.push_str(&format!("{}:\n{}\n", p.name, p.summary));
    }

    out.push_str("\nSKILLS\n");
    for category in SkillCategory::ALL {
        let bucket = record.skills.bucket(category);
        if !bucket.is_empty() {
            out.push_str(&format!("{}: {}\n", category.label(), bucket.join(", ")));
        }
    }

    out.push_str("\nEDUCATION\n");
    for e in &record.education {
        out.push_str(&format!(
            "{}, {}, {}, {}\n",
            e.degree, e.institute, e.period, e.score
        ));
    }

    out.push_str("\nCERTIFICATES\n");
    for c in &record.certificates {
        out.push_str(&format!("• {c}\n"));
    }

    out
}

// ── Fixture résumé ───────────────────────────────────────────────────────────

#[test]
fn fixture_resume_parses_all_sections() {
    let parsed = parse_resume(fixture_text(), &load_defaults());
    assert_fully_populated(&parsed, "fixture");

    // Identity and contact come from the document.
    assert_eq!(parsed.name, "ASHA RAO");
    assert_eq!(parsed.contact.email, "asha.rao@example.com");
    assert_eq!(parsed.contact.phone, "+91 98450 12345");
    assert_eq!(parsed.contact.linkedin, "https://www.linkedin.com/in/asha-rao");

    // Experience: two entries, split and ordered.
    assert_eq!(parsed.experience.len(), 2);
    assert_eq!(parsed.experience[0].title, "Senior Software Engineer");
    assert_eq!(parsed.experience[0].company, "Initech");
    assert_eq!(parsed.experience[0].period, "Jan 2020 – Mar 2022");
    assert_eq!(parsed.experience[0].bullets.len(), 3);
    assert_eq!(parsed.experience[1].company, "Hooli");
    assert_eq!(parsed.experience[1].bullets.len(), 3);

    // Projects: label-line chunk and bullet chunk.
    assert_eq!(parsed.projects.len(), 2);
    assert_eq!(parsed.projects[0].name, "Ledger Sync");
    assert_eq!(parsed.projects[0].stack, vec!["Rust", "PostgreSQL"]);
    assert_eq!(parsed.projects[1].name, "Watch Deck");
    assert_eq!(parsed.projects[1].stack, vec!["Kotlin", "Redis"]);

    // Skills: known categories direct, unknown "Infra" folded into Tooling.
    assert_eq!(parsed.skills.languages, vec!["Python", "Rust", "Kotlin"]);
    assert_eq!(parsed.skills.frameworks, vec!["Django", "Celery"]);
    assert_eq!(parsed.skills.databases, vec!["PostgreSQL", "Redis"]);
    assert_eq!(parsed.skills.tooling, vec!["Docker", "Kubernetes"]);

    // Education: the prose line produces no entry.
    assert_eq!(parsed.education.len(), 1);
    assert_eq!(parsed.education[0].score, "CGPA 8.5");
    assert_eq!(parsed.education[0].period, "2014 – 2018");

    assert_eq!(
        parsed.certificates,
        vec!["AWS Solutions Architect", "CKA: Certified Kubernetes Administrator"]
    );

    // About is synthesized with the first parsed employer.
    assert!(parsed.about.contains("Worked at Initech."));
}

// ── Contract properties ──────────────────────────────────────────────────────

#[test]
fn every_input_yields_a_fully_populated_record() {
    let defaults = load_defaults();
    for input in ["", "\n\n\n", "completely unrelated prose about gardening", fixture_text()] {
        let parsed = parse_resume(input, &defaults);
        assert_fully_populated(&parsed, "arbitrary input");
    }
}

#[test]
fn missing_sections_equal_the_default_exactly() {
    let defaults = load_defaults();
    let parsed = parse_resume("SKILLS\nLanguages: Go\n", &defaults);

    assert_eq!(parsed.experience, defaults.experience);
    assert_eq!(parsed.projects, defaults.projects);
    assert_eq!(parsed.education, defaults.education);
    assert_eq!(parsed.certificates, defaults.certificates);
    // The one present section is parsed, not defaulted.
    assert_eq!(parsed.skills.languages, vec!["Go"]);
}

#[test]
fn garbage_input_returns_the_default_record_lists() {
    let defaults = load_defaults();
    let parsed = parse_resume("%%%%\u{0}\u{0}not a resume at all", &defaults);
    assert_eq!(parsed.experience, defaults.experience);
    assert_eq!(parsed.projects, defaults.projects);
    assert_eq!(parsed.skills, defaults.skills);
    assert_eq!(parsed.education, defaults.education);
    assert_eq!(parsed.certificates, defaults.certificates);
}

#[test]
fn parsing_is_deterministic() {
    let defaults = load_defaults();
    let first = parse_resume(fixture_text(), &defaults);
    let second = parse_resume(fixture_text(), &defaults);
    assert_eq!(first, second);
}

#[test]
fn round_trip_of_rendered_defaults_keeps_list_lengths() {
    let defaults = load_defaults();
    let rendered = render_to_text(&defaults);
    let parsed = parse_resume(&rendered, &defaults);

    assert_eq!(parsed.experience.len(), defaults.experience.len());
    assert_eq!(parsed.projects.len(), defaults.projects.len());
    assert_eq!(parsed.education.len(), defaults.education.len());
    assert_eq!(parsed.certificates.len(), defaults.certificates.len());
    for category in SkillCategory::ALL {
        assert_eq!(
            parsed.skills.bucket(category).len(),
            defaults.skills.bucket(category).len(),
            "bucket {:?} length drifted",
            category
        );
    }
}

#[test]
fn noisy_whitespace_does_not_change_the_outcome() {
    let defaults = load_defaults();
    let noisy = fixture_text()
        .replace(' ', "\u{00A0}")
        .replace("• ", "•\t");
    let clean = parse_resume(fixture_text(), &defaults);
    let parsed = parse_resume(&noisy, &defaults);
    assert_eq!(parsed.experience.len(), clean.experience.len());
    assert_eq!(parsed.skills.languages, clean.skills.languages);
}
