//! # resume-sift
//!
//! Heuristic résumé-text segmentation: turn the linearized text a PDF
//! extractor yields into a structured, always-renderable record.
//!
//! ## Why heuristics?
//!
//! Résumés have no schema. The same document class mixes single- and
//! multi-column layouts, decorates entries with emoji, and spells section
//! headers a dozen ways — and PDF text extraction flattens whatever layout
//! there was into a stream of lines. Semantic understanding is out of scope
//! here; what this crate does instead is make a *bounded* set of shape
//! assumptions (header lines are shouty, date ranges look like date ranges,
//! skills come as `Category: a, b, c`) and pair every assumption with a
//! fallback, so the output is always complete even when an assumption
//! misses.
//!
//! ## Pipeline Overview
//!
//! ```text
//! raw text
//!  │
//!  ├─ 1. Normalize   NBSP → space, tab/CR runs → single space
//!  ├─ 2. Split       five named section blocks via header-line detection
//!  ├─ 3. Extract     one independent extractor per section kind
//!  └─ 4. Assemble    ParsedResume, defaults filling every empty result
//! ```
//!
//! The core is a pure, synchronous function of (input text, default record):
//! no I/O, no shared state, no failure path. The caller-supplied default
//! record answers everything the heuristics cannot — per field for contact
//! scalars, per list for section entities.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use resume_sift::{parse_resume, ParsedResume};
//!
//! // The caller owns a complete, hand-authored default record.
//! let defaults = ParsedResume::from_json(&std::fs::read_to_string("defaults.json").unwrap()).unwrap();
//! let text = std::fs::read_to_string("resume.txt").unwrap_or_default();
//! let record = parse_resume(&text, &defaults);
//! println!("{}", serde_json::to_string_pretty(&record).unwrap());
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `pdf`   | via `cli` | Path → text adapter using `pdf-extract` |
//! | `cli`   | on      | Enables the `resume-sift` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! resume-sift = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod error;
pub mod extract;
pub mod model;
pub mod normalize;
pub mod parse;
pub mod patterns;
pub mod sections;

#[cfg(feature = "pdf")]
pub mod pdftext;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use error::SiftError;
pub use model::{
    ContactInfo, EducationEntry, ExperienceEntry, ParsedResume, ProjectEntry, SkillCategory,
    SkillMatrix,
};
pub use normalize::normalize;
pub use parse::parse_resume;
pub use sections::{section_block, Section};

#[cfg(feature = "pdf")]
pub use pdftext::extract_text;
