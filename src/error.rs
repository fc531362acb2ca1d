//! Error types for the resume-sift library.
//!
//! The parsing core has no error type at all: every extraction step is total
//! over its input, and "no match" is a valid outcome that triggers a
//! fallback, never an error. [`SiftError`] exists only for the file
//! boundary — reading a document from disk, extracting its text, loading the
//! caller's defaults file. No function in the core returns it.
//!
//! This keeps the caller's decision simple: a boundary error means "use the
//! default record unmodified"; a successful extraction always parses.

use std::path::PathBuf;
use thiserror::Error;

/// Errors at the file boundary (the `pdf` feature and the CLI).
#[derive(Debug, Error)]
pub enum SiftError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("resume file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: PathBuf },

    /// The file exists and was read, but is not a PDF.
    #[error("file is not a valid PDF: '{path}'\nFirst bytes: {magic:?}")]
    NotAPdf { path: PathBuf, magic: [u8; 4] },

    /// The PDF library could not linearize the document's text.
    #[error("text extraction failed for '{path}': {detail}")]
    ExtractFailed { path: PathBuf, detail: String },

    // ── Defaults errors ───────────────────────────────────────────────────
    /// Could not read the caller's defaults file.
    #[error("failed to read default record '{path}': {source}")]
    DefaultsReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The defaults file was read but is not a valid record.
    #[error("default record '{path}' is not a valid resume record: {detail}")]
    InvalidDefaults { path: PathBuf, detail: String },
}
