//! CLI binary for resume-sift.
//!
//! A thin shim over the library crate: load the caller's default record,
//! obtain the document text (PDF extraction or a plain-text file), parse,
//! print the record as JSON. When text extraction fails the default record
//! is printed unmodified — the parsing core is never invoked for a document
//! that could not be read.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use resume_sift::{extract_text, parse_resume, ParsedResume, SiftError};

/// Segment a résumé document into a structured JSON record.
#[derive(Debug, Parser)]
#[command(name = "resume-sift", version, about)]
struct Cli {
    /// Input document: a PDF, or a plain-text file with --text.
    input: PathBuf,

    /// Complete default record (JSON) answering everything extraction misses.
    #[arg(long, env = "RESUME_SIFT_DEFAULTS")]
    defaults: PathBuf,

    /// Treat the input as already-linearized plain text instead of a PDF.
    #[arg(long)]
    text: bool,

    /// Pretty-print the output record.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let defaults = load_defaults(&cli.defaults)?;

    let record = match load_text(&cli) {
        Ok(text) => parse_resume(&text, &defaults),
        Err(e) => {
            // Extraction failure is not fatal: report it and fall back to
            // the default record unmodified.
            eprintln!("warning: {e:#}; emitting the default record");
            defaults
        }
    };

    let json = if cli.pretty {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string(&record)?
    };
    println!("{json}");
    Ok(())
}

/// Load and validate the caller's default record. A broken defaults file is
/// fatal: there is nothing to fall back to without it.
fn load_defaults(path: &Path) -> Result<ParsedResume, SiftError> {
    let json = std::fs::read_to_string(path).map_err(|source| SiftError::DefaultsReadFailed {
        path: path.to_path_buf(),
        source,
    })?;
    ParsedResume::from_json(&json).map_err(|e| SiftError::InvalidDefaults {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })
}

/// Obtain the linearized document text.
fn load_text(cli: &Cli) -> Result<String> {
    if cli.text {
        std::fs::read_to_string(&cli.input)
            .with_context(|| format!("reading text file '{}'", cli.input.display()))
    } else {
        extract_text(&cli.input)
            .with_context(|| format!("extracting text from '{}'", cli.input.display()))
    }
}
