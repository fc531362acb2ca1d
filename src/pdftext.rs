//! PDF text extraction adapter (feature `pdf`).
//!
//! The upstream step the parsing core consumes from: a binary document in,
//! one linearized text string out, no positional metadata. The core never calls into this module — callers run extraction
//! first and hand the text to [`crate::parse_resume`], substituting the
//! default record wholesale when extraction fails.
//!
//! The PDF magic bytes are validated before handing the file to the PDF
//! library so callers get a meaningful error rather than a parser crash on a
//! mislabeled `.docx`.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::SiftError;

/// Extract the full linearized text of a PDF document.
///
/// # Errors
/// Only file-boundary failures: missing file, unreadable file, not a PDF,
/// or a document the PDF library cannot linearize.
pub fn extract_text(path: impl AsRef<Path>) -> Result<String, SiftError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SiftError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    // Validate magic bytes before the PDF library touches the file.
    match std::fs::File::open(path) {
        Ok(mut f) => {
            let mut magic = [0u8; 4];
            if f.read_exact(&mut magic).is_ok() && &magic != b"%PDF" {
                return Err(SiftError::NotAPdf {
                    path: path.to_path_buf(),
                    magic,
                });
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(SiftError::PermissionDenied {
                path: path.to_path_buf(),
            });
        }
        Err(_) => {
            return Err(SiftError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
    }

    let text = pdf_extract::extract_text(path).map_err(|e| SiftError::ExtractFailed {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;

    debug!(path = %path.display(), bytes = text.len(), "PDF text extracted");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_reported_not_panicked() {
        let err = extract_text("does/not/exist.pdf").unwrap_err();
        assert!(matches!(err, SiftError::FileNotFound { .. }));
    }
}
