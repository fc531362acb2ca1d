//! Certificates extraction: one certificate per non-empty line, bullet
//! glyphs stripped. No further structure is attempted — certificate lines
//! are short free-text labels.

use tracing::debug;

use crate::extract::strip_bullet;

/// Extract ordered certificate lines from the certificates block.
///
/// Empty result → the caller substitutes its default list wholesale.
pub fn extract(block: &str) -> Vec<String> {
    let certificates: Vec<String> = block
        .lines()
        .map(strip_bullet)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();

    debug!(entries = certificates.len(), "certificates block extracted");
    certificates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_stripped_and_blanks_dropped() {
        let certs = extract("• AWS Solutions Architect\n\n  Linux Foundation: LFCS  \n");
        assert_eq!(certs, vec!["AWS Solutions Architect", "Linux Foundation: LFCS"]);
    }

    #[test]
    fn empty_block_yields_no_certificates() {
        assert!(extract("").is_empty());
        assert!(extract(" \n \n").is_empty());
    }
}
