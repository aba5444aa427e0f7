//! Redaction of matched spans
//!
//! Rewrites the original text, replacing each finding's span with a
//! fixed per-category placeholder token. Findings must originate from a
//! scan of the exact same text; offsets computed against a different
//! text produce garbled (but never panicking) output.

use crate::catalog::Category;
use crate::scanner::Finding;
use tracing::debug;

/// Fixed redaction token for a category.
pub fn placeholder(category: Category) -> &'static str {
    match category {
        Category::SecretCredential => "[API_KEY_REDACTED]",
        Category::SqlStatement => "[SQL_QUERY_REDACTED]",
        Category::GenericCredential => "[CREDENTIALS_REDACTED]",
        Category::InternalNetworkReference => "[DOMAIN_REDACTED]",
        Category::ProprietaryMarker => "[PROPRIETARY_INFO_REDACTED]",
    }
}

/// Replace every finding's span in `text` with its category placeholder.
///
/// Replacements are applied in descending start-offset order so that
/// splicing never shifts the offsets of findings that are still waiting
/// to be applied. Overlapping spans are not special-cased: each
/// replacement operates on whatever currently occupies that offset
/// range, which can leave nested placeholder remnants. Out-of-range
/// offsets are clamped to the current string bounds instead of
/// panicking. Deterministic and idempotent; neither input is mutated.
pub fn sanitize(text: &str, findings: &[Finding]) -> String {
    if findings.is_empty() {
        return text.to_string();
    }

    let mut ordered: Vec<&Finding> = findings.iter().collect();
    ordered.sort_by(|a, b| b.start_index.cmp(&a.start_index));

    let mut result = text.to_string();
    for finding in ordered {
        let start = floor_char_boundary(&result, finding.start_index.min(result.len()));
        let end = floor_char_boundary(&result, finding.end_index.min(result.len())).max(start);
        if end < finding.end_index {
            debug!(
                id = %finding.id,
                end = finding.end_index,
                clamped = end,
                "finding span clamped to current text bounds"
            );
        }
        result.replace_range(start..end, placeholder(finding.category));
    }

    result
}

// Overlapping replacements can land an offset inside a multi-byte
// character of the working copy; back up to the nearest boundary.
fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

#[cfg(test)]
mod tests;
