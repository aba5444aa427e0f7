//! Multi-pattern scan engine

use crate::catalog::{Catalog, Category};
use crate::risk::Severity;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One detected occurrence of a catalog rule within a text
///
/// Offsets are byte positions into the original text; `end_index` is
/// exclusive. Findings are created only by the scanner and are immutable
/// afterwards; the caller owns the resulting list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    /// Unique within one scan: `{category}-{sequence}-{scan epoch ms}`
    pub id: String,

    /// Semantic class inherited from the matching rule
    pub category: Category,

    /// Verbatim matched substring
    pub content: String,

    /// Byte offset of the match start
    pub start_index: usize,

    /// Exclusive byte offset of the match end
    pub end_index: usize,

    /// Severity inherited from the matching rule
    #[serde(rename = "riskLevel")]
    pub severity: Severity,

    /// Explanation inherited from the matching rule
    pub explanation: String,
}

/// Applies every catalog rule to input text and collects findings
///
/// Holds only a shared reference to an immutable catalog; each `scan`
/// call owns its match cursors, so a `Scanner` can be used from multiple
/// threads without any locking.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'a> {
    catalog: &'a Catalog,
}

impl<'a> Scanner<'a> {
    /// Create a scanner over the given catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// The catalog this scanner applies.
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Scan `text`, returning one finding per rule match.
    ///
    /// Rules are applied in catalog order. Matches of different rules may
    /// overlap; detection is exhaustive, not exclusive, and overlap
    /// resolution is left to the sanitizer. Empty text yields an empty
    /// list; this operation has no failure modes.
    pub fn scan(&self, text: &str) -> Vec<Finding> {
        let scan_epoch = Utc::now().timestamp_millis();
        let mut findings = Vec::new();

        for rule in self.catalog.rules() {
            // find_iter never yields overlapping matches for one rule and
            // always advances, so matching terminates on any input.
            for m in rule.matcher().find_iter(text) {
                findings.push(Finding {
                    id: format!(
                        "{}-{}-{}",
                        rule.category.as_str(),
                        findings.len(),
                        scan_epoch
                    ),
                    category: rule.category,
                    content: m.as_str().to_string(),
                    start_index: m.start(),
                    end_index: m.end(),
                    severity: rule.severity,
                    explanation: rule.explanation.to_string(),
                });
            }
        }

        debug!(bytes = text.len(), findings = findings.len(), "scan complete");
        findings
    }
}

#[cfg(test)]
mod tests;
