//! LeakGate Sensitive-Content Scanning and Redaction
//!
//! This crate scans free-form text for sensitive content before it is
//! shared with an external tool:
//! - Rule catalog for credentials, personal identifiers, proprietary
//!   markers, and SQL fragments
//! - Multi-pattern scanning with byte-accurate match positions
//! - Risk aggregation to a single overall level
//! - Placeholder redaction of matched spans
//! - Alternative-phrasing guidance per finding

pub mod advisor;
pub mod catalog;
pub mod report;
pub mod risk;
pub mod sanitizer;
pub mod scanner;

pub use advisor::{GENERIC_GUIDANCE, advise};
pub use catalog::{Catalog, CatalogError, Category, Rule, RuleSpec};
pub use report::ScanReport;
pub use risk::{RiskLevel, Severity, aggregate};
pub use sanitizer::{placeholder, sanitize};
pub use scanner::{Finding, Scanner};

/// Scan `text` against the built-in catalog.
pub fn scan(text: &str) -> Vec<Finding> {
    Scanner::new(Catalog::shared()).scan(text)
}
