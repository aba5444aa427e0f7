//! One-shot scan, aggregate, and sanitize composition

use crate::catalog::Catalog;
use crate::risk::{RiskLevel, aggregate};
use crate::sanitizer::sanitize;
use crate::scanner::{Finding, Scanner};
use serde::{Deserialize, Serialize};

/// Everything a caller needs to present one scanned text: the findings,
/// the overall risk level, and the redacted rendition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    /// The original text, as scanned
    pub text: String,

    /// All findings, in catalog order
    pub findings: Vec<Finding>,

    /// Overall risk level aggregated over the findings
    pub risk: RiskLevel,

    /// Redacted rendition of the text
    pub sanitized: String,
}

impl ScanReport {
    /// Scan `text` with the built-in catalog and package the results.
    pub fn generate(text: &str) -> Self {
        Self::with_scanner(&Scanner::new(Catalog::shared()), text)
    }

    /// Scan `text` with a caller-supplied scanner and package the results.
    pub fn with_scanner(scanner: &Scanner<'_>, text: &str) -> Self {
        let findings = scanner.scan(text);
        let risk = aggregate(&findings);
        let sanitized = sanitize(text, &findings);
        Self {
            text: text.to_string(),
            findings,
            risk,
            sanitized,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_reports_safe_and_unchanged() {
        let report = ScanReport::generate("hello world");
        assert!(report.findings.is_empty());
        assert_eq!(report.risk, RiskLevel::Safe);
        assert_eq!(report.sanitized, "hello world");
    }

    #[test]
    fn ssn_reports_danger_and_redacts() {
        let report = ScanReport::generate("My SSN is 123-45-6789");
        assert_eq!(report.risk, RiskLevel::Danger);
        assert_eq!(report.sanitized, "My SSN is [CREDENTIALS_REDACTED]");
        assert_eq!(report.text, "My SSN is 123-45-6789");
    }

    #[test]
    fn report_serializes_with_camel_case_keys() {
        let report = ScanReport::generate("My SSN is 123-45-6789");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["risk"], "danger");
        assert!(json["findings"][0]["startIndex"].is_u64());
    }
}
