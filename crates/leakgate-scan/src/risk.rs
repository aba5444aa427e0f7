//! Severity and overall risk aggregation

use crate::scanner::Finding;
use serde::{Deserialize, Serialize};

/// Per-rule severity, ordered so that `High > Medium > Low`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Overall risk level for one scanned text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Safe,
    Warning,
    Danger,
}

/// Reduce a findings list to a single overall risk level.
///
/// Folds to the strictest severity present. Low-severity findings still
/// warrant some caution, so they surface as [`RiskLevel::Warning`] and
/// never resolve back to [`RiskLevel::Safe`].
pub fn aggregate(findings: &[Finding]) -> RiskLevel {
    let Some(worst) = findings.iter().map(|f| f.severity).max() else {
        return RiskLevel::Safe;
    };

    match worst {
        Severity::High => RiskLevel::Danger,
        Severity::Medium | Severity::Low => RiskLevel::Warning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn finding(severity: Severity) -> Finding {
        Finding {
            id: "generic_credential-0-0".to_string(),
            category: Category::GenericCredential,
            content: "x".to_string(),
            start_index: 0,
            end_index: 1,
            severity,
            explanation: String::new(),
        }
    }

    #[test]
    fn empty_findings_are_safe() {
        assert_eq!(aggregate(&[]), RiskLevel::Safe);
    }

    #[test]
    fn any_high_is_danger() {
        let findings = vec![
            finding(Severity::Low),
            finding(Severity::High),
            finding(Severity::Medium),
        ];
        assert_eq!(aggregate(&findings), RiskLevel::Danger);
    }

    #[test]
    fn medium_without_high_is_warning() {
        let findings = vec![finding(Severity::Low), finding(Severity::Medium)];
        assert_eq!(aggregate(&findings), RiskLevel::Warning);
    }

    #[test]
    fn only_low_still_warns() {
        let findings = vec![finding(Severity::Low)];
        assert_eq!(aggregate(&findings), RiskLevel::Warning);
    }

    #[test]
    fn order_independent() {
        let a = vec![finding(Severity::High), finding(Severity::Low)];
        let b = vec![finding(Severity::Low), finding(Severity::High)];
        assert_eq!(aggregate(&a), aggregate(&b));
    }

    #[test]
    fn severity_total_order() {
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
    }
}
