//! Alternative-phrasing guidance
//!
//! Static lookup from finding category to suggestions for presenting the
//! same information safely. Pure data; no state, no failure modes.

use crate::catalog::Category;
use crate::scanner::Finding;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Fallback guidance for categories without a tailored entry.
pub static GENERIC_GUIDANCE: [&str; 2] = [
    "Remove this sensitive information entirely",
    "Replace with a generic placeholder",
];

static SECRET_CREDENTIAL: [&str; 3] = [
    "Use a placeholder or variable name like 'YOUR_API_KEY'",
    "Describe the API functionality without including the actual key",
    "Use environment variables to store keys when discussing code",
];

static SQL_STATEMENT: [&str; 3] = [
    "Replace table names with generic placeholders like 'table1', 'table2'",
    "Use pseudocode to explain the query logic instead",
    "Remove WHERE clauses that may contain business logic or data filtering criteria",
];

static GENERIC_CREDENTIAL: [&str; 3] = [
    "Use placeholders like 'YOUR_PASSWORD' instead of actual credentials",
    "Describe authentication process without including actual credentials",
    "Use masked values like '********' when discussing password formats",
];

static INTERNAL_NETWORK_REFERENCE: [&str; 3] = [
    "Replace with example.com or use [COMPANY_DOMAIN] as a placeholder",
    "Use generic terms like 'internal network' or 'company intranet'",
    "Remove references to specific subdomains or network segments",
];

static PROPRIETARY_MARKER: [&str; 3] = [
    "Generalize the information without specific details",
    "Focus on the problem rather than proprietary solutions",
    "Describe functionality abstractly without revealing implementation details",
];

static GUIDANCE: Lazy<HashMap<Category, &'static [&'static str]>> = Lazy::new(|| {
    HashMap::from([
        (Category::SecretCredential, SECRET_CREDENTIAL.as_slice()),
        (Category::SqlStatement, SQL_STATEMENT.as_slice()),
        (Category::GenericCredential, GENERIC_CREDENTIAL.as_slice()),
        (
            Category::InternalNetworkReference,
            INTERNAL_NETWORK_REFERENCE.as_slice(),
        ),
        (Category::ProprietaryMarker, PROPRIETARY_MARKER.as_slice()),
    ])
});

/// Guidance strings for presenting one finding's content safely.
pub fn advise(finding: &Finding) -> &'static [&'static str] {
    GUIDANCE
        .get(&finding.category)
        .copied()
        .unwrap_or(GENERIC_GUIDANCE.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::Severity;

    fn finding(category: Category) -> Finding {
        Finding {
            id: format!("{}-0-0", category.as_str()),
            category,
            content: "x".to_string(),
            start_index: 0,
            end_index: 1,
            severity: Severity::High,
            explanation: String::new(),
        }
    }

    #[test]
    fn every_category_has_tailored_guidance() {
        let categories = [
            Category::SecretCredential,
            Category::SqlStatement,
            Category::GenericCredential,
            Category::InternalNetworkReference,
            Category::ProprietaryMarker,
        ];

        for category in categories {
            let guidance = advise(&finding(category));
            assert_eq!(guidance.len(), 3, "{} should have 3 entries", category.as_str());
        }
    }

    #[test]
    fn secret_credential_suggests_placeholder_name() {
        let guidance = advise(&finding(Category::SecretCredential));
        assert!(guidance[0].contains("YOUR_API_KEY"));
    }

    #[test]
    fn fallback_is_two_generic_items() {
        assert_eq!(GENERIC_GUIDANCE.len(), 2);
        assert!(GENERIC_GUIDANCE[0].starts_with("Remove"));
    }

    #[test]
    fn advise_is_stable_across_calls() {
        let f = finding(Category::SqlStatement);
        assert_eq!(advise(&f), advise(&f));
    }
}
