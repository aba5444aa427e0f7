//! Contact information rules: phone, email, postal address

use super::{Category, RuleSpec};
use crate::risk::Severity;

pub(super) const RULES: &[RuleSpec] = &[
    RuleSpec {
        id: "phone",
        pattern: r"\b\(\d{3}\)\s*\d{3}[-.]?\d{4}\b",
        case_insensitive: false,
        dot_matches_new_line: false,
        category: Category::GenericCredential,
        severity: Severity::Medium,
        explanation: "Phone numbers are personal contact information that should be handled carefully.",
    },
    RuleSpec {
        id: "email",
        pattern: r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b",
        case_insensitive: false,
        dot_matches_new_line: false,
        category: Category::GenericCredential,
        severity: Severity::Medium,
        explanation: "Email addresses are personal contact information that should be handled carefully.",
    },
    RuleSpec {
        id: "address",
        pattern: r"\b\d+\s+[A-Za-z\s]+(?:Street|St|Avenue|Ave|Road|Rd|Boulevard|Blvd|Lane|Ln|Drive|Dr|Way|Court|Ct|Circle|Cir|Trail|Trl),?\s+[A-Za-z\s]+,?\s+[A-Z]{2}\b",
        case_insensitive: true,
        dot_matches_new_line: false,
        category: Category::GenericCredential,
        severity: Severity::High,
        explanation: "Physical addresses are sensitive personal information that should not be shared.",
    },
];
