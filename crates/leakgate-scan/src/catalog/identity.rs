//! Personal identifier rules: government ids, licenses, birth dates

use super::{Category, RuleSpec};
use crate::risk::Severity;

pub(super) const RULES: &[RuleSpec] = &[
    RuleSpec {
        id: "ssn",
        pattern: r"\b(?:\d{3}-\d{2}-\d{4}|\d{3}[.-]?\d{2}[.-]?\d{4})\b",
        case_insensitive: false,
        dot_matches_new_line: false,
        category: Category::GenericCredential,
        severity: Severity::High,
        explanation: "Social Security Numbers (SSN) are highly sensitive personal identifiers that should never be shared.",
    },
    RuleSpec {
        id: "labeled_ssn",
        pattern: r"\b(?:ssn|social\s*security(?:\s*number)?)\s*:?\s*\d{3}-?\d{2}-?\d{4}\b",
        case_insensitive: true,
        dot_matches_new_line: false,
        category: Category::GenericCredential,
        severity: Severity::High,
        explanation: "Labeled Social Security Numbers are highly sensitive personal identifiers that should never be shared.",
    },
    RuleSpec {
        id: "drivers_license",
        pattern: r"\b(?:[A-Z]\d{7}|[A-Z]\d{3}-\d{3}-\d{4})\b",
        case_insensitive: false,
        dot_matches_new_line: false,
        category: Category::GenericCredential,
        severity: Severity::High,
        explanation: "Driver's license numbers are sensitive personal identifiers that should not be shared.",
    },
    RuleSpec {
        id: "license_no",
        pattern: r"\b(?:License\s+No\.?|DL\s+Number):\s*[A-Z]\d{3}-\d{3}-\d{4}\b",
        case_insensitive: true,
        dot_matches_new_line: false,
        category: Category::GenericCredential,
        severity: Severity::High,
        explanation: "Driver's license numbers are sensitive personal identifiers that should not be shared.",
    },
    RuleSpec {
        id: "passport",
        pattern: r"\b[A-Z]\d{8}\b",
        case_insensitive: false,
        dot_matches_new_line: false,
        category: Category::GenericCredential,
        severity: Severity::High,
        explanation: "Passport numbers are highly sensitive personal identifiers that should not be shared.",
    },
    RuleSpec {
        id: "dob",
        pattern: r"\b(?:0?[1-9]|1[0-2])[/.-](0?[1-9]|[12]\d|3[01])[/.-](?:19|20)\d{2}\b",
        case_insensitive: false,
        dot_matches_new_line: false,
        category: Category::GenericCredential,
        severity: Severity::High,
        explanation: "Dates of birth are sensitive personal information that could be used for identity theft.",
    },
    RuleSpec {
        id: "labeled_dob",
        pattern: r"\b(?:dob|date\s*of\s*birth|birth\s*date)\s*:?\s*(?:0?[1-9]|1[0-2])[/.-](?:0?[1-9]|[12]\d|3[01])[/.-](?:19|20)\d{2}\b",
        case_insensitive: true,
        dot_matches_new_line: false,
        category: Category::GenericCredential,
        severity: Severity::High,
        explanation: "Labeled dates of birth are sensitive personal information that could be used for identity theft.",
    },
    RuleSpec {
        id: "tin",
        pattern: r"\b\d{2}[-–]\d{7}\b",
        case_insensitive: false,
        dot_matches_new_line: false,
        category: Category::GenericCredential,
        severity: Severity::High,
        explanation: "Tax Identification Numbers are sensitive financial identifiers that should not be shared.",
    },
];
