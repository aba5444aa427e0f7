//! Protected health information rules

use super::{Category, RuleSpec};
use crate::risk::Severity;

pub(super) const RULES: &[RuleSpec] = &[
    RuleSpec {
        id: "patient_id",
        pattern: r"\b(?:Patient\s*ID|MRN)[-:]?\s*\d+\b",
        case_insensitive: true,
        dot_matches_new_line: false,
        category: Category::ProprietaryMarker,
        severity: Severity::High,
        explanation: "Patient IDs are protected health information covered by privacy regulations.",
    },
    RuleSpec {
        id: "patient_info",
        pattern: r"\b(?:patient\s*info|patient\s*information|medical\s*record)\b",
        case_insensitive: true,
        dot_matches_new_line: false,
        category: Category::ProprietaryMarker,
        severity: Severity::High,
        explanation: "Patient information is protected health data that should not be shared with external services.",
    },
    RuleSpec {
        id: "diagnosis",
        pattern: r"\bDiagnosis:\s*[A-Za-z\s]+(?:\s+(?:Type|Stage|Grade)\s+[IVX\d]+)?\b",
        case_insensitive: true,
        dot_matches_new_line: false,
        category: Category::ProprietaryMarker,
        severity: Severity::High,
        explanation: "Medical diagnoses are protected health information that should not be shared.",
    },
    RuleSpec {
        id: "insurance_id",
        pattern: r"\b(?:[A-Za-z]+\s*#\s*\d+)\b",
        case_insensitive: false,
        dot_matches_new_line: false,
        category: Category::GenericCredential,
        severity: Severity::High,
        explanation: "Insurance ID numbers are sensitive personal information that should not be shared.",
    },
    RuleSpec {
        id: "prescription",
        pattern: r"\b[A-Za-z]+\s+\d+(?:mg|ML|g)\b",
        case_insensitive: true,
        dot_matches_new_line: false,
        category: Category::ProprietaryMarker,
        severity: Severity::High,
        explanation: "Prescription information is protected health data that should not be shared.",
    },
];
