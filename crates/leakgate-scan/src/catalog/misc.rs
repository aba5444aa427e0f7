//! Miscellaneous rules: coordinates and SQL fragments

use super::{Category, RuleSpec};
use crate::risk::Severity;

pub(super) const RULES: &[RuleSpec] = &[
    RuleSpec {
        id: "coordinates",
        pattern: r"\b\d+\.\d+°\s*[NS],\s*\d+\.\d+°\s*[EW]\b",
        case_insensitive: false,
        dot_matches_new_line: false,
        category: Category::ProprietaryMarker,
        severity: Severity::Medium,
        explanation: "Geographical coordinates may reveal sensitive location information.",
    },
    RuleSpec {
        id: "sql_query",
        pattern: r"SELECT.+FROM.+WHERE|INSERT INTO.+VALUES|UPDATE.+SET.+WHERE|DELETE FROM.+WHERE",
        case_insensitive: true,
        dot_matches_new_line: false,
        category: Category::SqlStatement,
        severity: Severity::Medium,
        explanation: "SQL queries may contain database schema information or expose internal data structures.",
    },
    RuleSpec {
        id: "sql_injection",
        pattern: r"(?:%27|')(?:%6F|o|%4F)(?:%72|r|%52)",
        case_insensitive: true,
        dot_matches_new_line: false,
        category: Category::SqlStatement,
        severity: Severity::High,
        explanation: "This SQL pattern may indicate an SQL injection vulnerability.",
    },
];
