//! Financial information rules: cards and bank accounts

use super::{Category, RuleSpec};
use crate::risk::Severity;

pub(super) const RULES: &[RuleSpec] = &[
    RuleSpec {
        id: "credit_card",
        pattern: r"\b(?:\d{4}[- ]?){4}\b",
        case_insensitive: false,
        dot_matches_new_line: false,
        category: Category::GenericCredential,
        severity: Severity::High,
        explanation: "Credit card numbers should never be shared in plain text.",
    },
    RuleSpec {
        id: "bank_account",
        pattern: r"\b(?:Account|Routing)\s*(?:Number|#)?\s*:?\s*\d{8,17}\b",
        case_insensitive: true,
        dot_matches_new_line: false,
        category: Category::GenericCredential,
        severity: Severity::High,
        explanation: "Bank account information should never be shared in plain text.",
    },
];
