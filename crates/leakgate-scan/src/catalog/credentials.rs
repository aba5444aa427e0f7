//! Credential and key-material rules

use super::{Category, RuleSpec};
use crate::risk::Severity;

pub(super) const RULES: &[RuleSpec] = &[
    RuleSpec {
        id: "api_key",
        pattern: r#"(?:api[_-]?key|access[_-]?token|secret|token|key)[=:]\s*["']?([a-zA-Z0-9]{16,})["']?"#,
        case_insensitive: true,
        dot_matches_new_line: false,
        category: Category::SecretCredential,
        severity: Severity::High,
        explanation: "API keys should never be shared with external services as they can grant access to your systems and data.",
    },
    RuleSpec {
        id: "named_api_key",
        pattern: r#"\b\w+(?:[_-]?(?:api|key|token|secret))\s*[=:]\s*["']?[a-zA-Z0-9_.-]{8,}["']?"#,
        case_insensitive: true,
        dot_matches_new_line: false,
        category: Category::SecretCredential,
        severity: Severity::High,
        explanation: "Named API keys should never be shared as they can grant access to specific services and data.",
    },
    RuleSpec {
        id: "private_key",
        pattern: r"-----BEGIN\s+(?:RSA\s+)?PRIVATE\s+KEY-----[^-]*-----END\s+(?:RSA\s+)?PRIVATE\s+KEY-----",
        case_insensitive: false,
        dot_matches_new_line: true,
        category: Category::SecretCredential,
        severity: Severity::High,
        explanation: "Private keys should never be shared and must be kept secure.",
    },
    RuleSpec {
        id: "secret_key",
        pattern: r#"(?:secret[_-]?key|private[_-]?key)[=:]\s*["']?([A-Za-z0-9_=+/-]{16,})["']?"#,
        case_insensitive: true,
        dot_matches_new_line: false,
        category: Category::SecretCredential,
        severity: Severity::High,
        explanation: "Secret keys provide access to sensitive systems and should be kept strictly private.",
    },
    RuleSpec {
        id: "password",
        pattern: r#"\b(?:password|passwd|pwd)[=:]\s*["']?[A-Za-z\d!@#$%^&*()_+\-]{8,}["']?"#,
        case_insensitive: true,
        dot_matches_new_line: false,
        category: Category::GenericCredential,
        severity: Severity::High,
        explanation: "Passwords and credentials should never be shared with external services.",
    },
    RuleSpec {
        id: "credential",
        pattern: r#"(?:password|passwd|pwd|secret|ssn)[=:]\s*["']?([a-zA-Z0-9!@#$%^&*()_+\-]{4,})["']?"#,
        case_insensitive: true,
        dot_matches_new_line: false,
        category: Category::GenericCredential,
        severity: Severity::High,
        explanation: "Passwords and credentials should never be shared with external services.",
    },
];
