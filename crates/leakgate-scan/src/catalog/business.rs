//! Business information rules: client lists, project codes, internal domains

use super::{Category, RuleSpec};
use crate::risk::Severity;

pub(super) const RULES: &[RuleSpec] = &[
    RuleSpec {
        id: "client_list",
        pattern: r"\bClient(?:\s+List)?:\s*(?:[A-Za-z]+(?:,\s*)?)+",
        case_insensitive: true,
        dot_matches_new_line: false,
        category: Category::ProprietaryMarker,
        severity: Severity::Medium,
        explanation: "Client lists are confidential business information.",
    },
    RuleSpec {
        id: "project_code",
        pattern: r"\bProject\s+Code:\s*[A-Za-z0-9-]+\s*(?:-\s*(?:Top\s+Secret|Confidential))?\b",
        case_insensitive: true,
        dot_matches_new_line: false,
        category: Category::ProprietaryMarker,
        severity: Severity::High,
        explanation: "Internal project codes and classifications should remain confidential.",
    },
    RuleSpec {
        id: "nda_content",
        pattern: r"\b(?:NDA|Non-Disclosure)\s+(?:Agreement|Clause):[^.]+\b",
        case_insensitive: true,
        dot_matches_new_line: false,
        category: Category::ProprietaryMarker,
        severity: Severity::High,
        explanation: "NDA content is confidential and should not be shared.",
    },
    RuleSpec {
        id: "internal_domain",
        pattern: r"(?:internal|corp|intranet|private)\.[\w-]+\.[a-z]{2,}",
        case_insensitive: true,
        dot_matches_new_line: false,
        category: Category::InternalNetworkReference,
        severity: Severity::Medium,
        explanation: "Internal domain names can reveal details about your organization's infrastructure.",
    },
    RuleSpec {
        id: "proprietary_marker",
        pattern: r"(?:confidential|proprietary|internal[_-]?use[_-]?only|do[_-]?not[_-]?share)",
        case_insensitive: true,
        dot_matches_new_line: false,
        category: Category::ProprietaryMarker,
        severity: Severity::Medium,
        explanation: "This appears to be marked as proprietary or confidential information.",
    },
];
