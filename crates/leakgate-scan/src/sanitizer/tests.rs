use super::*;
use crate::risk::Severity;
use crate::scan;

fn finding(category: Category, start: usize, end: usize, content: &str) -> Finding {
    Finding {
        id: format!("{}-{}-0", category.as_str(), start),
        category,
        content: content.to_string(),
        start_index: start,
        end_index: end,
        severity: Severity::High,
        explanation: String::new(),
    }
}

#[test]
fn no_findings_is_identity() {
    assert_eq!(sanitize("hello world", &[]), "hello world");
    assert_eq!(sanitize("", &[]), "");
}

#[test]
fn ssn_is_redacted_with_category_token() {
    let text = "My SSN is 123-45-6789";
    let findings = scan(text);
    assert_eq!(sanitize(text, &findings), "My SSN is [CREDENTIALS_REDACTED]");
}

#[test]
fn every_category_has_a_token() {
    assert_eq!(placeholder(Category::SecretCredential), "[API_KEY_REDACTED]");
    assert_eq!(placeholder(Category::SqlStatement), "[SQL_QUERY_REDACTED]");
    assert_eq!(placeholder(Category::GenericCredential), "[CREDENTIALS_REDACTED]");
    assert_eq!(placeholder(Category::InternalNetworkReference), "[DOMAIN_REDACTED]");
    assert_eq!(
        placeholder(Category::ProprietaryMarker),
        "[PROPRIETARY_INFO_REDACTED]"
    );
}

#[test]
fn non_overlapping_findings_replace_each_exactly_once() {
    let text = "key 0123456789 and host corp.example.com end";
    let findings = vec![
        finding(Category::SecretCredential, 4, 14, "0123456789"),
        finding(Category::InternalNetworkReference, 24, 40, "corp.example.com"),
    ];

    let sanitized = sanitize(text, &findings);
    assert_eq!(sanitized, "key [API_KEY_REDACTED] and host [DOMAIN_REDACTED] end");

    // Length arithmetic: original minus matched plus placeholder lengths.
    let matched: usize = findings.iter().map(|f| f.end_index - f.start_index).sum();
    let placeholders: usize = findings
        .iter()
        .map(|f| placeholder(f.category).len())
        .sum();
    assert_eq!(sanitized.len(), text.len() - matched + placeholders);
}

#[test]
fn replacement_order_does_not_shift_earlier_offsets() {
    // Findings supplied in ascending order; the sanitizer must apply
    // them descending so the low-offset span is still accurate.
    let text = "a@b.com ... 123-45-6789";
    let findings = scan(text);
    assert_eq!(findings.len(), 2);

    assert_eq!(
        sanitize(text, &findings),
        "[CREDENTIALS_REDACTED] ... [CREDENTIALS_REDACTED]"
    );
}

#[test]
fn identical_span_findings_nest_placeholders() {
    // Two rules over the same digits: both replacements are applied at
    // the same position, leaving a remnant of the first placeholder.
    // Documented behavior, not corrected.
    let text = "My SSN is 123-45-6789";
    let findings = vec![
        finding(Category::GenericCredential, 10, 21, "123-45-6789"),
        finding(Category::SecretCredential, 10, 21, "123-45-6789"),
    ];

    let sanitized = sanitize(text, &findings);
    assert!(sanitized.starts_with("My SSN is [API_KEY_REDACTED]"));
    assert!(sanitized.contains("S_REDACTED]"));
}

#[test]
fn out_of_range_offsets_are_clamped_not_panicking() {
    let text = "short";
    let findings = vec![finding(Category::SqlStatement, 2, 9999, "hort plus")];

    assert_eq!(sanitize(text, &findings), "sh[SQL_QUERY_REDACTED]");
}

#[test]
fn multibyte_text_keeps_byte_offsets_coherent() {
    let text = "Base at 40.7128° N, 74.0060° W today";
    let findings = scan(text);
    assert_eq!(findings.len(), 1);

    assert_eq!(
        sanitize(text, &findings),
        "Base at [PROPRIETARY_INFO_REDACTED] today"
    );
}

#[test]
fn sanitize_is_deterministic_and_does_not_mutate_inputs() {
    let text = "password: supersecret1";
    let findings = scan(text);
    let snapshot = findings.clone();

    let first = sanitize(text, &findings);
    let second = sanitize(text, &findings);

    assert_eq!(first, second);
    assert_eq!(findings, snapshot);
}

#[test]
fn sql_query_is_redacted() {
    let text = "run SELECT name FROM users WHERE id = 1 now";
    let findings = scan(text);
    let sanitized = sanitize(text, &findings);

    assert!(sanitized.contains("[SQL_QUERY_REDACTED]"));
    assert!(!sanitized.contains("FROM users"));
}
