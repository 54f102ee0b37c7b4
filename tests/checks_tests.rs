use sql_doc_validator::{
    checks::{CheckRunner, Severity},
    config::ChecksConfig,
    document::parse_document,
    snippet::SqlDialect
};

fn validate(text: &str) -> Vec<String> {
    let doc = parse_document(text).unwrap();
    let runner = CheckRunner::new(SqlDialect::Generic, true);
    let report = runner.validate(&doc);
    report
        .findings
        .iter()
        .map(|f| f.check_id.to_string())
        .collect()
}

#[test]
fn test_clean_document_has_no_findings() {
    let text = "\
- [Tip one](#tip-one)

## Tip one

```sql
SELECT id FROM users;
```
";
    assert!(validate(text).is_empty());
}

#[test]
fn test_duplicate_anchor_reported_once_per_slug() {
    let text = "\
## Use a leading comma

first

## use  a   leading comma

second
";
    let findings = validate(text);
    assert_eq!(
        findings
            .iter()
            .filter(|id| id.as_str() == "ANCHOR001")
            .count(),
        1
    );
}

#[test]
fn test_duplicate_anchor_carries_slug_and_line() {
    let text = "## Use a leading comma\n\n## use a leading comma\n";
    let doc = parse_document(text).unwrap();
    let runner = CheckRunner::new(SqlDialect::Generic, true);
    let report = runner.validate(&doc);

    let finding = report
        .findings
        .iter()
        .find(|f| f.check_id == "ANCHOR001")
        .unwrap();
    assert_eq!(finding.anchor.as_deref(), Some("use-a-leading-comma"));
    assert_eq!(finding.line, Some(3));
    assert_eq!(finding.severity, Severity::Error);
}

#[test]
fn test_broken_anchor_reported() {
    let text = "\
- [Missing](#non-existent-tip)

## Real tip

body
";
    let findings = validate(text);
    assert!(findings.contains(&"ANCHOR002".to_string()));
}

#[test]
fn test_broken_anchor_does_not_halt_later_entries() {
    let text = "\
- [First missing](#nope-one)
- [Real](#real-tip)
- [Second missing](#nope-two)

## Real tip

body
";
    let findings = validate(text);
    assert_eq!(
        findings
            .iter()
            .filter(|id| id.as_str() == "ANCHOR002")
            .count(),
        2
    );
}

#[test]
fn test_toc_may_target_category_heading() {
    let text = "\
- [Formatting](#formatting)

## Formatting

### Some tip

body
";
    let findings = validate(text);
    assert!(!findings.contains(&"ANCHOR002".to_string()));
}

#[test]
fn test_unparseable_snippet_reported() {
    let text = "## Tip\n\n```sql\nSELEKT * FORM users\n```\n";
    let findings = validate(text);
    assert!(findings.contains(&"SNIP001".to_string()));
}

#[test]
fn test_unparseable_snippet_line_is_absolute() {
    let text = "## Tip\n\n```sql\nSELEKT * FORM users\n```\n";
    let doc = parse_document(text).unwrap();
    let runner = CheckRunner::new(SqlDialect::Generic, true);
    let report = runner.validate(&doc);

    let finding = report
        .findings
        .iter()
        .find(|f| f.check_id == "SNIP001")
        .unwrap();
    // Fence opens at line 3, offending statement on snippet line 1
    assert_eq!(finding.line, Some(4));
    assert_eq!(finding.severity, Severity::Warning);
}

#[test]
fn test_dialect_specific_snippet_is_info_only() {
    // Backtick identifiers fail under PostgreSQL but parse under MySQL
    let text = "## Tip\n\n```sql\nSELECT `id` FROM `users`;\n```\n";
    let doc = parse_document(text).unwrap();
    let runner = CheckRunner::new(SqlDialect::PostgreSQL, true);
    let report = runner.validate(&doc);

    let snip002: Vec<_> = report
        .findings
        .iter()
        .filter(|f| f.check_id == "SNIP002")
        .collect();
    assert_eq!(snip002.len(), 1);
    assert_eq!(snip002[0].severity, Severity::Info);
    assert!(!report.has_failures());
}

#[test]
fn test_non_sql_fences_are_skipped() {
    let text = "## Tip\n\n```text\nnot sql at all\n```\n";
    let findings = validate(text);
    assert!(!findings.contains(&"SNIP001".to_string()));
}

#[test]
fn test_snippet_checks_can_be_turned_off() {
    let text = "## Tip\n\n```sql\nSELEKT * FORM users\n```\n";
    let doc = parse_document(text).unwrap();
    let runner = CheckRunner::new(SqlDialect::Generic, false);
    let report = runner.validate(&doc);

    assert!(report.findings.is_empty());
}

#[test]
fn test_disabled_check_is_not_run() {
    let text = "- [Missing](#nope)\n\n## Tip\n\nbody\n";
    let doc = parse_document(text).unwrap();
    let config = ChecksConfig {
        disabled: vec!["ANCHOR002".to_string()],
        ..Default::default()
    };
    let runner = CheckRunner::with_config(&config, SqlDialect::Generic, true);
    let report = runner.validate(&doc);

    assert!(report.findings.is_empty());
}

#[test]
fn test_severity_override() {
    let text = "## Tip\n\n```sql\nSELEKT * FORM users\n```\n";
    let doc = parse_document(text).unwrap();
    let mut severity = std::collections::HashMap::new();
    severity.insert("SNIP001".to_string(), "info".to_string());
    let config = ChecksConfig {
        disabled: vec![],
        severity
    };
    let runner = CheckRunner::with_config(&config, SqlDialect::Generic, true);
    let report = runner.validate(&doc);

    let finding = report
        .findings
        .iter()
        .find(|f| f.check_id == "SNIP001")
        .unwrap();
    assert_eq!(finding.severity, Severity::Info);
    assert!(!report.has_failures());
}

#[test]
fn test_findings_sorted_by_severity() {
    let text = "\
- [Missing](#nope)

## Tip

```sql
SELEKT * FORM users
```
";
    let doc = parse_document(text).unwrap();
    let runner = CheckRunner::new(SqlDialect::Generic, true);
    let report = runner.validate(&doc);

    assert!(report.findings.len() >= 2);
    assert_eq!(report.findings[0].check_id, "ANCHOR002");
    assert!(report.error_count() >= 1);
    assert!(report.warning_count() >= 1);
}

#[test]
fn test_report_counts_reflect_document() {
    let text = "## Tip\n\n```sql\nSELECT 1;\n```\n";
    let doc = parse_document(text).unwrap();
    let runner = CheckRunner::new(SqlDialect::Generic, true);
    let report = runner.validate(&doc);

    assert_eq!(report.sections_count, 1);
    assert_eq!(report.examples_count, 1);
    assert_eq!(report.checks_count, 4);
}
