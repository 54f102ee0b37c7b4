use sql_doc_validator::{
    checks::CheckRunner,
    document::parse_document,
    output::{OutputFormat, OutputOptions, format_document_summary, format_validation_report},
    snippet::SqlDialect
};

const BROKEN: &str = "\
- [Missing](#non-existent-tip)

## Use a leading comma

```sql
SELECT id FROM users;
```
";

fn plain(format: OutputFormat) -> OutputOptions {
    OutputOptions {
        format,
        colored: false,
        verbose: false
    }
}

#[test]
fn test_text_report_lists_findings() {
    let doc = parse_document(BROKEN).unwrap();
    let report = CheckRunner::new(SqlDialect::Generic, true).validate(&doc);
    let output = format_validation_report(&report, &plain(OutputFormat::Text));

    assert!(output.contains("ANCHOR002"));
    assert!(output.contains("non-existent-tip"));
    assert!(output.contains("line 1"));
    assert!(output.contains("1 errors"));
}

#[test]
fn test_text_report_clean_summary() {
    let doc = parse_document("## Tip\n\nbody\n").unwrap();
    let report = CheckRunner::new(SqlDialect::Generic, true).validate(&doc);
    let output = format_validation_report(&report, &plain(OutputFormat::Text));

    assert!(output.contains("0 errors, 0 warnings, 0 notes"));
}

#[test]
fn test_json_report() {
    let doc = parse_document(BROKEN).unwrap();
    let report = CheckRunner::new(SqlDialect::Generic, true).validate(&doc);
    let output = format_validation_report(&report, &plain(OutputFormat::Json));

    assert!(output.contains("\"findings\""));
    assert!(output.contains("\"ANCHOR002\""));
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["sections_count"], 1);
}

#[test]
fn test_yaml_report() {
    let doc = parse_document(BROKEN).unwrap();
    let report = CheckRunner::new(SqlDialect::Generic, true).validate(&doc);
    let output = format_validation_report(&report, &plain(OutputFormat::Yaml));

    assert!(output.contains("findings"));
    assert!(output.contains("ANCHOR002"));
}

#[test]
fn test_verbose_report_mentions_checks() {
    let doc = parse_document("## Tip\n\nbody\n").unwrap();
    let report = CheckRunner::new(SqlDialect::Generic, true).validate(&doc);
    let opts = OutputOptions {
        format:  OutputFormat::Text,
        colored: false,
        verbose: true
    };
    let output = format_validation_report(&report, &opts);

    assert!(output.contains("Checks executed: 4"));
}

#[test]
fn test_text_summary_lists_sections() {
    let doc = parse_document(BROKEN).unwrap();
    let output = format_document_summary(&doc, &plain(OutputFormat::Text));

    assert!(output.contains("Use a leading comma"));
    assert!(output.contains("#use-a-leading-comma"));
    assert!(output.contains("TOC entries: 1"));
}

#[test]
fn test_json_summary_round_trips() {
    let doc = parse_document(BROKEN).unwrap();
    let output = format_document_summary(&doc, &plain(OutputFormat::Json));
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["sections"][0]["slug"], "use-a-leading-comma");
}

#[test]
fn test_colored_output_differs() {
    let doc = parse_document(BROKEN).unwrap();
    let report = CheckRunner::new(SqlDialect::Generic, true).validate(&doc);
    let mut opts = plain(OutputFormat::Text);
    let plain_output = format_validation_report(&report, &opts);
    opts.colored = true;
    let colored_output = format_validation_report(&report, &opts);

    // Colored output is at least as long as plain output
    assert!(colored_output.len() >= plain_output.len());
}
