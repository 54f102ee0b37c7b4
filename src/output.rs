use colored::Colorize;

use crate::{
    checks::{Severity, ValidationReport},
    document::Document
};

/// Output format for results
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml
}

/// Output options
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format:  OutputFormat,
    pub colored: bool,
    pub verbose: bool
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format:  OutputFormat::Text,
            colored: true,
            verbose: false
        }
    }
}

/// Format a validation report based on output options
pub fn format_validation_report(report: &ValidationReport, opts: &OutputOptions) -> String {
    match opts.format {
        OutputFormat::Json => serde_json::to_string_pretty(report).unwrap_or_default(),
        OutputFormat::Yaml => serde_yaml::to_string(report).unwrap_or_default(),
        OutputFormat::Text => format_text_report(report, opts)
    }
}

/// Format a document summary based on output options
pub fn format_document_summary(doc: &Document, opts: &OutputOptions) -> String {
    match opts.format {
        OutputFormat::Json => serde_json::to_string_pretty(doc).unwrap_or_default(),
        OutputFormat::Yaml => serde_yaml::to_string(doc).unwrap_or_default(),
        OutputFormat::Text => format_text_summary(doc, opts)
    }
}

fn format_text_report(report: &ValidationReport, opts: &OutputOptions) -> String {
    let mut output = String::new();
    let header = "=== Document Validation ===\n\n";
    if opts.colored {
        output.push_str(&header.bold().to_string());
    } else {
        output.push_str(header);
    }

    for finding in &report.findings {
        let severity = finding.severity.to_string();
        let severity = if opts.colored {
            match finding.severity {
                Severity::Error => severity.red().bold().to_string(),
                Severity::Warning => severity.yellow().bold().to_string(),
                Severity::Info => severity.cyan().to_string()
            }
        } else {
            severity
        };
        let location = finding
            .line
            .map(|l| format!(" (line {})", l))
            .unwrap_or_default();
        output.push_str(&format!(
            "[{}] {} {}{}: {}\n",
            severity, finding.check_id, finding.check_name, location, finding.message
        ));
        if let Some(suggestion) = &finding.suggestion {
            output.push_str(&format!("  Suggestion: {}\n", suggestion));
        }
    }

    if !report.findings.is_empty() {
        output.push('\n');
    }

    let summary = format!(
        "Checked {} sections, {} examples: {} errors, {} warnings, {} notes\n",
        report.sections_count,
        report.examples_count,
        report.error_count(),
        report.warning_count(),
        report.info_count()
    );
    if opts.colored && !report.has_failures() {
        output.push_str(&summary.green().to_string());
    } else {
        output.push_str(&summary);
    }

    if opts.verbose {
        output.push_str(&format!("Checks executed: {}\n", report.checks_count));
    }

    output
}

fn format_text_summary(doc: &Document, opts: &OutputOptions) -> String {
    let mut summary = String::from("Document sections:\n\n");

    for section in &doc.sections {
        let header = format!("{} [{}]", section.title, section.category);
        if opts.colored {
            summary.push_str(&header.cyan().bold().to_string());
        } else {
            summary.push_str(&header);
        }
        summary.push('\n');
        summary.push_str(&format!("  anchor: #{}\n", section.slug));
        summary.push_str(&format!("  line: {}\n", section.line));
        if !section.examples.is_empty() {
            summary.push_str(&format!("  examples: {}\n", section.examples.len()));
        }
        if opts.verbose {
            for example in &section.examples {
                let output_note = if example.expected_output.is_some() {
                    ", with expected output"
                } else {
                    ""
                };
                summary.push_str(&format!(
                    "    {} at line {}{}\n",
                    example.language, example.line, output_note
                ));
            }
        }
        summary.push('\n');
    }

    summary.push_str(&format!("TOC entries: {}\n", doc.toc.len()));
    summary
}
