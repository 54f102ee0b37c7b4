//! Application logic for the SQL Doc Validator CLI.
//!
//! This module contains the core application logic separated from the main
//! entry point to enable testing.

use std::{
    fs::read_to_string,
    io::{self, Read},
    path::PathBuf
};

use crate::{
    cache::{cache_document, get_cached},
    checks::{CheckRunner, ValidationReport},
    cli::{Dialect, Format},
    config::Config,
    document::{Document, parse_document},
    error::{AppResult, file_read_error},
    output::{OutputFormat, OutputOptions, format_document_summary, format_validation_report},
    render::write_site,
    snippet::SqlDialect
};

/// Parameters for the validate command
#[derive(Debug, Clone)]
pub struct ValidateParams {
    pub path:          String,
    pub dialect:       Dialect,
    pub output_format: Format,
    pub verbose:       bool,
    pub snippet_check: bool,
    pub no_color:      bool
}

/// Result of validation containing all outputs
#[derive(Debug, Clone)]
pub struct ValidateOutcome {
    pub exit_code:     i32,
    pub report_output: String,
    /// Per-section summary, only populated in verbose mode
    pub summary:       Option<String>
}

/// Parameters for the render command
#[derive(Debug, Clone)]
pub struct RenderParams {
    pub path:    String,
    pub out_dir: PathBuf,
    pub title:   Option<String>
}

/// Convert CLI dialect to internal SqlDialect
pub fn convert_dialect(dialect: Dialect) -> SqlDialect {
    match dialect {
        Dialect::Generic => SqlDialect::Generic,
        Dialect::Mysql => SqlDialect::MySQL,
        Dialect::Postgresql => SqlDialect::PostgreSQL,
        Dialect::Sqlite => SqlDialect::SQLite,
        Dialect::Clickhouse => SqlDialect::ClickHouse
    }
}

/// Convert CLI format to internal OutputFormat
pub fn convert_format(format: Format) -> OutputFormat {
    match format {
        Format::Text => OutputFormat::Text,
        Format::Json => OutputFormat::Json,
        Format::Yaml => OutputFormat::Yaml
    }
}

/// Calculate exit code from the report: 1 when any finding at Warning or
/// above exists, 0 otherwise. Info findings never fail a run.
pub fn calculate_exit_code(report: &ValidationReport) -> i32 {
    if report.has_failures() { 1 } else { 0 }
}

/// Read the document from file or stdin
pub fn read_document_input(path: &str) -> AppResult<String> {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| file_read_error("stdin", e))?;
        Ok(buffer)
    } else {
        read_to_string(path).map_err(|e| file_read_error(path, e))
    }
}

/// Parse a document with caching
pub fn parse_document_cached(text: &str) -> AppResult<Document> {
    if let Some(cached) = get_cached(text) {
        Ok(cached)
    } else {
        let doc = parse_document(text)?;
        cache_document(text, doc.clone());
        Ok(doc)
    }
}

/// Run the validate command
pub fn run_validate(params: &ValidateParams) -> AppResult<ValidateOutcome> {
    let config = Config::load()?;
    let text = read_document_input(&params.path)?;
    let doc = parse_document_cached(&text)?;

    let runner = CheckRunner::with_config(
        &config.checks,
        convert_dialect(params.dialect.clone()),
        params.snippet_check
    );
    let report = runner.validate(&doc);

    let opts = OutputOptions {
        format:  convert_format(params.output_format.clone()),
        colored: !params.no_color,
        verbose: params.verbose
    };
    let report_output = format_validation_report(&report, &opts);
    let summary = params
        .verbose
        .then(|| format_document_summary(&doc, &opts));

    Ok(ValidateOutcome {
        exit_code: calculate_exit_code(&report),
        report_output,
        summary
    })
}

/// Run the render command
pub fn run_render(params: &RenderParams) -> AppResult<()> {
    let config = Config::load()?;
    let text = read_document_input(&params.path)?;
    let doc = parse_document_cached(&text)?;

    let title = params.title.as_deref().or(config.render.title.as_deref());
    write_site(&doc, &params.out_dir, title)
}
