//! Validation check engine for tips documents.
//!
//! This module provides a parallel check execution engine that validates a
//! parsed [`Document`] for navigation and snippet problems. Checks are
//! implemented as types that implement the [`Check`] trait.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  Document   │────▶│ CheckRunner  │────▶│   Report    │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!                            │
//!                     ┌──────┴──────┐
//!                     │   Checks    │
//!                     │  (parallel) │
//!                     └─────────────┘
//! ```
//!
//! The [`CheckRunner`] executes all enabled checks in parallel using
//! [`rayon`], collecting findings into a [`ValidationReport`]. Findings are
//! always accumulated across the whole document; nothing short-circuits on
//! the first problem.
//!
//! # Built-in Checks
//!
//! - **Anchors** (`ANCHOR001`-`ANCHOR002`) - duplicate anchor slugs and
//!   table-of-contents entries with no matching heading
//! - **Snippets** (`SNIP001`-`SNIP002`) - SQL examples that parse under no
//!   known dialect, or only under a dialect other than the requested one
//!
//! # Configuration
//!
//! Checks can be disabled or have their severity modified via
//! [`ChecksConfig`]:
//!
//! ```toml
//! [checks]
//! disabled = ["SNIP002"]
//!
//! [checks.severity]
//! SNIP001 = "error"
//! ```

mod anchors;
mod snippets;
mod types;

use rayon::prelude::*;
pub use types::{CheckCategory, CheckInfo, Finding, Severity, ValidationReport};

use crate::{config::ChecksConfig, document::Document, snippet::SqlDialect};

/// Trait for implementing document checks.
///
/// Checks are stateless validators that examine the whole document and
/// return any findings. They must be `Send + Sync` for parallel execution.
pub trait Check: Send + Sync {
    /// Returns metadata about this check.
    fn info(&self) -> CheckInfo;

    /// Validates the document and returns any findings.
    fn run(&self, doc: &Document) -> Vec<Finding>;
}

/// Parallel check execution engine.
///
/// The runner holds a collection of checks and executes them in parallel
/// against the document using [`rayon`]. It supports check filtering via
/// configuration and severity overrides.
///
/// # Example
///
/// ```
/// use sql_doc_validator::{
///     checks::CheckRunner, document::parse_document, snippet::SqlDialect
/// };
///
/// let doc =
///     parse_document("## Use explicit columns\n\nAvoid SELECT * in reports.\n").unwrap();
/// let runner = CheckRunner::new(SqlDialect::Generic, true);
/// let report = runner.validate(&doc);
///
/// assert_eq!(report.error_count(), 0);
/// ```
pub struct CheckRunner {
    checks:         Vec<Box<dyn Check>>,
    severity_cache: std::collections::HashMap<&'static str, Severity>
}

impl CheckRunner {
    /// Create a runner with all default checks
    pub fn new(dialect: SqlDialect, snippet_checks: bool) -> Self {
        Self::with_config(&ChecksConfig::default(), dialect, snippet_checks)
    }

    /// Create a runner with configuration
    ///
    /// # Notes
    ///
    /// - Anchor checks (ANCHOR001-ANCHOR002) validate slugs and TOC links
    /// - Snippet checks (SNIP001-SNIP002) are skipped entirely when
    ///   `snippet_checks` is false
    pub fn with_config(config: &ChecksConfig, dialect: SqlDialect, snippet_checks: bool) -> Self {
        let mut all_checks: Vec<Box<dyn Check>> =
            vec![Box::new(anchors::DuplicateAnchor), Box::new(anchors::BrokenAnchor)];
        if snippet_checks {
            all_checks.push(Box::new(snippets::UnparseableSnippet::new(dialect)));
            all_checks.push(Box::new(snippets::DialectSpecificSnippet::new(dialect)));
        }
        let checks: Vec<Box<dyn Check>> = all_checks
            .into_iter()
            .filter(|c| {
                !config
                    .disabled
                    .iter()
                    .any(|d| d.eq_ignore_ascii_case(c.info().id))
            })
            .collect();
        let mut severity_cache = std::collections::HashMap::new();
        for check in &checks {
            let check_id = check.info().id;
            if let Some(sev_str) = config.severity.get(check_id)
                && let Some(sev) = parse_severity(sev_str)
            {
                severity_cache.insert(check_id, sev);
            }
        }
        Self {
            checks,
            severity_cache
        }
    }

    /// Run all checks on the document (parallel execution)
    pub fn validate(&self, doc: &Document) -> ValidationReport {
        let mut report =
            ValidationReport::new(doc.sections.len(), doc.example_count(), self.checks.len());
        let findings: Vec<Finding> = self
            .checks
            .par_iter()
            .flat_map(|check| check.run(doc))
            .collect();
        for mut finding in findings {
            if let Some(&severity) = self.severity_cache.get(finding.check_id) {
                finding.severity = severity;
            }
            report.add_finding(finding);
        }
        report.findings.sort_by(|a, b| {
            b.severity
                .cmp(&a.severity)
                .then_with(|| a.line.cmp(&b.line))
        });
        report
    }
}

/// Parse severity string to enum
fn parse_severity(s: &str) -> Option<Severity> {
    match s.to_lowercase().as_str() {
        "error" => Some(Severity::Error),
        "warning" | "warn" => Some(Severity::Warning),
        "info" => Some(Severity::Info),
        _ => None
    }
}
