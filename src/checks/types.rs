//! Type definitions for the document check system.
//!
//! - [`Severity`] - Finding severity levels (Info, Warning, Error)
//! - [`CheckCategory`] - Check categories (Anchors, Snippets)
//! - [`Finding`] - Individual findings with document context
//! - [`ValidationReport`] - Complete validation results

use compact_str::CompactString;
use serde::Serialize;

/// Severity level of a finding.
///
/// Ordered from lowest to highest severity for sorting purposes. The
/// process exit code fails a run only when a finding at Warning or above
/// exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Severity {
    /// Advisory note, never fails a run
    Info,
    /// Problem worth fixing, fails the run
    Warning,
    /// Broken navigation or structure, fails the run
    Error
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR")
        }
    }
}

/// Category of a check for grouping and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CheckCategory {
    /// Anchor slugs and table-of-contents links
    Anchors,
    /// Embedded SQL examples
    Snippets
}

impl std::fmt::Display for CheckCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Anchors => write!(f, "Anchors"),
            Self::Snippets => write!(f, "Snippets")
        }
    }
}

/// A single finding reported against the document.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    /// Unique check identifier (e.g., "ANCHOR001", "SNIP001")
    pub check_id:   &'static str,
    /// Human-readable check name
    pub check_name: &'static str,
    /// Detailed description of the finding
    pub message:    String,
    /// Severity level of this finding
    pub severity:   Severity,
    /// Category for grouping findings
    pub category:   CheckCategory,
    /// Optional suggestion for fixing the issue
    pub suggestion: Option<String>,
    /// 1-based source line, when one can be attributed
    pub line:       Option<usize>,
    /// Anchor slug involved, for anchor findings
    pub anchor:     Option<CompactString>
}

/// Metadata about a check for identification and configuration.
#[derive(Debug, Clone)]
pub struct CheckInfo {
    /// Unique check identifier (e.g., "ANCHOR001")
    pub id:       &'static str,
    /// Human-readable check name
    pub name:     &'static str,
    /// Default severity level
    pub severity: Severity,
    /// Check category
    pub category: CheckCategory
}

/// Complete validation report containing all findings.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// All findings, sorted by severity then source line
    pub findings:       Vec<Finding>,
    /// Number of sections checked
    pub sections_count: usize,
    /// Number of extracted examples checked
    pub examples_count: usize,
    /// Number of checks executed
    pub checks_count:   usize
}

impl ValidationReport {
    pub fn new(sections_count: usize, examples_count: usize, checks_count: usize) -> Self {
        Self {
            findings: Vec::new(),
            sections_count,
            examples_count,
            checks_count
        }
    }

    pub fn add_finding(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    pub fn error_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .count()
    }

    pub fn info_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Info)
            .count()
    }

    /// Whether any finding should fail the run
    pub fn has_failures(&self) -> bool {
        self.findings.iter().any(|f| f.severity >= Severity::Warning)
    }
}
