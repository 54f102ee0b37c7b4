use rayon::prelude::*;

use super::{Check, CheckCategory, CheckInfo, Finding, Severity};
use crate::{
    document::Document,
    snippet::{SnippetStatus, SqlDialect, check_snippet}
};

/// SQL example that parses under no known dialect
pub struct UnparseableSnippet {
    dialect: SqlDialect
}

impl UnparseableSnippet {
    pub fn new(dialect: SqlDialect) -> Self {
        Self {
            dialect
        }
    }
}

impl Check for UnparseableSnippet {
    fn info(&self) -> CheckInfo {
        CheckInfo {
            id:       "SNIP001",
            name:     "Unparseable snippet",
            severity: Severity::Warning,
            category: CheckCategory::Snippets
        }
    }

    fn run(&self, doc: &Document) -> Vec<Finding> {
        let info = self.info();
        doc.sections
            .par_iter()
            .flat_map_iter(|section| {
                section
                    .examples
                    .iter()
                    .filter(|e| e.is_sql())
                    .filter_map(|example| {
                        let SnippetStatus::Invalid {
                            line,
                            column,
                            message
                        } = check_snippet(&example.code, self.dialect)
                        else {
                            return None;
                        };
                        // Parser lines are relative to the snippet; the
                        // opening fence sits on example.line
                        let abs_line = line.map(|l| example.line + l);
                        let position = match (line, column) {
                            (Some(l), Some(c)) => format!(" (snippet line {}, column {})", l, c),
                            _ => String::new()
                        };
                        Some(Finding {
                            check_id: info.id,
                            check_name: info.name,
                            message: format!(
                                "Example in section '{}' is not well-formed SQL{}: {}",
                                section.title, position, message
                            ),
                            severity: info.severity,
                            category: info.category,
                            suggestion: Some(
                                "Fix the snippet, or tag the fence with a non-sql language to \
                                 skip checking"
                                    .to_string()
                            ),
                            line: abs_line.or(Some(example.line)),
                            anchor: None
                        })
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

/// SQL example accepted only by a dialect other than the requested one
pub struct DialectSpecificSnippet {
    dialect: SqlDialect
}

impl DialectSpecificSnippet {
    pub fn new(dialect: SqlDialect) -> Self {
        Self {
            dialect
        }
    }
}

impl Check for DialectSpecificSnippet {
    fn info(&self) -> CheckInfo {
        CheckInfo {
            id:       "SNIP002",
            name:     "Dialect-specific snippet",
            severity: Severity::Info,
            category: CheckCategory::Snippets
        }
    }

    fn run(&self, doc: &Document) -> Vec<Finding> {
        let info = self.info();
        doc.sections
            .par_iter()
            .flat_map_iter(|section| {
                section
                    .examples
                    .iter()
                    .filter(|e| e.is_sql())
                    .filter_map(|example| {
                        let SnippetStatus::Unknown {
                            dialect
                        } = check_snippet(&example.code, self.dialect)
                        else {
                            return None;
                        };
                        Some(Finding {
                            check_id: info.id,
                            check_name: info.name,
                            message: format!(
                                "Example in section '{}' parses only under the {} dialect",
                                section.title, dialect
                            ),
                            severity: info.severity,
                            category: info.category,
                            suggestion: None,
                            line: Some(example.line),
                            anchor: None
                        })
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}
