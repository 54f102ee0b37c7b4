//! Syntax-only checking of embedded SQL examples.
//!
//! Examples are parsed with a permissive grammar and never executed. The
//! tips document intentionally spans several SQL dialects, so a snippet the
//! requested dialect rejects is retried against the remaining dialects
//! before it is called invalid:
//!
//! - [`SnippetStatus::Valid`] - parses under the requested dialect
//! - [`SnippetStatus::Unknown`] - rejected by the requested dialect but
//!   accepted by another known one; advisory only
//! - [`SnippetStatus::Invalid`] - parses under no known dialect, with the
//!   offending line/column when the parser reports one

use serde::Serialize;
use sqlparser::{
    dialect::{
        ClickHouseDialect, Dialect, GenericDialect, MySqlDialect, PostgreSqlDialect, SQLiteDialect
    },
    parser::Parser
};

use crate::error::extract_position;

/// SQL dialect for snippet parsing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub enum SqlDialect {
    #[default]
    Generic,
    MySQL,
    PostgreSQL,
    SQLite,
    ClickHouse
}

impl SqlDialect {
    /// All dialects tried during fallback classification
    pub const ALL: [SqlDialect; 5] = [
        Self::Generic,
        Self::MySQL,
        Self::PostgreSQL,
        Self::SQLite,
        Self::ClickHouse
    ];

    /// Convert to sqlparser dialect for parsing
    pub fn into_parser_dialect(self) -> Box<dyn Dialect> {
        match self {
            Self::Generic => Box::new(GenericDialect {}),
            Self::MySQL => Box::new(MySqlDialect {}),
            Self::PostgreSQL => Box::new(PostgreSqlDialect {}),
            Self::SQLite => Box::new(SQLiteDialect {}),
            Self::ClickHouse => Box::new(ClickHouseDialect {})
        }
    }
}

impl std::fmt::Display for SqlDialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generic => write!(f, "generic"),
            Self::MySQL => write!(f, "mysql"),
            Self::PostgreSQL => write!(f, "postgresql"),
            Self::SQLite => write!(f, "sqlite"),
            Self::ClickHouse => write!(f, "clickhouse")
        }
    }
}

/// Result of a syntax-only snippet check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SnippetStatus {
    /// Well-formed under the requested dialect
    Valid,
    /// Rejected by the requested dialect, accepted by `dialect`
    Unknown {
        dialect: SqlDialect
    },
    /// Parses under no known dialect
    Invalid {
        line:    Option<usize>,
        column:  Option<usize>,
        message: String
    }
}

fn parses_under(code: &str, dialect: SqlDialect) -> Result<(), String> {
    let parser_dialect = dialect.into_parser_dialect();
    Parser::parse_sql(parser_dialect.as_ref(), code)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

/// Classify a snippet against the requested dialect with fallback.
pub fn check_snippet(code: &str, dialect: SqlDialect) -> SnippetStatus {
    let message = match parses_under(code, dialect) {
        Ok(()) => return SnippetStatus::Valid,
        Err(message) => message
    };

    for fallback in SqlDialect::ALL {
        if fallback == dialect {
            continue;
        }
        if parses_under(code, fallback).is_ok() {
            return SnippetStatus::Unknown {
                dialect: fallback
            };
        }
    }

    let position = extract_position(&message);
    SnippetStatus::Invalid {
        line: position.map(|p| p.line),
        column: position.map(|p| p.column),
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_generic_select() {
        let status = check_snippet("SELECT id, name FROM users;", SqlDialect::Generic);
        assert_eq!(status, SnippetStatus::Valid);
    }

    #[test]
    fn test_invalid_snippet_reports_position() {
        let status = check_snippet("SELEKT * FORM users", SqlDialect::Generic);
        match status {
            SnippetStatus::Invalid {
                line, ..
            } => assert_eq!(line, Some(1)),
            other => panic!("expected Invalid, got {:?}", other)
        }
    }

    #[test]
    fn test_multi_statement_snippet() {
        let status = check_snippet(
            "SELECT 1;\nSELECT id FROM users WHERE id = 1;",
            SqlDialect::Generic
        );
        assert_eq!(status, SnippetStatus::Valid);
    }
}
