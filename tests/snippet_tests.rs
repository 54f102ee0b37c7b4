use sql_doc_validator::snippet::{SnippetStatus, SqlDialect, check_snippet};

#[test]
fn test_valid_select() {
    let status = check_snippet("SELECT id, name FROM users WHERE id = 1;", SqlDialect::Generic);
    assert_eq!(status, SnippetStatus::Valid);
}

#[test]
fn test_valid_cte() {
    let sql = "WITH active AS (SELECT id FROM users WHERE active = true)
SELECT * FROM active;";
    assert_eq!(check_snippet(sql, SqlDialect::Generic), SnippetStatus::Valid);
}

#[test]
fn test_valid_window_function() {
    let sql = "SELECT id, ROW_NUMBER() OVER (PARTITION BY city ORDER BY id) FROM users;";
    assert_eq!(check_snippet(sql, SqlDialect::Generic), SnippetStatus::Valid);
}

#[test]
fn test_valid_multi_statement() {
    let sql = "SELECT 1;\nSELECT 2;";
    assert_eq!(check_snippet(sql, SqlDialect::Generic), SnippetStatus::Valid);
}

#[test]
fn test_invalid_everywhere() {
    let status = check_snippet("SELEKT * FORM users", SqlDialect::Generic);
    assert!(matches!(status, SnippetStatus::Invalid { .. }));
}

#[test]
fn test_invalid_reports_line() {
    let status = check_snippet("SELECT 1;\nSELEKT 2;", SqlDialect::Generic);
    match status {
        SnippetStatus::Invalid {
            line,
            message,
            ..
        } => {
            assert_eq!(line, Some(2));
            assert!(!message.is_empty());
        }
        other => panic!("expected Invalid, got {:?}", other)
    }
}

#[test]
fn test_dialect_fallback_is_advisory() {
    // Backtick identifiers are rejected by PostgreSQL but accepted elsewhere
    let status = check_snippet("SELECT `id` FROM `users`;", SqlDialect::PostgreSQL);
    assert!(matches!(status, SnippetStatus::Unknown { .. }));
}

#[test]
fn test_requested_dialect_tried_first() {
    let status = check_snippet("SELECT id FROM users LIMIT 10;", SqlDialect::MySQL);
    assert_eq!(status, SnippetStatus::Valid);
}

#[test]
fn test_check_is_pure() {
    let sql = "SELECT id FROM users;";
    assert_eq!(
        check_snippet(sql, SqlDialect::Generic),
        check_snippet(sql, SqlDialect::Generic)
    );
}

#[test]
fn test_dialect_display() {
    assert_eq!(SqlDialect::PostgreSQL.to_string(), "postgresql");
    assert_eq!(SqlDialect::Generic.to_string(), "generic");
}
