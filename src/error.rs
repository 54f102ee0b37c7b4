pub use masterror::{AppError, AppResult};

/// Create file read error
pub fn file_read_error(path: &str, source: std::io::Error) -> AppError {
    AppError::internal(format!("Failed to read file '{}': {}", path, source))
}

/// Create fatal document structure error with the offending line
pub fn malformed_document_error(line: usize, message: impl Into<String>) -> AppError {
    AppError::bad_request(format!(
        "Malformed document at line {}:\n  {}",
        line,
        message.into()
    ))
}

/// Create fatal error for a fence with no closing delimiter
pub fn unterminated_code_block_error(line: usize) -> AppError {
    AppError::bad_request(format!(
        "Unterminated code block: fence opened at line {} is never closed",
        line
    ))
}

/// Create error for a failed site write
pub fn render_write_error(path: &str, source: std::io::Error) -> AppError {
    AppError::internal(format!("Failed to write '{}': {}", path, source))
}

/// Create config error
pub fn config_error(message: impl Into<String>) -> AppError {
    AppError::bad_request(message.into())
}

/// Line/column position extracted from a SQL parser error message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SqlPosition {
    pub line:   usize,
    pub column: usize
}

/// Extract position info from sqlparser error text.
///
/// sqlparser format: "... at Line: X, Column Y"
pub fn extract_position(message: &str) -> Option<SqlPosition> {
    let line_marker = "Line: ";
    let col_marker = ", Column";

    let line_start = message.find(line_marker)?;
    let line_num_start = line_start + line_marker.len();
    let col_start = message[line_num_start..].find(col_marker)?;
    let line_str = &message[line_num_start..line_num_start + col_start];

    let after_col = message[line_num_start + col_start + col_marker.len()..]
        .trim_start_matches(':')
        .trim_start();
    let col_end = after_col
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(after_col.len());
    let col_str = &after_col[..col_end];

    match (line_str.trim().parse(), col_str.parse()) {
        (Ok(line), Ok(column)) => Some(SqlPosition {
            line,
            column
        }),
        _ => None
    }
}
