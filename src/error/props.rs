//! Property parsing and expansion errors

use super::BoardPropsError;

/// Creates a malformed line error
pub fn malformed_line(
    path: impl Into<String>,
    line_number: usize,
    line: impl Into<String>,
) -> BoardPropsError {
    BoardPropsError::MalformedLine {
        path: path.into(),
        line_number,
        line: line.into(),
    }
}

/// Creates an unresolved placeholder error
pub fn unresolved(placeholder: impl Into<String>, key: impl Into<String>) -> BoardPropsError {
    BoardPropsError::UnresolvedPlaceholder {
        placeholder: placeholder.into(),
        key: key.into(),
    }
}
