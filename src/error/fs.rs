//! File system errors

use std::path::Path;

use super::BoardPropsError;

/// Creates a missing input file error, e.g. `missing_input("Boards", path)`
pub fn missing_input(kind: impl Into<String>, path: &Path) -> BoardPropsError {
    BoardPropsError::MissingInputFile {
        kind: kind.into(),
        path: path.display().to_string(),
    }
}

/// Creates a file read failed error
pub fn read_failed(path: &Path, reason: impl ToString) -> BoardPropsError {
    BoardPropsError::FileReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: &Path, reason: impl ToString) -> BoardPropsError {
    BoardPropsError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}
