//! Error types and handling for boardprops
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Convenience constructors are grouped by error domain:
//! - [`config`]: Invocation/configuration errors
//! - [`fs`]: File system errors (missing inputs, read/write failures)
//! - [`props`]: Property parsing and template expansion errors

pub mod config;
pub mod fs;
pub mod props;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for boardprops operations
#[derive(Error, Diagnostic, Debug)]
pub enum BoardPropsError {
    // Input errors
    #[error("{kind} file {path} not exists!")]
    #[diagnostic(
        code(boardprops::input::missing),
        help("Check --arduino-dir, --vendor and --arch point at a hardware core directory")
    )]
    MissingInputFile { kind: String, path: String },

    // Property file errors
    #[error("Malformed line {line_number} in {path}: '{line}'")]
    #[diagnostic(
        code(boardprops::props::malformed_line),
        help("Property lines must have the form key=value")
    )]
    MalformedLine {
        path: String,
        line_number: usize,
        line: String,
    },

    // Expansion errors
    #[error("Unresolved placeholder '{{{placeholder}}}' in value of '{key}'")]
    #[diagnostic(
        code(boardprops::expand::unresolved),
        help("Define the variable or pass --keep-unresolved to leave it for the build step")
    )]
    UnresolvedPlaceholder { placeholder: String, key: String },

    // Configuration errors
    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(boardprops::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(boardprops::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(boardprops::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(boardprops::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for BoardPropsError {
    fn from(err: std::io::Error) -> Self {
        BoardPropsError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BoardPropsError>;
