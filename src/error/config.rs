//! Configuration errors

use super::BoardPropsError;

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> BoardPropsError {
    BoardPropsError::ConfigInvalid {
        message: message.into(),
    }
}
