//! Reflection errors

use thiserror::Error;

/// Result type for reflection helpers
pub type ReflectResult<T> = Result<T, ReflectError>;

/// Errors raised by the reflection helpers
///
/// These signal a broken calling contract rather than a recoverable runtime
/// condition. Nothing in this crate catches them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReflectError {
    /// An argument did not satisfy the operation's precondition
    #[error("Invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument
        argument: &'static str,
        /// What was wrong with it
        reason: String,
    },
}

impl ReflectError {
    /// Destination buffer cannot hold one type per parameter
    pub fn destination_too_small(required: usize, actual: usize) -> Self {
        ReflectError::InvalidArgument {
            argument: "destination",
            reason: format!(
                "destination is too small: need {} slots, got {}",
                required, actual
            ),
        }
    }
}
