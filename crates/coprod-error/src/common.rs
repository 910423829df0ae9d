// Common error utilities and helper functions
// Provides common error handling patterns used across the kernel

use crate::BoxError;

/// Create an invalid argument error with the given reason
pub fn invalid_argument_error(reason: impl Into<String>) -> BoxError {
    Box::new(crate::CommonError::InvalidArgument(reason.into()))
}

/// Create an invalid state error with the given reason
pub fn invalid_state_error(reason: impl Into<String>) -> BoxError {
    Box::new(crate::CommonError::InvalidState(reason.into()))
}

/// Create an unsupported operation error
pub fn unsupported_error(operation: impl Into<String>) -> BoxError {
    Box::new(crate::CommonError::Unsupported(operation.into()))
}

/// Create an internal error with the given reason
pub fn internal_error(reason: impl Into<String>) -> BoxError {
    Box::new(crate::CommonError::Internal(reason.into()))
}
