// Coprod Error Handling Framework
// Central location for error types, traits, and handling utilities

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

// Re-export common error handling tools for convenience
pub use anyhow;
pub use thiserror;

// Module structure
mod common;
mod conversion;
mod coproduct;
mod macros;

// Public exports
pub use common::*;
pub use conversion::{map_error, to_box_error, ExternalError, IntoBoxError};
pub use coproduct::{CoproductError, CoproductResult};

/// Error domains representing the different parts of the kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorDomain {
    Core,
    Coproduct,
    External,
}

impl fmt::Display for ErrorDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorDomain::Core => write!(f, "core"),
            ErrorDomain::Coproduct => write!(f, "coproduct"),
            ErrorDomain::External => write!(f, "external"),
        }
    }
}

/// Standard error message format for serialization
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ErrorMessage {
    pub code: String,
    pub domain: ErrorDomain,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Common error type (part of Core domain)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommonError {
    #[error("Invalid argument: {0}")] InvalidArgument(String),
    #[error("Invalid state: {0}")] InvalidState(String),
    #[error("Operation not supported: {0}")] Unsupported(String),
    #[error("Internal error: {0}")] Internal(String),
}

impl KernelError for CommonError {
    fn error_code(&self) -> &'static str {
        match self {
            CommonError::InvalidArgument(_) => "CORE_INVALID_ARGUMENT",
            CommonError::InvalidState(_) => "CORE_INVALID_STATE",
            CommonError::Unsupported(_) => "CORE_UNSUPPORTED",
            CommonError::Internal(_) => "CORE_INTERNAL",
        }
    }
    fn as_any(&self) -> &dyn Any { self }
}

impl From<CommonError> for BoxError {
    fn from(err: CommonError) -> Self {
        Box::new(err)
    }
}

/// Standard Result type using BoxError
pub type Result<T> = std::result::Result<T, BoxError>;
/// Shorthand for a boxed KernelError. This is the failure payload of `Try<S>`.
pub type BoxError = Box<dyn KernelError>;

/// Custom error type definition and impls
pub mod custom_error {
    use super::*;

    /// A custom error type that can be created dynamically
    #[derive(Debug, Clone)]
    pub struct CustomError {
        domain: ErrorDomain,
        code: &'static str,
        message: String,
        details: Option<serde_json::Value>,
    }

    impl CustomError {
        pub fn new(domain: ErrorDomain, code: &'static str, message: impl Into<String>) -> Self {
            Self { domain, code, message: message.into(), details: None }
        }
        pub fn with_details(mut self, details: serde_json::Value) -> Self {
            self.details = Some(details);
            self
        }
        pub fn details(&self) -> Option<&serde_json::Value> {
            self.details.as_ref()
        }
    }

    impl fmt::Display for CustomError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.message)
        }
    }

    impl StdError for CustomError {}

    impl KernelError for CustomError {
        fn error_code(&self) -> &'static str { self.code }
        fn domain(&self) -> ErrorDomain { self.domain }
        fn as_any(&self) -> &dyn Any { self }
        fn to_message(&self) -> ErrorMessage {
            ErrorMessage {
                code: self.code.to_string(),
                domain: self.domain,
                message: self.message.clone(),
                details: self.details.clone(),
            }
        }
    }

    impl From<CustomError> for BoxError {
        fn from(err: CustomError) -> Self {
            Box::new(err)
        }
    }
}

/// Base trait for all errors in the kernel.
pub trait KernelError: StdError + fmt::Debug + fmt::Display + Send + Sync + Any + 'static {
    /// Returns a unique static string code for this error type.
    fn error_code(&self) -> &'static str;

    /// Domain the error originates from.
    fn domain(&self) -> ErrorDomain { ErrorDomain::Core }

    /// Provides a brief summary of the error (defaults to Display impl).
    fn summary(&self) -> String { format!("{}", self) }

    /// Converts the error into a boxed trait object.
    fn into_boxed(self) -> BoxError where Self: Sized { Box::new(self) }

    /// Provides context specific to the error (optional).
    fn context(&self) -> Option<String> { None }

    /// Indicates if the error is temporary and retrying might succeed (optional).
    fn is_transient(&self) -> bool { false }

    /// Returns this error as a `&dyn Any` to allow downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Serializable report of this error.
    fn to_message(&self) -> ErrorMessage {
        ErrorMessage {
            code: self.error_code().to_string(),
            domain: self.domain(),
            message: self.summary(),
            details: self.context().map(serde_json::Value::String),
        }
    }
}

impl dyn KernelError {
    /// Attempts to view the boxed error as a concrete error type.
    pub fn downcast_ref<E: KernelError>(&self) -> Option<&E> {
        self.as_any().downcast_ref::<E>()
    }

    /// Returns true if the boxed error is of concrete type `E`.
    pub fn is<E: KernelError>(&self) -> bool {
        self.as_any().is::<E>()
    }
}

// Two errors are structurally equal when they agree on domain, code and message.
impl PartialEq for dyn KernelError {
    fn eq(&self, other: &Self) -> bool {
        self.domain() == other.domain()
            && self.error_code() == other.error_code()
            && self.to_string() == other.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_domain_display() {
        assert_eq!(ErrorDomain::Coproduct.to_string(), "coproduct");
        assert_eq!(ErrorDomain::External.to_string(), "external");
    }

    #[test]
    fn test_boxed_errors_compare_structurally() {
        let a: BoxError = CommonError::Internal("boom".into()).into();
        let b: BoxError = CommonError::Internal("boom".into()).into();
        let c: BoxError = CommonError::Internal("bang".into()).into();
        let d: BoxError = CommonError::InvalidState("boom".into()).into();

        assert!(a == b);
        assert!(a != c);
        assert!(a != d);
    }

    #[test]
    fn test_downcast() {
        let err: BoxError = CommonError::Unsupported("fold".into()).into();
        assert!(err.is::<CommonError>());
        assert_eq!(
            err.downcast_ref::<CommonError>(),
            Some(&CommonError::Unsupported("fold".into()))
        );
        assert!(err.downcast_ref::<CoproductError>().is_none());
    }

    #[test]
    fn test_custom_error_message() {
        let err = custom_error::CustomError::new(ErrorDomain::Coproduct, "COPRODUCT_CUSTOM", "custom failure")
            .with_details(serde_json::json!({ "attempt": 3 }));
        let message = err.to_message();

        assert_eq!(message.code, "COPRODUCT_CUSTOM");
        assert_eq!(message.domain, ErrorDomain::Coproduct);
        assert_eq!(message.message, "custom failure");
        assert_eq!(message.details, Some(serde_json::json!({ "attempt": 3 })));
    }

    #[test]
    fn test_error_message_serialization() {
        let message = CommonError::InvalidArgument("index 0".into()).to_message();
        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "code": "CORE_INVALID_ARGUMENT",
                "domain": "Core",
                "message": "Invalid argument: index 0",
            })
        );
    }
}
