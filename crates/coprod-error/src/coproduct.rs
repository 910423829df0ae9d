// Coproduct-specific error types
// Raised only through the untyped (index based) access path of a coproduct

use thiserror::Error;
use crate::{BoxError, ErrorDomain, KernelError};
use std::any::Any;

/// Coproduct error codes
pub mod codes {
    pub const INDEX_OUT_OF_RANGE: &str = "COPRODUCT_INDEX_OUT_OF_RANGE";
}

/// Errors raised when a coproduct is addressed by branch index
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoproductError {
    /// A branch index outside `1..=arity` was requested
    #[error("Invalid argument: branch index {index} is out of range for a coproduct of arity {arity}")]
    IndexOutOfRange { index: usize, arity: usize },
}

impl KernelError for CoproductError {
    fn error_code(&self) -> &'static str {
        match self {
            CoproductError::IndexOutOfRange { .. } => codes::INDEX_OUT_OF_RANGE,
        }
    }

    fn domain(&self) -> ErrorDomain {
        ErrorDomain::Coproduct
    }

    fn as_any(&self) -> &dyn Any { self }
}

/// Convenient Result type for coproduct operations
pub type CoproductResult<T> = Result<T, CoproductError>;

impl From<CoproductError> for BoxError {
    fn from(err: CoproductError) -> Self {
        Box::new(err)
    }
}

impl CoproductError {
    /// Create a new out-of-range error
    pub fn index_out_of_range(index: usize, arity: usize) -> Self {
        CoproductError::IndexOutOfRange { index, arity }
    }
}
