//! Core value types for the coprod kernel
//!
//! The kernel is built from one closed sum type, [`Coproduct2`], and two
//! specializations on top of it:
//!
//! - [`Maybe`]: presence or absence of a value, without a sentinel of the
//!   payload's own type.
//! - [`Try`]: the outcome of a fallible operation. `Try<S>` fixes the failure
//!   payload to the ambient [`BoxError`](coprod_error::BoxError).
//!
//! Equality of every kernel type goes through the protocol in [`equality`]:
//! cheap identity and absence checks first, full structural comparison only
//! when those cannot decide.

pub mod coproduct;
pub mod equality;
pub mod maybe;
pub mod try_;
pub mod utils;

// Re-exports
pub use coproduct::{AnyCoproduct, Coproduct, Coproduct2};
pub use equality::{
    fast_equals, fast_equals_any, referentially_equals, referentially_equals_any,
    structurally_equals, structurally_equals_any, FastEquality, StructuralEquality,
};
pub use maybe::{IntoMaybe, Maybe};
pub use try_::Try;
pub use utils::{safe_to_string, safe_to_string_or};

pub use coprod_error::{BoxError, CoproductError, CoproductResult};

/// Everything needed to work with the kernel types in one import.
pub mod prelude {
    pub use crate::coproduct::{AnyCoproduct, Coproduct, Coproduct2};
    pub use crate::equality::{FastEquality, StructuralEquality};
    pub use crate::maybe::{IntoMaybe, Maybe};
    pub use crate::try_::Try;
    pub use coprod_error::BoxError;
}
