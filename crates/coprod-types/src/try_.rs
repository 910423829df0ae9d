//! Outcomes of fallible operations
//!
//! [`Try`] is a two-branch coproduct whose first branch is a success value and
//! whose second branch is a failure value. Failures are data: nothing in this
//! module raises a fault to report one, and there is no accessor that unwraps
//! the success value and panics on failure.
//!
//! `Try<S>` uses the ambient [`BoxError`] as its failure type, so ordinary
//! fallible code never has to name an error type.

use std::any::Any;
use std::hash::{Hash, Hasher};

use coprod_error::{BoxError, IntoBoxError};

use crate::coproduct::{AnyCoproduct, Coproduct, Coproduct2};
use crate::equality::fast_equals;
use crate::maybe::Maybe;

/// Either a success value `S` or a failure value `E`.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Try<S, E = BoxError>(Coproduct2<S, E>);

impl<S, E> Try<S, E> {
    /// A successful outcome.
    pub const fn success(value: S) -> Self {
        Try(Coproduct2::First(value))
    }

    /// A failed outcome.
    pub const fn exception(error: E) -> Self {
        Try(Coproduct2::Second(error))
    }

    pub fn from_result(result: Result<S, E>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::exception(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.0.is_first()
    }

    pub fn is_exception(&self) -> bool {
        self.0.is_second()
    }

    /// The success value, present iff the operation succeeded.
    pub fn as_success(&self) -> Maybe<&S> {
        self.0.first()
    }

    /// The failure value, present iff the operation failed.
    pub fn as_exception(&self) -> Maybe<&E> {
        self.0.second()
    }

    pub fn into_success(self) -> Maybe<S> {
        self.0.into_first()
    }

    pub fn into_exception(self) -> Maybe<E> {
        self.0.into_second()
    }

    pub fn into_result(self) -> Result<S, E> {
        self.0.fold(Ok, Err)
    }

    pub fn map<T>(self, f: impl FnOnce(S) -> T) -> Try<T, E> {
        Try(self.0.map_first(f))
    }

    pub fn map_exception<F>(self, f: impl FnOnce(E) -> F) -> Try<S, F> {
        Try(self.0.map_second(f))
    }

    /// Chains another fallible step onto a success; failures pass through.
    pub fn flat_map<T>(self, f: impl FnOnce(S) -> Try<T, E>) -> Try<T, E> {
        self.0.fold(f, Try::exception)
    }

    pub fn as_coproduct(&self) -> &Coproduct2<S, E> {
        &self.0
    }

    pub fn into_coproduct(self) -> Coproduct2<S, E> {
        self.0
    }
}

impl<S> Try<S> {
    /// Runs `operation`, capturing its failure as the ambient error.
    pub fn catch<X, F>(operation: F) -> Self
    where
        X: IntoBoxError,
        F: FnOnce() -> Result<S, X>,
    {
        match operation() {
            Ok(value) => Self::success(value),
            Err(error) => {
                let error = error.into_box_error();
                log::trace!("captured failure {}: {}", error.error_code(), error);
                Self::exception(error)
            }
        }
    }
}

impl<S, E> From<Result<S, E>> for Try<S, E> {
    fn from(result: Result<S, E>) -> Self {
        Self::from_result(result)
    }
}

impl<S, E> From<Try<S, E>> for Result<S, E> {
    fn from(value: Try<S, E>) -> Self {
        value.into_result()
    }
}

impl<S: PartialEq, E: PartialEq> PartialEq for Try<S, E> {
    fn eq(&self, other: &Self) -> bool {
        fast_equals(Some(self), Some(other)).resolve(|| self.0 == other.0)
    }
}

impl<S: Eq, E: Eq> Eq for Try<S, E> {}

impl<S: Hash, E: Hash> Hash for Try<S, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<S, E> Coproduct for Try<S, E> {
    const ARITY: usize = 2;

    fn discriminator(&self) -> usize {
        self.0.discriminator()
    }
}

impl<S: Any, E: Any> AnyCoproduct for Try<S, E> {
    fn value_any(&self) -> &dyn Any {
        self.0.value_any()
    }
}
