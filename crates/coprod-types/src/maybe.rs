//! Optional values
//!
//! [`Maybe`] is a two-branch coproduct: a present value, or absence carrying
//! nothing. It never uses a value of the payload type as a marker, so
//! `Maybe::some(0)` and `Maybe::some(Maybe::<i32>::none())` are both present.

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::coproduct::{AnyCoproduct, Coproduct, Coproduct2};
use crate::equality::fast_equals;

/// A value that may be absent.
///
/// With the `serde` feature it is written in the tagged form of its
/// coproduct, so a present value whose payload is itself absent stays present.
#[derive(Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Maybe<T>(Coproduct2<T, ()>);

impl<T> Maybe<T> {
    /// The absent value.
    pub const NONE: Self = Maybe(Coproduct2::Second(()));

    /// A present value.
    pub const fn some(value: T) -> Self {
        Maybe(Coproduct2::First(value))
    }

    /// The absent value.
    pub const fn none() -> Self {
        Self::NONE
    }

    /// Bridge from a nullable `Option`: `None` becomes absent, anything else present.
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::some(v),
            None => Self::NONE,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_second()
    }

    pub fn non_empty(&self) -> bool {
        self.0.is_first()
    }

    /// The payload, or the result of `fallback` when absent.
    ///
    /// `fallback` runs only when the value is absent, and then exactly once.
    pub fn get_or_else(self, fallback: impl FnOnce() -> T) -> T {
        match self.0 {
            Coproduct2::First(value) => value,
            Coproduct2::Second(()) => fallback(),
        }
    }

    pub fn get_or_default(self) -> T
    where
        T: Default,
    {
        self.get_or_else(T::default)
    }

    pub fn as_ref(&self) -> Maybe<&T> {
        Maybe(self.0.as_ref().map_second(|_| ()))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
        Maybe(self.0.map_first(f))
    }

    pub fn flat_map<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
        self.0.fold(f, |()| Maybe::none())
    }

    /// Keeps the value only if `predicate` holds for it.
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        match self.0 {
            Coproduct2::First(value) if predicate(&value) => Self::some(value),
            _ => Self::NONE,
        }
    }

    /// This value if present, otherwise the one produced by `alternative`.
    pub fn or_else(self, alternative: impl FnOnce() -> Maybe<T>) -> Self {
        if self.non_empty() {
            self
        } else {
            alternative()
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.0.fold(Some, |()| None)
    }

    pub fn as_option(&self) -> Option<&T> {
        self.as_ref().into_option()
    }

    /// The underlying two-branch coproduct.
    pub fn as_coproduct(&self) -> &Coproduct2<T, ()> {
        &self.0
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::NONE
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_nullable(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Coproduct2::First(value) => f.debug_tuple("Some").field(value).finish(),
            Coproduct2::Second(()) => f.write_str("None"),
        }
    }
}

impl<T: PartialEq> PartialEq for Maybe<T> {
    fn eq(&self, other: &Self) -> bool {
        fast_equals(Some(self), Some(other)).resolve(|| self.0 == other.0)
    }
}

impl<T: Eq> Eq for Maybe<T> {}

impl<T: Hash> Hash for Maybe<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> Coproduct for Maybe<T> {
    const ARITY: usize = 2;

    fn discriminator(&self) -> usize {
        self.0.discriminator()
    }
}

impl<T: Any> AnyCoproduct for Maybe<T> {
    fn value_any(&self) -> &dyn Any {
        self.0.value_any()
    }
}

/// Wrap any value as a present [`Maybe`].
pub trait IntoMaybe: Sized {
    fn into_maybe(self) -> Maybe<Self> {
        Maybe::some(self)
    }
}

impl<T> IntoMaybe for T {}
