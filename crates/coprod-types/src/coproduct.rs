//! Closed sum types
//!
//! A coproduct holds exactly one of a fixed number of statically known
//! alternatives. Branches are addressed by 1-based index: the first branch is
//! index 1. The typed API (`is_first`, `first`, ...) can never name a branch
//! that does not exist. The index based API on [`Coproduct`] and
//! [`AnyCoproduct`] can, and reports such an index as
//! [`CoproductError::IndexOutOfRange`].

use std::any::Any;
use std::hash::{Hash, Hasher};

use coprod_error::{ensure, CoproductError, CoproductResult};

use crate::equality::fast_equals;
use crate::maybe::Maybe;

//-----------------------------------------------------------------------------
// Index based access
//-----------------------------------------------------------------------------

/// A coproduct of fixed arity, viewed through branch indices.
pub trait Coproduct {
    /// Number of branches.
    const ARITY: usize;

    /// 1-based index of the active branch.
    fn discriminator(&self) -> usize;

    /// Returns whether branch `index` is the active one.
    fn is_nth(&self, index: usize) -> CoproductResult<bool> {
        check_index(index, Self::ARITY)?;
        Ok(self.discriminator() == index)
    }
}

/// Untyped access to the stored value of a coproduct with `'static` branches.
pub trait AnyCoproduct: Coproduct {
    /// The stored value of the active branch.
    fn value_any(&self) -> &dyn Any;

    /// The stored value if branch `index` is active, absent otherwise.
    fn nth_or_none(&self, index: usize) -> CoproductResult<Maybe<&dyn Any>> {
        if self.is_nth(index)? {
            Ok(Maybe::some(self.value_any()))
        } else {
            Ok(Maybe::none())
        }
    }
}

pub(crate) fn check_index(index: usize, arity: usize) -> CoproductResult<()> {
    let in_range = (1..=arity).contains(&index);
    if !in_range {
        log::error!(
            "branch index {} is out of range for a coproduct of arity {}",
            index,
            arity
        );
    }
    ensure!(in_range, CoproductError::index_out_of_range(index, arity));
    Ok(())
}

//-----------------------------------------------------------------------------
// Coproduct2
//-----------------------------------------------------------------------------

/// Exactly one of two values: an `A` in the first branch or a `B` in the second.
///
/// The tag is fixed at construction. Reading the inactive branch yields an
/// absent [`Maybe`], never a fault.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Coproduct2<A, B> {
    /// First branch
    First(A),
    /// Second branch
    Second(B),
}

impl<A, B> Coproduct2<A, B> {
    /// Create a coproduct with the first branch active.
    pub const fn new_first(value: A) -> Self {
        Coproduct2::First(value)
    }

    /// Create a coproduct with the second branch active.
    pub const fn new_second(value: B) -> Self {
        Coproduct2::Second(value)
    }

    pub fn is_first(&self) -> bool {
        matches!(self, Coproduct2::First(_))
    }

    pub fn is_second(&self) -> bool {
        matches!(self, Coproduct2::Second(_))
    }

    /// The first value if the first branch is active.
    pub fn first(&self) -> Maybe<&A> {
        match self {
            Coproduct2::First(a) => Maybe::some(a),
            Coproduct2::Second(_) => Maybe::none(),
        }
    }

    /// The second value if the second branch is active.
    pub fn second(&self) -> Maybe<&B> {
        match self {
            Coproduct2::First(_) => Maybe::none(),
            Coproduct2::Second(b) => Maybe::some(b),
        }
    }

    pub fn into_first(self) -> Maybe<A> {
        match self {
            Coproduct2::First(a) => Maybe::some(a),
            Coproduct2::Second(_) => Maybe::none(),
        }
    }

    pub fn into_second(self) -> Maybe<B> {
        match self {
            Coproduct2::First(_) => Maybe::none(),
            Coproduct2::Second(b) => Maybe::some(b),
        }
    }

    /// Borrow the stored value, keeping the active branch.
    pub fn as_ref(&self) -> Coproduct2<&A, &B> {
        match self {
            Coproduct2::First(a) => Coproduct2::First(a),
            Coproduct2::Second(b) => Coproduct2::Second(b),
        }
    }

    /// Collapse the coproduct by applying the function matching the active branch.
    pub fn fold<R>(self, if_first: impl FnOnce(A) -> R, if_second: impl FnOnce(B) -> R) -> R {
        match self {
            Coproduct2::First(a) => if_first(a),
            Coproduct2::Second(b) => if_second(b),
        }
    }

    /// Transform the first value, leaving a second value untouched.
    pub fn map_first<C>(self, f: impl FnOnce(A) -> C) -> Coproduct2<C, B> {
        match self {
            Coproduct2::First(a) => Coproduct2::First(f(a)),
            Coproduct2::Second(b) => Coproduct2::Second(b),
        }
    }

    /// Transform the second value, leaving a first value untouched.
    pub fn map_second<C>(self, f: impl FnOnce(B) -> C) -> Coproduct2<A, C> {
        match self {
            Coproduct2::First(a) => Coproduct2::First(a),
            Coproduct2::Second(b) => Coproduct2::Second(f(b)),
        }
    }
}

impl<A, B> Coproduct for Coproduct2<A, B> {
    const ARITY: usize = 2;

    fn discriminator(&self) -> usize {
        match self {
            Coproduct2::First(_) => 1,
            Coproduct2::Second(_) => 2,
        }
    }
}

impl<A: Any, B: Any> AnyCoproduct for Coproduct2<A, B> {
    fn value_any(&self) -> &dyn Any {
        match self {
            Coproduct2::First(a) => a,
            Coproduct2::Second(b) => b,
        }
    }
}

// Identity is (discriminator, value).
impl<A: PartialEq, B: PartialEq> PartialEq for Coproduct2<A, B> {
    fn eq(&self, other: &Self) -> bool {
        fast_equals(Some(self), Some(other)).resolve(|| match (self, other) {
            (Coproduct2::First(a), Coproduct2::First(b)) => a == b,
            (Coproduct2::Second(a), Coproduct2::Second(b)) => a == b,
            _ => false,
        })
    }
}

impl<A: Eq, B: Eq> Eq for Coproduct2<A, B> {}

impl<A: Hash, B: Hash> Hash for Coproduct2<A, B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.discriminator().hash(state);
        match self {
            Coproduct2::First(a) => a.hash(state),
            Coproduct2::Second(b) => b.hash(state),
        }
    }
}
