//! Equality protocol
//!
//! Cheap checks that decide equality without looking at the contents of two
//! values, plus the full structural comparison that falls back on `PartialEq`
//! when the cheap checks cannot decide. Every kernel type implements its
//! `PartialEq` by calling [`fast_equals`] first.
//!
//! An absent operand is written `None`. Two absent operands are equal, one
//! absent operand never equals a present one.
//!
//! The `*_any` variants take the second operand untyped, for callers that
//! compare values of heterogeneous types. They add a runtime type check: a
//! second operand of a different concrete type is unequal.

use std::any::Any;
use std::ptr;

use crate::maybe::Maybe;

/// Outcome of the cheap equality checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FastEquality {
    /// The operands are certainly equal.
    Equal,
    /// The operands are certainly not equal.
    Unequal,
    /// Both operands are present and of the same type; only a structural
    /// comparison can decide.
    Undetermined,
}

impl FastEquality {
    pub fn is_determined(self) -> bool {
        !matches!(self, FastEquality::Undetermined)
    }

    /// The decided answer, absent when undetermined.
    pub fn determined(self) -> Maybe<bool> {
        match self {
            FastEquality::Equal => Maybe::some(true),
            FastEquality::Unequal => Maybe::some(false),
            FastEquality::Undetermined => Maybe::none(),
        }
    }

    /// The decided answer, or the result of `structural` when undetermined.
    pub fn resolve(self, structural: impl FnOnce() -> bool) -> bool {
        self.determined().get_or_else(structural)
    }
}

impl From<bool> for FastEquality {
    fn from(equal: bool) -> Self {
        if equal {
            FastEquality::Equal
        } else {
            FastEquality::Unequal
        }
    }
}

//-----------------------------------------------------------------------------
// Typed operands
//-----------------------------------------------------------------------------

/// Whether both operands are the same object, or both absent.
pub fn referentially_equals<T: ?Sized>(o1: Option<&T>, o2: Option<&T>) -> bool {
    match (o1, o2) {
        (None, None) => true,
        (Some(a), Some(b)) => ptr::eq(a, b),
        _ => false,
    }
}

/// Decides equality from identity and absence alone, if possible.
pub fn fast_equals<T: ?Sized>(o1: Option<&T>, o2: Option<&T>) -> FastEquality {
    if referentially_equals(o1, o2) {
        return FastEquality::Equal;
    }
    match (o1, o2) {
        (Some(_), Some(_)) => FastEquality::Undetermined,
        _ => FastEquality::Unequal,
    }
}

/// [`fast_equals`], falling back on `PartialEq` when undetermined.
pub fn structurally_equals<T: ?Sized + PartialEq>(o1: Option<&T>, o2: Option<&T>) -> bool {
    fast_equals(o1, o2).resolve(|| o1 == o2)
}

//-----------------------------------------------------------------------------
// Untyped second operand
//-----------------------------------------------------------------------------

/// Whether both operands are the same object of the same concrete type, or both absent.
pub fn referentially_equals_any(o1: Option<&dyn Any>, o2: Option<&dyn Any>) -> bool {
    match (o1, o2) {
        (None, None) => true,
        // A struct and its first field can share an address.
        (Some(a), Some(b)) => ptr::addr_eq(a, b) && a.type_id() == b.type_id(),
        _ => false,
    }
}

/// Like [`fast_equals`], with `o2` checked to be a `T` at runtime.
pub fn fast_equals_any<T: Any>(o1: Option<&T>, o2: Option<&dyn Any>) -> FastEquality {
    if referentially_equals_any(o1.map(|v| v as &dyn Any), o2) {
        return FastEquality::Equal;
    }
    match (o1, o2) {
        (Some(_), Some(b)) if b.is::<T>() => FastEquality::Undetermined,
        _ => FastEquality::Unequal,
    }
}

/// [`fast_equals_any`], falling back on `PartialEq` when undetermined.
pub fn structurally_equals_any<T: Any + PartialEq>(o1: Option<&T>, o2: Option<&dyn Any>) -> bool {
    fast_equals_any(o1, o2).resolve(|| o1 == o2.and_then(|b| b.downcast_ref::<T>()))
}

//-----------------------------------------------------------------------------
// Method form
//-----------------------------------------------------------------------------

/// The equality protocol as methods on any value.
pub trait StructuralEquality {
    fn referentially_equals(&self, other: &Self) -> bool {
        referentially_equals(Some(self), Some(other))
    }

    fn fast_equals(&self, other: &Self) -> FastEquality {
        fast_equals(Some(self), Some(other))
    }

    fn structurally_equals(&self, other: &Self) -> bool
    where
        Self: PartialEq,
    {
        structurally_equals(Some(self), Some(other))
    }

    fn structurally_equals_any(&self, other: &dyn Any) -> bool
    where
        Self: Any + PartialEq + Sized,
    {
        structurally_equals_any(Some(self), Some(other))
    }
}

impl<T: ?Sized> StructuralEquality for T {}
