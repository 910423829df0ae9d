//! Property-based tests for the kernel types
//!
//! These tests use the proptest crate to check the invariants of coproducts,
//! `Maybe`, `Try` and the equality protocol over generated inputs.

use std::any::Any;
use std::cell::Cell;

use coprod_types::prelude::*;
use coprod_types::{fast_equals, fast_equals_any, structurally_equals};
use proptest::prelude::*;

/// Strategy for generating two-branch coproducts
fn coproduct_strategy() -> impl Strategy<Value = Coproduct2<i64, String>> {
    prop_oneof![
        any::<i64>().prop_map(Coproduct2::First),
        ".{0,8}".prop_map(Coproduct2::Second),
    ]
}

/// Strategy for generating optional values
fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    proptest::option::of(any::<i32>()).prop_map(Maybe::from_nullable)
}

/// Strategy for generating outcomes with a string failure
fn try_strategy() -> impl Strategy<Value = Try<u16, String>> {
    prop_oneof![
        any::<u16>().prop_map(Try::success),
        "[a-z]{1,6}".prop_map(Try::exception),
    ]
}

proptest! {
    /// Exactly one branch is active and only its projection is present
    #[test]
    fn test_coproduct_exclusivity(c in coproduct_strategy()) {
        let active: Vec<usize> = (1..=Coproduct2::<i64, String>::ARITY)
            .filter(|&i| c.is_nth(i).unwrap())
            .collect();
        prop_assert_eq!(active.len(), 1);
        prop_assert_eq!(active[0], c.discriminator());

        for index in 1..=2 {
            let projected = c.nth_or_none(index).unwrap();
            prop_assert_eq!(projected.non_empty(), index == c.discriminator());
        }
        prop_assert_eq!(c.first().non_empty(), c.is_first());
        prop_assert_eq!(c.second().non_empty(), c.is_second());
        prop_assert!(c.is_first() != c.is_second());
    }

    /// Indices outside the arity are always rejected
    #[test]
    fn test_out_of_range_index_rejected(c in coproduct_strategy(), index in 3usize..1000) {
        prop_assert!(c.is_nth(index).is_err());
        prop_assert!(c.nth_or_none(index).is_err());
        prop_assert!(c.is_nth(0).is_err());
    }

    /// A present value is returned without running the fallback
    #[test]
    fn test_maybe_round_trip(v in any::<i64>()) {
        let calls = Cell::new(0);
        let result = Maybe::some(v).get_or_else(|| {
            calls.set(calls.get() + 1);
            0
        });
        prop_assert_eq!(result, v);
        prop_assert_eq!(calls.get(), 0);
    }

    /// An absent value runs the fallback exactly once
    #[test]
    fn test_maybe_fallback_runs_once(fallback in any::<i64>()) {
        let calls = Cell::new(0);
        let result = Maybe::<i64>::none().get_or_else(|| {
            calls.set(calls.get() + 1);
            fallback
        });
        prop_assert_eq!(result, fallback);
        prop_assert_eq!(calls.get(), 1);
    }

    /// Present values are equal iff their payloads are; present never equals absent
    #[test]
    fn test_maybe_equality(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(Maybe::some(a) == Maybe::some(b), a == b);
        prop_assert!(Maybe::some(a) != Maybe::none());
        prop_assert!(Maybe::<i32>::none() == Maybe::none());
    }

    /// Equality of generated values agrees with equality of their std options
    #[test]
    fn test_maybe_equality_matches_option(a in maybe_strategy(), b in maybe_strategy()) {
        prop_assert_eq!(a == b, a.into_option() == b.into_option());
    }

    /// Success and exception flags are always complementary
    #[test]
    fn test_try_complementarity(t in try_strategy()) {
        prop_assert!(t.is_success() != t.is_exception());
        prop_assert_eq!(t.as_success().is_empty(), t.is_exception());
        prop_assert_eq!(t.as_exception().is_empty(), t.is_success());
    }

    /// Fast equality never contradicts structural equality
    #[test]
    fn test_fast_equals_is_sound(a in coproduct_strategy(), b in coproduct_strategy()) {
        let structural = a == b;
        match fast_equals(Some(&a), Some(&b)) {
            FastEquality::Equal => { prop_assert!(structural); }
            FastEquality::Unequal => { prop_assert!(!structural); }
            FastEquality::Undetermined => {}
        }
        prop_assert_eq!(fast_equals(Some(&a), Some(&a)), FastEquality::Equal);
        prop_assert_eq!(fast_equals(Some(&a), None), FastEquality::Unequal);
        prop_assert_eq!(fast_equals(Some(&a), Some(&b)), FastEquality::Undetermined);
        prop_assert_eq!(structurally_equals(Some(&a), Some(&b)), structural);
    }

    /// The untyped path rejects other types and defers on same-typed values
    #[test]
    fn test_fast_equals_any_type_check(a in any::<i32>(), b in any::<i32>()) {
        let other_type = b as i64;
        prop_assert_eq!(
            fast_equals_any(Some(&a), Some(&other_type as &dyn Any)),
            FastEquality::Unequal
        );
        prop_assert_eq!(
            fast_equals_any(Some(&a), Some(&b as &dyn Any)),
            FastEquality::Undetermined
        );
    }
}
