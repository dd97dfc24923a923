//! Macros for declaring validators and composing them.
//!
//! # Available Macros
//!
//! - `validator!`: declare a validator (struct + sealed `Validate` impl + factory fn).
//!   Crate-internal: outside code cannot mint brands.
//! - [`compose!`]: AND-chain any number of validators

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Declares a zero-sized validator proving `$brand`.
///
/// `#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]` is always
/// applied.
///
/// # Variants
///
/// **Predicate** (`rule` is the pass condition, `error` builds the failure):
/// ```rust,ignore
/// validator! {
///     pub NonZero => NonZeroBrand;
///     rule(value) { value != 0.0 }
///     error(value) { NumberError::Zero { value } }
///     fn non_zero();
/// }
/// ```
///
/// **Full check body** (for validators with preconditions):
/// ```rust,ignore
/// validator! {
///     pub Integer => IntegerBrand;
///     check(value) {
///         Finite.check(value)?;
///         ...
///     }
///     fn integer();
/// }
/// ```
///
/// **Const-generic bounds**:
/// ```rust,ignore
/// validator! {
///     pub InRange<const MIN: i64, const MAX: i64> => RangeBrand<MIN, MAX>;
///     check(self, value) { ... }
///     fn in_range();
/// }
/// ```
macro_rules! validator {
    // ── Variant 1: predicate + factory fn ────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident => $brand:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::macros::validator! {
            $(#[$meta])*
            $vis $name => $brand;
            check($inp) {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
            fn $factory();
        }
    };

    // ── Variant 2: full check body + factory fn ──────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident => $brand:ty;
        check($inp:ident) $body:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::sealed::Sealed for $name {}

        impl $crate::foundation::Validate for $name {
            type Brand = $brand;

            #[inline]
            fn check(&self, $inp: f64) -> Result<(), $crate::foundation::NumberError> $body
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 3: const-generic bounds + full check body + factory fn ───
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$(const $param:ident: $pty:ty),+ $(,)?> => $brand:ty;
        check($self_:ident, $inp:ident) $body:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name<$(const $param: $pty),+>;

        impl<$(const $param: $pty),+> $crate::foundation::sealed::Sealed for $name<$($param),+> {}

        impl<$(const $param: $pty),+> $crate::foundation::Validate for $name<$($param),+> {
            type Brand = $brand;

            #[inline]
            fn check(&$self_, $inp: f64) -> Result<(), $crate::foundation::NumberError> $body
        }

        #[must_use]
        $vis const fn $factory<$(const $param: $pty),+>() -> $name<$($param),+> { $name }
    };
}

pub(crate) use validator;

// ============================================================================
// COMPOSE MACRO
// ============================================================================

/// Composes any number of validators using AND logic.
///
/// Validators run left to right and stop at the first failure; the result
/// carries the brands of every member.
///
/// ```rust
/// use numbrand::prelude::*;
///
/// let v = compose![finite(), non_zero(), positive(), in_range::<1, 9>()];
/// assert!(v.validate(4.0).is_ok());
/// assert_eq!(v.validate(0.0).unwrap_err().kind(), NumberErrorKind::Zero);
/// ```
#[macro_export]
macro_rules! compose {
    (@chain $only:expr) => {
        $only
    };
    (@chain $head:expr, $($tail:expr),+) => {
        $crate::foundation::ValidateExt::and($head, $crate::compose!(@chain $($tail),+))
    };
    ($first:expr $(,)?) => {
        $crate::combinators::compose($first)
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::combinators::compose(
            $crate::foundation::ValidateExt::and($first, $crate::compose!(@chain $($rest),+))
        )
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::foundation::{FiniteBrand, NumberError, Validate};

    validator! {
        /// Accepts values strictly above one.
        TestAboveOne => FiniteBrand;
        rule(value) { value > 1.0 }
        error(value) { NumberError::out_of_range(1.0, f64::INFINITY, value) }
        fn test_above_one();
    }

    validator! {
        TestAtMost<const MAX: i64> => FiniteBrand;
        check(self, value) {
            if value <= MAX as f64 {
                Ok(())
            } else {
                Err(NumberError::out_of_range(
                    f64::NEG_INFINITY,
                    MAX as f64,
                    value,
                ))
            }
        }
        fn test_at_most();
    }

    #[test]
    fn test_predicate_validator() {
        assert!(TestAboveOne.check(2.0).is_ok());
        assert!(test_above_one().check(1.0).is_err());
    }

    #[test]
    fn test_const_generic_validator() {
        let v = test_at_most::<3>();
        assert!(v.check(3.0).is_ok());
        assert_eq!(
            v.check(4.0),
            Err(NumberError::out_of_range(f64::NEG_INFINITY, 3.0, 4.0))
        );
    }

    #[test]
    fn test_compose_single() {
        let v = compose![test_above_one()];
        assert!(v.validate(1.5).is_ok());
    }

    #[test]
    fn test_compose_macro_short_circuits() {
        use std::cell::Cell;

        use crate::combinators::testing::{Counting, counts};

        let calls: [Cell<usize>; 5] = Default::default();
        let v = compose![
            Counting::passing(&calls[0]),
            Counting::below(&calls[1], 10.0),
            Counting::passing(&calls[2]),
            Counting::passing(&calls[3]),
            Counting::passing(&calls[4]),
        ];

        assert!(v.check(5.0).is_err());
        assert_eq!(counts(&calls), vec![1, 1, 0, 0, 0]);

        assert!(v.check(20.0).is_ok());
        assert_eq!(counts(&calls), vec![2, 2, 1, 1, 1]);
    }

    #[test]
    fn test_compose_chain_order() {
        use crate::validators::{non_zero, positive};
        let v = compose![positive(), non_zero(), test_above_one()];
        assert_eq!(v.check(-1.0), Err(NumberError::Negative { value: -1.0 }));
        assert_eq!(v.check(0.0), Err(NumberError::Zero { value: 0.0 }));
        assert!(v.check(0.5).is_err());
        assert!(v.check(2.0).is_ok());
    }
}
