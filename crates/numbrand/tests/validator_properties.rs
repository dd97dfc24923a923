//! Behavioural properties of the built-in validators.

use numbrand::prelude::*;
use pretty_assertions::assert_eq;
use proptest::num::f64 as float;
use proptest::prelude::*;
use rstest::rstest;

// ============================================================================
// RANGE
// ============================================================================

proptest! {
    #[test]
    fn in_range_accepts_inside(x in -100.0f64..=100.0) {
        let n = in_range::<-100, 100>().validate(x).unwrap();
        prop_assert_eq!(n.get().to_bits(), x.to_bits());
    }

    #[test]
    fn in_range_rejects_outside(x in prop_oneof![-1e9f64..-100.5, 100.5f64..1e9]) {
        let err = in_range::<-100, 100>().validate(x).unwrap_err();
        prop_assert_eq!(err, NumberError::out_of_range(-100.0, 100.0, x));
    }
}

#[rstest]
#[case(1.0)]
#[case(3.0)]
#[case(5.0)]
fn in_range_inclusive_bounds(#[case] x: f64) {
    assert_eq!(in_range::<1, 5>().validate(x).unwrap(), x);
}

// ============================================================================
// INTEGER
// ============================================================================

proptest! {
    #[test]
    fn integer_accepts_integers(n in -1_000_000_000i64..1_000_000_000) {
        let x = n as f64;
        prop_assert_eq!(integer().validate(x).unwrap(), x);
    }

    #[test]
    fn integer_rejects_fractions(n in -1_000_000i64..1_000_000, frac in 0.01f64..0.99) {
        let x = n as f64 + frac;
        prop_assert_eq!(integer().check(x), Err(NumberError::Integer { value: x }));
    }
}

#[rstest]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
#[case(f64::NEG_INFINITY)]
fn non_finite_is_not_an_integer_error(#[case] x: f64) {
    assert_eq!(
        integer().check(x).unwrap_err().kind(),
        NumberErrorKind::NotFinite
    );
}

// ============================================================================
// SIGN AND ZERO
// ============================================================================

#[test]
fn zero_is_positive() {
    assert_eq!(positive().validate(0.0).unwrap(), 0.0);
    assert_eq!(
        positive().check(-1.0),
        Err(NumberError::Negative { value: -1.0 })
    );
}

#[rstest]
#[case(0.0)]
#[case(-0.0)]
fn both_zeros_are_rejected(#[case] x: f64) {
    assert_eq!(
        non_zero().check(x).unwrap_err().kind(),
        NumberErrorKind::Zero
    );
}

proptest! {
    #[test]
    fn non_zero_accepts_everything_else(x in any::<f64>().prop_filter("non-zero", |x| *x != 0.0)) {
        let n = non_zero().validate(x).unwrap();
        prop_assert_eq!(n.get().to_bits(), x.to_bits());
    }

    #[test]
    fn finite_accepts_finite(x in float::NORMAL | float::SUBNORMAL | float::ZERO) {
        prop_assert!(finite().validate(x).is_ok());
    }
}

#[rstest]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
#[case(f64::NEG_INFINITY)]
fn finite_rejects_non_finite(#[case] x: f64) {
    assert_eq!(
        finite().check(x).unwrap_err().kind(),
        NumberErrorKind::NotFinite
    );
}

// ============================================================================
// NATURAL
// ============================================================================

proptest! {
    #[test]
    fn natural_iff_non_negative_integer(x in -1000.0f64..1000.0) {
        let expected = x >= 0.0 && x.fract() == 0.0;
        prop_assert_eq!(natural().check(x).is_ok(), expected);
    }

    #[test]
    fn natural_rounds_are_accepted(n in 0u32..1_000_000) {
        prop_assert!(natural().validate(f64::from(n)).is_ok());
    }
}

#[rstest]
#[case(-3.0, NumberErrorKind::Negative)]
#[case(-0.5, NumberErrorKind::Negative)]
#[case(2.5, NumberErrorKind::Integer)]
#[case(f64::INFINITY, NumberErrorKind::NotFinite)]
fn natural_failure_kinds(#[case] x: f64, #[case] kind: NumberErrorKind) {
    assert_eq!(natural().check(x).unwrap_err().kind(), kind);
}

// ============================================================================
// IDEMPOTENCY: a validated value validates again
// ============================================================================

proptest! {
    #[test]
    fn revalidation_is_identity(x in -50.0f64..50.0) {
        if let Ok(n) = natural().validate(x) {
            let again = natural().validate(n).unwrap();
            prop_assert_eq!(again, n);
        }
    }
}
