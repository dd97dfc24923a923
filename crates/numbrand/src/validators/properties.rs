//! Numeric property validators: sign, zero and integrality

use crate::combinators::and::And;
use crate::foundation::{IntegerBrand, NonZeroBrand, NumberError, PositiveBrand};
use crate::validators::float::Finite;

crate::macros::validator! {
    /// Validates that a number is finite and has no fractional part.
    ///
    /// `NaN` and the infinities are reported as
    /// [`NotFinite`](NumberError::NotFinite), not as integer errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use numbrand::validators::integer;
    /// use numbrand::foundation::Validate;
    ///
    /// assert!(integer().validate(-4.0).is_ok());
    /// assert!(integer().validate(4.5).is_err());
    /// ```
    pub Integer => IntegerBrand;
    check(value) {
        crate::foundation::Validate::check(&Finite, value)?;
        if value.fract() != 0.0 {
            return Err(NumberError::Integer { value });
        }
        Ok(())
    }
    fn integer();
}

crate::macros::validator! {
    /// Validates that a number is not negative. Zero is accepted.
    ///
    /// Only `value < 0` rejects, so `NaN` and `+inf` pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use numbrand::validators::positive;
    /// use numbrand::foundation::Validate;
    ///
    /// assert!(positive().validate(0.0).is_ok());
    /// assert!(positive().validate(-0.1).is_err());
    /// ```
    pub Positive => PositiveBrand;
    rule(value) { value >= 0.0 || value.is_nan() }
    error(value) { NumberError::Negative { value } }
    fn positive();
}

crate::macros::validator! {
    /// Validates that a number is not zero. Both `0.0` and `-0.0` reject.
    pub NonZero => NonZeroBrand;
    rule(value) { value != 0.0 }
    error(value) { NumberError::Zero { value } }
    fn non_zero();
}

/// A non-negative integer: [`Positive`] first, then [`Integer`].
pub type Natural = And<Positive, Integer>;

/// Creates a [`Natural`] validator.
///
/// # Examples
///
/// ```
/// use numbrand::prelude::*;
///
/// let n: NaturalNumber = natural().validate(3.0)?;
/// assert_eq!(natural().validate(-1.0).unwrap_err().kind(), NumberErrorKind::Negative);
/// assert_eq!(natural().validate(1.5).unwrap_err().kind(), NumberErrorKind::Integer);
/// # let _ = n;
/// # Ok::<(), NumberError>(())
/// ```
#[must_use]
pub const fn natural() -> Natural {
    And::new(Positive, Integer)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_integer() {
        assert!(integer().validate(0.0).is_ok());
        assert!(integer().validate(-7.0).is_ok());
        assert!(integer().validate(1e15).is_ok());
        assert_eq!(
            integer().validate(0.5).unwrap_err(),
            NumberError::Integer { value: 0.5 }
        );
    }

    #[test]
    fn test_integer_rejects_non_finite_first() {
        assert!(matches!(
            integer().check(f64::INFINITY),
            Err(NumberError::NotFinite { .. })
        ));
        assert!(matches!(
            integer().check(f64::NAN),
            Err(NumberError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_positive() {
        assert!(positive().validate(0.0).is_ok());
        assert!(positive().validate(-0.0).is_ok());
        assert!(positive().validate(f64::INFINITY).is_ok());
        assert!(positive().validate(f64::NAN).is_ok());
        assert_eq!(
            positive().validate(-2.0).unwrap_err(),
            NumberError::Negative { value: -2.0 }
        );
        assert!(positive().validate(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_non_zero() {
        assert!(non_zero().validate(1e-300).is_ok());
        assert!(non_zero().validate(f64::NAN).is_ok());
        assert!(non_zero().validate(0.0).is_err());
        assert_eq!(
            non_zero().check(-0.0),
            Err(NumberError::Zero { value: -0.0 })
        );
    }

    #[test]
    fn test_natural() {
        assert!(natural().validate(0.0).is_ok());
        assert!(natural().validate(42.0).is_ok());
        assert_eq!(
            natural().check(-1.0),
            Err(NumberError::Negative { value: -1.0 })
        );
        assert_eq!(
            natural().check(1.5),
            Err(NumberError::Integer { value: 1.5 })
        );
        assert!(matches!(
            natural().check(f64::INFINITY),
            Err(NumberError::NotFinite { .. })
        ));
    }
}
