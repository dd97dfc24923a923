//! Finiteness validator

use crate::foundation::{FiniteBrand, NumberError};

crate::macros::validator! {
    /// Validates that a number is neither `NaN` nor infinite.
    ///
    /// # Examples
    ///
    /// ```
    /// use numbrand::validators::finite;
    /// use numbrand::foundation::Validate;
    ///
    /// let validator = finite();
    /// assert!(validator.validate(1.5).is_ok());
    /// assert!(validator.validate(f64::NAN).is_err());
    /// assert!(validator.validate(f64::NEG_INFINITY).is_err());
    /// ```
    pub Finite => FiniteBrand;
    rule(value) { value.is_finite() }
    error(value) { NumberError::NotFinite { value } }
    fn finite();
}
