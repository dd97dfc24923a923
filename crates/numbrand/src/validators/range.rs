//! Numeric range validator

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::sealed::Sealed;
use crate::foundation::{
    Bounded, Bounds, BoundsBrand, NumberError, RangeBrand, RangeSlot, Validate, Within,
};

crate::macros::validator! {
    /// Validates that a value is within the inclusive range `[MIN, MAX]`.
    ///
    /// The bounds are part of the type, so the brand it produces is specific
    /// to them: a value checked against `[1, 5]` is not accepted where
    /// `[1, 10]` is required. `MIN > MAX` fails to compile. The comparison
    /// is exact for every `i64` bound, including those an `f64` cannot
    /// represent. For fractional or infinite bounds see [`InBounds`].
    ///
    /// Only the two comparisons `value < MIN` and `value > MAX` reject, so
    /// `NaN` passes; compose with [`finite`](crate::validators::finite) to
    /// exclude it.
    ///
    /// # Examples
    ///
    /// ```
    /// use numbrand::validators::in_range;
    /// use numbrand::foundation::Validate;
    ///
    /// let validator = in_range::<1, 5>();
    /// assert!(validator.validate(1.0).is_ok());
    /// assert!(validator.validate(5.0).is_ok());
    /// assert!(validator.validate(5.5).is_err());
    /// ```
    pub InRange<const MIN: i64, const MAX: i64> => RangeBrand<MIN, MAX>;
    check(self, value) {
        if Bounded::<MIN, MAX>::contains(value) {
            return Ok(());
        }
        let (min, max) = self.bounds();
        Err(NumberError::out_of_range(min, max, value))
    }
    fn in_range();
}

impl<const MIN: i64, const MAX: i64> InRange<MIN, MAX> {
    /// The inclusive bounds as `f64`, rounded when `|bound| > 2^53`.
    #[must_use]
    pub const fn bounds(&self) -> (f64, f64) {
        (MIN as f64, MAX as f64)
    }
}

/// Validates that a value is within the inclusive `f64` bounds of `T`.
///
/// Like [`InRange`], but the bounds come from a [`Bounds`] marker type, so
/// they may be fractional or infinite. `NaN` passes.
///
/// # Examples
///
/// ```
/// use numbrand::prelude::*;
///
/// #[derive(Debug, Clone, Copy, Default)]
/// struct Gain;
///
/// impl Bounds for Gain {
///     const MIN: f64 = 0.5;
///     const MAX: f64 = 1.5;
/// }
///
/// let gain = in_bounds::<Gain>();
/// assert!(gain.validate(1.5).is_ok());
/// assert!(gain.validate(0.25).is_err());
/// ```
pub struct InBounds<T: Bounds> {
    _bounds: PhantomData<fn() -> T>,
}

impl<T: Bounds> InBounds<T> {
    /// Creates the validator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _bounds: PhantomData,
        }
    }

    /// The inclusive bounds.
    #[must_use]
    pub const fn bounds(&self) -> (f64, f64) {
        (T::MIN, T::MAX)
    }
}

impl<T: Bounds> Clone for InBounds<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Bounds> Copy for InBounds<T> {}

impl<T: Bounds> Default for InBounds<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Bounds> fmt::Debug for InBounds<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InBounds")
            .field("min", &T::MIN)
            .field("max", &T::MAX)
            .finish()
    }
}

impl<T: Bounds> Sealed for InBounds<T> {}

impl<T: Bounds> Validate for InBounds<T> {
    type Brand = BoundsBrand<T>;

    #[inline]
    fn check(&self, value: f64) -> Result<(), NumberError> {
        if Within::<T>::contains(value) {
            Ok(())
        } else {
            Err(NumberError::out_of_range(T::MIN, T::MAX, value))
        }
    }
}

/// Creates an [`InBounds`] validator.
#[must_use]
pub const fn in_bounds<T: Bounds>() -> InBounds<T> {
    InBounds::new()
}

// ============================================================================
// TESTS
// ============================================================================
