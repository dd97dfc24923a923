//! AND combinator - logical conjunction of validators
//!
//! [`And`] runs two validators left to right and proves both brands.
//! [`AndAll`] runs a runtime list of validators.
//!
//! # Examples
//!
//! ```rust
//! use numbrand::prelude::*;
//!
//! let rating = And::new(integer(), in_range::<1, 5>());
//! assert!(rating.validate(3.0).is_ok());
//! assert!(rating.validate(2.5).is_err()); // fails integer
//! assert!(rating.validate(9.0).is_err()); // fails in_range
//! ```

use crate::foundation::sealed::Sealed;
use crate::foundation::{Merge, Merged, NumberError, Unbranded, Validate};

/// Combines two validators with logical AND.
///
/// Both validators must pass for the combined validator to succeed.
/// The right validator is never invoked when the left one fails, and the
/// left error is returned unchanged.
///
/// # Type Parameters
///
/// * `L` - The left (first) validator type
/// * `R` - The right (second) validator type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct And<L, R> {
    /// The left (first) validator.
    pub(crate) left: L,
    /// The right (second) validator.
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    ///
    /// # Arguments
    ///
    /// * `left` - The first validator to apply
    /// * `right` - The second validator to apply
    pub const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Sealed for And<L, R> {}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate,
    L::Brand: Merge<R::Brand>,
{
    type Brand = Merged<L::Brand, R::Brand>;

    #[inline]
    fn check(&self, value: f64) -> Result<(), NumberError> {
        self.left.check(value)?;
        self.right.check(value)
    }
}

/// Creates an `And` combinator from two validators.
///
/// # Examples
///
/// ```rust
/// use numbrand::combinators::and;
/// use numbrand::prelude::*;
///
/// let divisor = and(finite(), non_zero());
/// assert!(divisor.validate(0.5).is_ok());
/// ```
pub const fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate,
    L::Brand: Merge<R::Brand>,
{
    And::new(left, right)
}

/// Creates an `AndAll` combinator from a vector of validators.
///
/// This is useful when the number of validators is only known at runtime.
/// Mix validators of different brands with
/// [`ValidateExt::erased`](crate::foundation::ValidateExt::erased).
///
/// # Examples
///
/// ```rust
/// use numbrand::prelude::*;
///
/// let bounds = and_all(vec![in_range::<0, 100>(), in_range::<0, 100>()]);
/// assert!(bounds.check(50.0).is_ok());
/// assert!(bounds.check(150.0).is_err());
/// ```
#[must_use]
pub fn and_all<V>(validators: Vec<V>) -> AndAll<V>
where
    V: Validate,
{
    AndAll { validators }
}

/// Combines a runtime list of validators with logical AND.
///
/// Validation stops at the first failure (short-circuits). The list may be
/// empty, in which case every value passes, so no brand is proven.
///
/// # Type Parameters
///
/// * `V` - The validator type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AndAll<V> {
    validators: Vec<V>,
}

impl<V> AndAll<V> {
    /// Number of validators in the list.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// The validators, in the order they run.
    pub fn validators(&self) -> &[V] {
        &self.validators
    }
}

impl<V> Sealed for AndAll<V> {}

impl<V> Validate for AndAll<V>
where
    V: Validate,
{
    type Brand = Unbranded;

    fn check(&self, value: f64) -> Result<(), NumberError> {
        for (stage, validator) in self.validators.iter().enumerate() {
            if let Err(error) = validator.check(value) {
                tracing::trace!(
                    stage,
                    validator = validator.name(),
                    code = error.code(),
                    value,
                    "validation chain short-circuited"
                );
                return Err(error);
            }
        }
        Ok(())
    }
}
