//! Fixed-arity composition
//!
//! [`compose`] takes one validator or a tuple of up to four and returns a
//! single reusable validator. Members run in order; the first failure is
//! returned unchanged and later members are never invoked. On success the
//! value carries the brands of every member.
//!
//! For more than four validators use the [`compose!`](crate::compose)
//! macro, which nests [`And`](crate::combinators::And) to any depth.

use crate::foundation::sealed::Sealed;
use crate::foundation::{Merge, Merged, NumberError, Validate};

/// A composed validator.
///
/// # Examples
///
/// ```rust
/// use numbrand::prelude::*;
///
/// let rating = compose((integer(), in_range::<1, 5>()));
///
/// let r: Intersect<IntegerNumber, NumberInRange<1, 5>> = rating.validate(3.0)?;
/// assert_eq!(r, 3.0);
/// assert_eq!(rating.validate(10.0).unwrap_err().kind(), NumberErrorKind::Range);
/// assert_eq!(rating.validate(2.5).unwrap_err().kind(), NumberErrorKind::Integer);
/// # Ok::<(), NumberError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Composed<V> {
    inner: V,
}

impl<V> Composed<V> {
    /// Returns a reference to the composed validators.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the composed validators.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Sealed for Composed<V> {}

impl<V: Validate> Validate for Composed<V> {
    type Brand = V::Brand;

    #[inline]
    fn check(&self, value: f64) -> Result<(), NumberError> {
        self.inner.check(value)
    }

    fn name(&self) -> &'static str {
        "Composed"
    }
}

/// Composes validators into one.
///
/// Accepts a single validator, or a tuple of one to four validators.
/// Composing two range validators with different bounds does not compile.
///
/// ```compile_fail
/// use numbrand::prelude::*;
///
/// let v = compose((in_range::<1, 5>(), in_range::<0, 10>()));
/// let _ = v.validate(3.0);
/// ```
#[must_use]
pub const fn compose<V: Validate>(validators: V) -> Composed<V> {
    Composed { inner: validators }
}

/// Runs one member, tracing the stage that short-circuits the chain.
#[inline]
fn stage<V: Validate>(index: usize, validator: &V, value: f64) -> Result<(), NumberError> {
    validator.check(value).inspect_err(|error| {
        tracing::trace!(
            stage = index,
            validator = validator.name(),
            code = error.code(),
            value,
            "composition short-circuited"
        );
    })
}

impl<A> Sealed for (A,) {}

impl<A: Validate> Validate for (A,) {
    type Brand = A::Brand;

    fn check(&self, value: f64) -> Result<(), NumberError> {
        stage(0, &self.0, value)
    }
}

impl<A, B> Sealed for (A, B) {}

impl<A, B> Validate for (A, B)
where
    A: Validate,
    B: Validate,
    A::Brand: Merge<B::Brand>,
{
    type Brand = Merged<A::Brand, B::Brand>;

    fn check(&self, value: f64) -> Result<(), NumberError> {
        stage(0, &self.0, value)?;
        stage(1, &self.1, value)
    }
}

impl<A, B, C> Sealed for (A, B, C) {}

impl<A, B, C> Validate for (A, B, C)
where
    A: Validate,
    B: Validate,
    C: Validate,
    A::Brand: Merge<B::Brand>,
    Merged<A::Brand, B::Brand>: Merge<C::Brand>,
{
    type Brand = Merged<Merged<A::Brand, B::Brand>, C::Brand>;

    fn check(&self, value: f64) -> Result<(), NumberError> {
        stage(0, &self.0, value)?;
        stage(1, &self.1, value)?;
        stage(2, &self.2, value)
    }
}

impl<A, B, C, D> Sealed for (A, B, C, D) {}

impl<A, B, C, D> Validate for (A, B, C, D)
where
    A: Validate,
    B: Validate,
    C: Validate,
    D: Validate,
    A::Brand: Merge<B::Brand>,
    Merged<A::Brand, B::Brand>: Merge<C::Brand>,
    Merged<Merged<A::Brand, B::Brand>, C::Brand>: Merge<D::Brand>,
{
    type Brand = Merged<Merged<Merged<A::Brand, B::Brand>, C::Brand>, D::Brand>;

    fn check(&self, value: f64) -> Result<(), NumberError> {
        stage(0, &self.0, value)?;
        stage(1, &self.1, value)?;
        stage(2, &self.2, value)?;
        stage(3, &self.3, value)
    }
}
