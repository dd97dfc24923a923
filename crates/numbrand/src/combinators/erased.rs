//! Brand erasure

use crate::foundation::sealed::Sealed;
use crate::foundation::{NumberError, Unbranded, Validate};

/// Runs the inner validator but proves no brand.
///
/// Validators with different brands are different types; erasing them
/// lets them share a `Vec` or a `dyn Validate<Brand = Unbranded>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Erased<V> {
    inner: V,
}

impl<V> Erased<V> {
    /// Wraps `inner`.
    pub const fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns the wrapped validator, brand intact.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Sealed for Erased<V> {}

impl<V: Validate> Validate for Erased<V> {
    type Brand = Unbranded;

    #[inline]
    fn check(&self, value: f64) -> Result<(), NumberError> {
        self.inner.check(value)
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}
