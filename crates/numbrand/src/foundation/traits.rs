//! Core traits for the validation system
//!
//! This module defines the trait every numeric validator implements and the
//! extension trait that composes them.

use tracing::Level;

use crate::foundation::brand::{BrandSet, Merge, Merged};
use crate::foundation::branded::{Branded, Number};
use crate::foundation::error::NumberError;
use crate::foundation::sealed::Sealed;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait every numeric validator implements.
///
/// A validator recognizes exactly one invariant (or, for combinators, the
/// conjunction of its members) and names the brand it proves through
/// [`Validate::Brand`].
///
/// The trait is sealed: a validator that could be implemented outside this
/// crate could claim any brand without checking it.
///
/// # Examples
///
/// ```rust
/// use numbrand::prelude::*;
///
/// let n: PositiveNumber = positive().validate(2.0)?;
/// assert_eq!(n, 2.0);
///
/// // brands already on the input are kept
/// let both = non_zero().validate(n)?;
/// # let _ = both;
/// # Ok::<(), NumberError>(())
/// ```
pub trait Validate: Sealed {
    /// The brand set a successful validation proves.
    type Brand: BrandSet;

    /// Checks the raw value without producing a brand.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the invariant holds
    /// * `Err(NumberError)` describing the first violation otherwise
    fn check(&self, value: f64) -> Result<(), NumberError>;

    /// Validates `value` and returns it with [`Self::Brand`] added to the
    /// brands it already carries.
    ///
    /// The numeric value is returned unchanged; nothing is rounded or
    /// clamped.
    #[inline]
    fn validate<N>(&self, value: N) -> Result<Branded<Merged<N::Brands, Self::Brand>>, NumberError>
    where
        Self: Sized,
        N: Number,
        N::Brands: Merge<Self::Brand>,
    {
        let raw = value.get();
        self.check(raw)?;
        Ok(Branded::new_unchecked(raw))
    }

    /// Returns the name of this validator.
    ///
    /// Used for debugging and log events.
    fn name(&self) -> &'static str {
        let full = std::any::type_name::<Self>();
        let base = full.split('<').next().unwrap_or(full);
        base.rsplit("::").next().unwrap_or(base)
    }
}

impl<V: Validate + ?Sized> Sealed for &V {}

impl<V: Validate + ?Sized> Validate for &V {
    type Brand = V::Brand;

    #[inline]
    fn check(&self, value: f64) -> Result<(), NumberError> {
        (**self).check(value)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<V: Validate + ?Sized> Sealed for Box<V> {}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Brand = V::Brand;

    #[inline]
    fn check(&self, value: f64) -> Result<(), NumberError> {
        (**self).check(value)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every [`Validate`] type.
///
/// # Examples
///
/// ```rust
/// use numbrand::prelude::*;
///
/// let rating = integer().and(in_range::<1, 5>());
/// assert!(rating.validate(3.0).is_ok());
/// assert!(rating.validate(2.5).is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Both validators must pass. Short-circuits on the first failure, and
    /// the result carries the brands of both.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numbrand::prelude::*;
    ///
    /// let divisor = finite().and(non_zero());
    /// assert!(divisor.validate(2.0).is_ok());
    /// assert!(divisor.validate(0.0).is_err());
    /// ```
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate,
        Self::Brand: Merge<V::Brand>,
    {
        And::new(self, other)
    }

    /// Emits a `tracing` event at `level` whenever validation fails.
    ///
    /// The brand is unchanged.
    fn logged(self, level: Level) -> Logged<Self> {
        Logged::new(self, level)
    }

    /// Forgets the brand, so validators of different brands fit in one
    /// collection. The check itself is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numbrand::prelude::*;
    ///
    /// let checks = and_all(vec![
    ///     Box::new(positive().erased()) as Box<dyn Validate<Brand = Unbranded>>,
    ///     Box::new(in_range::<0, 10>().erased()),
    /// ]);
    /// assert!(checks.check(3.0).is_ok());
    /// assert!(checks.check(11.0).is_err());
    /// ```
    fn erased(self) -> Erased<Self> {
        Erased::new(self)
    }
}

// Automatically implement ValidateExt for all Validate implementations
impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::and::And;
pub use crate::combinators::erased::Erased;
pub use crate::combinators::logged::Logged;
