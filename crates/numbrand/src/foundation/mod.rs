//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the crate:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`NumberError`], [`NumberErrorKind`]
//! - **Brands**: [`Branded`], [`Brands`], the flag and range markers
//!
//! # Architecture
//!
//! ## 1. Brands live in the type system
//!
//! A validated number is a [`Branded<B>`]: an `f64` plus a zero-sized brand
//! set `B`. Functions state their preconditions as bounds on `B`:
//!
//! ```rust
//! use numbrand::prelude::*;
//!
//! fn halve<B: BrandSet<Integer = Yes>>(n: Branded<B>) -> f64 {
//!     n.get() / 2.0
//! }
//!
//! assert_eq!(halve(integer().validate(8.0)?), 4.0);
//! # Ok::<(), NumberError>(())
//! ```
//!
//! ## 2. Composition
//!
//! Validators compose left to right, and the brands intersect:
//!
//! ```rust
//! use numbrand::prelude::*;
//!
//! let divisor = compose((finite(), non_zero()));
//! let d: Intersect<FiniteNumber, NonZeroNumber> = divisor.validate(4.0)?;
//! # let _ = d;
//! # Ok::<(), NumberError>(())
//! ```
//!
//! ## 3. Zero-cost brands
//!
//! `Branded<B>` is `#[repr(transparent)]` over `f64`; a brand costs nothing
//! to carry and is never inspected at runtime.

pub mod brand;
pub mod branded;
pub mod error;
pub mod traits;

pub(crate) mod sealed {
    /// Keeps brand-producing traits implementable only inside this crate.
    pub trait Sealed {}
}

// Re-export everything at the foundation level for convenience
pub use brand::{
    Bounded, Bounds, BoundsBrand, BrandSet, Brands, Covers, FiniteBrand, Flag, FlagOr, IntegerBrand,
    Merge, Merged, NaturalBrand, No, NonZeroBrand, PositiveBrand, RangeBrand, RangeMeet, RangeSlot,
    Satisfies, Unbounded, Unbranded, Within, Yes,
};
pub use branded::{
    Branded, FiniteNumber, IntegerNumber, Intersect, NaturalNumber, NonZeroNumber, Number,
    NumberInRange, NumberWithin, PositiveNumber, Unchecked,
};
pub use error::{ErrorParams, NumberError, NumberErrorKind, ValidationResult};
pub use traits::{Validate, ValidateExt};

// ============================================================================
// UTILITIES
// ============================================================================

/// Validates a value with a single validator.
///
/// This is a convenience function for one-off validations.
///
/// # Examples
///
/// ```rust
/// use numbrand::foundation::validate_value;
/// use numbrand::validators::positive;
///
/// assert!(validate_value(3.0, &positive()).is_ok());
/// ```
pub fn validate_value<V, N>(
    value: N,
    validator: &V,
) -> ValidationResult<Branded<Merged<N::Brands, V::Brand>>>
where
    V: Validate,
    N: Number,
    N::Brands: Merge<V::Brand>,
{
    validator.validate(value)
}

/// Runs every validator and collects all failures instead of stopping at
/// the first one.
///
/// No brand is produced; this is for reporting, e.g. telling a user every
/// reason an input was rejected.
///
/// Validators with different brands can be mixed through
/// [`ValidateExt::erased`].
///
/// # Examples
///
/// ```rust
/// use numbrand::prelude::*;
/// use numbrand::foundation::collect_errors;
///
/// let positive = positive().erased();
/// let integer = integer().erased();
/// let checks: [&dyn Validate<Brand = Unbranded>; 2] = [&positive, &integer];
///
/// let errors = collect_errors(-0.5, &checks);
/// assert_eq!(errors.len(), 2);
/// ```
pub fn collect_errors<V>(value: f64, validators: &[&V]) -> Vec<NumberError>
where
    V: Validate + ?Sized,
{
    validators
        .iter()
        .filter_map(|validator| validator.check(value).err())
        .collect()
}
