//! Prelude module for convenient imports.
//!
//! Provides a single `use numbrand::prelude::*;` import that brings in the
//! traits, branded types, validators and combinators.
//!
//! # Examples
//!
//! ```rust
//! use numbrand::prelude::*;
//!
//! let rating = compose((integer(), in_range::<1, 5>()));
//! let divisor = finite().and(non_zero());
//! # let _ = (rating, divisor);
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, brands
// ============================================================================

pub use crate::foundation::{
    Bounds, BoundsBrand, BrandSet, Branded, FiniteBrand, FiniteNumber, IntegerBrand, IntegerNumber,
    Intersect, NaturalBrand, NaturalNumber, No, NonZeroBrand, NonZeroNumber, NumberError,
    NumberErrorKind, NumberInRange, NumberWithin, PositiveBrand, PositiveNumber, RangeBrand,
    Unbranded, Unchecked, Validate, ValidateExt, ValidationResult, Yes,
};

// ============================================================================
// VALIDATORS
// ============================================================================

pub use crate::validators::{
    Finite, InBounds, InRange, Integer, Natural, NonZero, Positive, finite, in_bounds, in_range,
    integer, natural, non_zero, positive,
};

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{And, AndAll, Composed, Erased, Logged, and_all, compose};
pub use crate::compose;

// ============================================================================
// ARITHMETIC
// ============================================================================

pub use crate::arith::safe_div;
