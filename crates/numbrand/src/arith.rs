//! Brand-preserving arithmetic
//!
//! Ordinary operators on branded values return plain `f64`. The functions
//! here carry a brand through an operation whose result is proven by the
//! brands of its operands.

use crate::foundation::{BrandSet, Branded, FiniteNumber, Yes};

/// Divides `a` by `b`, keeping the result branded as finite.
///
/// Both operands must already be finite and the divisor non-zero; these
/// are compile-time requirements and nothing is re-checked at runtime.
///
/// Finite operands can still overflow (`f64::MAX / 0.5`); the result is
/// then infinite despite its brand.
///
/// # Examples
///
/// ```rust
/// use numbrand::prelude::*;
///
/// let a = finite().validate(10.0)?;
/// let b = compose((finite(), non_zero())).validate(2.0)?;
/// assert_eq!(safe_div(a, b), 5.0);
/// # Ok::<(), NumberError>(())
/// ```
///
/// A divisor that is only finite is rejected:
///
/// ```compile_fail
/// use numbrand::prelude::*;
///
/// let a = finite().validate(10.0).unwrap();
/// let b = finite().validate(2.0).unwrap();
/// let _ = safe_div(a, b);
/// ```
///
/// So is one that is only non-zero:
///
/// ```compile_fail
/// use numbrand::prelude::*;
///
/// let a = finite().validate(10.0).unwrap();
/// let b = non_zero().validate(2.0).unwrap();
/// let _ = safe_div(a, b);
/// ```
///
/// And a plain `f64`:
///
/// ```compile_fail
/// use numbrand::prelude::*;
///
/// let a = finite().validate(10.0).unwrap();
/// let _ = safe_div(a, 2.0);
/// ```
#[inline]
#[must_use]
pub fn safe_div<A, B>(a: Branded<A>, b: Branded<B>) -> FiniteNumber
where
    A: BrandSet<Finite = Yes>,
    B: BrandSet<Finite = Yes, NonZero = Yes>,
{
    Branded::new_unchecked(a.get() / b.get())
}
