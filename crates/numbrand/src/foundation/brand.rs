//! Type-level brands
//!
//! A brand set records, in the type system only, which invariants a number
//! has been checked against. It is a [`Brands`] record with one slot per
//! invariant:
//!
//! | slot       | values                         |
//! |------------|--------------------------------|
//! | finite     | [`Yes`] / [`No`]               |
//! | integer    | [`Yes`] / [`No`]               |
//! | positive   | [`Yes`] / [`No`]               |
//! | non-zero   | [`Yes`] / [`No`]               |
//! | range      | [`Unbounded`] / [`Bounded`]    |
//!
//! Brand sets intersect with [`Merge`]: flags are OR-ed, and a range slot
//! keeps whichever bounds are present. Two *different* bounds never merge,
//! so composing `in_range::<1, 5>()` with `in_range::<0, 10>()` is a compile
//! error rather than a silently weakened brand.
//!
//! Nothing in this module exists at runtime. Every marker type is a ZST and
//! [`Brands`] is never instantiated.

use std::marker::PhantomData;

use crate::foundation::error::NumberError;
use crate::foundation::sealed::Sealed;

// ============================================================================
// FLAGS
// ============================================================================

/// Marks an invariant slot as checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Yes;

/// Marks an invariant slot as unchecked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct No;

/// A type-level boolean.
pub trait Flag: Sealed + Copy + Default + 'static {
    /// `true` for [`Yes`].
    const SET: bool;
}

impl Sealed for Yes {}
impl Sealed for No {}

impl Flag for Yes {
    const SET: bool = true;
}

impl Flag for No {
    const SET: bool = false;
}

/// Type-level OR of two flags.
pub trait FlagOr<Rhs: Flag>: Flag {
    /// [`Yes`] when either side is [`Yes`].
    type Output: Flag;
}

impl<F: Flag> FlagOr<F> for No {
    type Output = F;
}

impl<F: Flag> FlagOr<F> for Yes {
    type Output = Yes;
}

// ============================================================================
// RANGE BRANDS
// ============================================================================

/// No range has been checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Unbounded;

/// The value was checked to lie in `[MIN, MAX]`, bounds inclusive.
///
/// Every pair of bounds is its own type: `Bounded<1, 5>` and
/// `Bounded<1, 10>` are unrelated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bounded<const MIN: i64, const MAX: i64>;

/// Inclusive `f64` bounds, named by a marker type.
///
/// For bounds that are fractional or infinite, which const generics
/// cannot express. Each marker type is its own range brand.
///
/// ```rust
/// use numbrand::prelude::*;
///
/// #[derive(Debug, Clone, Copy, Default)]
/// struct Probability;
///
/// impl Bounds for Probability {
///     const MIN: f64 = 0.0;
///     const MAX: f64 = 1.0;
/// }
///
/// let p: NumberWithin<Probability> = in_bounds::<Probability>().validate(0.25)?;
/// assert_eq!(p, 0.25);
/// # Ok::<(), NumberError>(())
/// ```
pub trait Bounds: 'static {
    /// Lower bound, inclusive.
    const MIN: f64;
    /// Upper bound, inclusive.
    const MAX: f64;
}

/// The value was checked to lie within the bounds of `T`.
pub struct Within<T: Bounds> {
    _bounds: PhantomData<fn() -> T>,
}

impl<T: Bounds> Clone for Within<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Bounds> Copy for Within<T> {}

impl<T: Bounds> Default for Within<T> {
    fn default() -> Self {
        Self {
            _bounds: PhantomData,
        }
    }
}

/// The range slot of a brand set.
pub trait RangeSlot: Sealed + Copy + Default + 'static {
    /// Checked bounds as `f64`, if any. Used for error reporting.
    const BOUNDS: Option<(f64, f64)>;

    /// Whether `value` lies within the bounds. `NaN` is never excluded.
    fn contains(value: f64) -> bool;
}

impl Sealed for Unbounded {}
impl<const MIN: i64, const MAX: i64> Sealed for Bounded<MIN, MAX> {}
impl<T: Bounds> Sealed for Within<T> {}

impl RangeSlot for Unbounded {
    const BOUNDS: Option<(f64, f64)> = None;

    #[inline]
    fn contains(_value: f64) -> bool {
        true
    }
}

impl<const MIN: i64, const MAX: i64> RangeSlot for Bounded<MIN, MAX> {
    const BOUNDS: Option<(f64, f64)> = Some((MIN as f64, MAX as f64));

    /// Compares against the integer bounds exactly. `MIN as f64` rounds
    /// once `|MIN| > 2^53`, so the comparison goes through the integer
    /// part of `value` instead.
    #[inline]
    fn contains(value: f64) -> bool {
        const { assert!(MIN <= MAX, "range lower bound exceeds upper bound") };
        if value.is_nan() {
            return true;
        }
        // saturating casts: +-inf land beyond every i64 bound
        let floor = value.floor() as i128;
        let ceil = value.ceil() as i128;
        floor >= i128::from(MIN) && ceil <= i128::from(MAX)
    }
}

impl<T: Bounds> RangeSlot for Within<T> {
    const BOUNDS: Option<(f64, f64)> = Some((T::MIN, T::MAX));

    #[inline]
    fn contains(value: f64) -> bool {
        const { assert!(T::MIN <= T::MAX, "bounds are reversed or NaN") };
        value.is_nan() || (T::MIN..=T::MAX).contains(&value)
    }
}

/// Type-level intersection of two range slots.
///
/// Only defined when at most one side is bounded, or both carry the same
/// bounds.
pub trait RangeMeet<Rhs: RangeSlot>: RangeSlot {
    /// The combined range slot.
    type Output: RangeSlot;
}

impl<R: RangeSlot> RangeMeet<R> for Unbounded {
    type Output = R;
}

impl<const MIN: i64, const MAX: i64> RangeMeet<Unbounded> for Bounded<MIN, MAX> {
    type Output = Self;
}

impl<const MIN: i64, const MAX: i64> RangeMeet<Bounded<MIN, MAX>> for Bounded<MIN, MAX> {
    type Output = Self;
}

impl<T: Bounds> RangeMeet<Unbounded> for Within<T> {
    type Output = Self;
}

impl<T: Bounds> RangeMeet<Within<T>> for Within<T> {
    type Output = Self;
}

// ============================================================================
// COVERAGE (brand weakening)
// ============================================================================

/// `Self` guarantees at least as much as `Weaker`.
///
/// Implemented per slot: anything covers [`No`] / [`Unbounded`], and a
/// checked slot covers only an identical checked slot.
pub trait Covers<Weaker> {}

impl<F: Flag> Covers<No> for F {}
impl Covers<Yes> for Yes {}

impl<R: RangeSlot> Covers<Unbounded> for R {}
impl<const MIN: i64, const MAX: i64> Covers<Bounded<MIN, MAX>> for Bounded<MIN, MAX> {}
impl<T: Bounds> Covers<Within<T>> for Within<T> {}

// ============================================================================
// BRAND SETS
// ============================================================================

/// A type-level record of checked invariants.
///
/// Never instantiated; it only appears as the parameter of
/// [`Branded`](crate::foundation::Branded).
pub struct Brands<F, I, P, Z, R> {
    _slots: PhantomData<fn() -> (F, I, P, Z, R)>,
}

/// A set of brands carried by a [`Branded`](crate::foundation::Branded) value.
///
/// Sealed: the only implementor is [`Brands`].
pub trait BrandSet: Sealed + 'static {
    /// Finite (not `NaN`, not infinite).
    type Finite: Flag;
    /// Integer (no fractional part). Implies finite.
    type Integer: Flag;
    /// Not negative. Zero counts as positive.
    type Positive: Flag;
    /// Not equal to zero.
    type NonZero: Flag;
    /// Inclusive range.
    type Range: RangeSlot;

    /// Re-runs every check this brand set claims, in a fixed order:
    /// positive, finite, integer, non-zero, range.
    ///
    /// This matches the order of [`natural`](crate::validators::natural),
    /// so a natural-number brand reports the same error either way.
    fn verify(value: f64) -> Result<(), NumberError> {
        if <Self::Positive as Flag>::SET && value < 0.0 {
            return Err(NumberError::Negative { value });
        }
        if (<Self::Finite as Flag>::SET || <Self::Integer as Flag>::SET) && !value.is_finite() {
            return Err(NumberError::NotFinite { value });
        }
        if <Self::Integer as Flag>::SET && value.fract() != 0.0 {
            return Err(NumberError::Integer { value });
        }
        if <Self::NonZero as Flag>::SET && value == 0.0 {
            return Err(NumberError::Zero { value });
        }
        if !<Self::Range as RangeSlot>::contains(value)
            && let Some((min, max)) = <Self::Range as RangeSlot>::BOUNDS
        {
            return Err(NumberError::out_of_range(min, max, value));
        }
        Ok(())
    }
}

impl<F, I, P, Z, R> Sealed for Brands<F, I, P, Z, R> {}

impl<F, I, P, Z, R> BrandSet for Brands<F, I, P, Z, R>
where
    F: Flag,
    I: Flag,
    P: Flag,
    Z: Flag,
    R: RangeSlot,
{
    type Finite = F;
    type Integer = I;
    type Positive = P;
    type NonZero = Z;
    type Range = R;
}

/// Type-level intersection of two brand sets.
pub trait Merge<Rhs: BrandSet>: BrandSet {
    /// A brand set carrying every brand of both sides.
    type Output: BrandSet;
}

impl<F1, I1, P1, Z1, R1, F2, I2, P2, Z2, R2> Merge<Brands<F2, I2, P2, Z2, R2>>
    for Brands<F1, I1, P1, Z1, R1>
where
    F1: FlagOr<F2>,
    I1: FlagOr<I2>,
    P1: FlagOr<P2>,
    Z1: FlagOr<Z2>,
    R1: RangeMeet<R2>,
    F2: Flag,
    I2: Flag,
    P2: Flag,
    Z2: Flag,
    R2: RangeSlot,
{
    type Output = Brands<
        <F1 as FlagOr<F2>>::Output,
        <I1 as FlagOr<I2>>::Output,
        <P1 as FlagOr<P2>>::Output,
        <Z1 as FlagOr<Z2>>::Output,
        <R1 as RangeMeet<R2>>::Output,
    >;
}

/// `Self` carries every brand of `Target` (and possibly more).
pub trait Satisfies<Target: BrandSet>: BrandSet {}

impl<F1, I1, P1, Z1, R1, F2, I2, P2, Z2, R2> Satisfies<Brands<F2, I2, P2, Z2, R2>>
    for Brands<F1, I1, P1, Z1, R1>
where
    F1: Flag + Covers<F2>,
    I1: Flag + Covers<I2>,
    P1: Flag + Covers<P2>,
    Z1: Flag + Covers<Z2>,
    R1: RangeSlot + Covers<R2>,
    F2: Flag,
    I2: Flag,
    P2: Flag,
    Z2: Flag,
    R2: RangeSlot,
{
}

/// Shorthand for the intersection of two brand sets.
pub type Merged<A, B> = <A as Merge<B>>::Output;

// ============================================================================
// NAMED BRAND SETS
// ============================================================================

/// No invariant checked. The brand set of a plain `f64`.
pub type Unbranded = Brands<No, No, No, No, Unbounded>;

/// Checked finite.
pub type FiniteBrand = Brands<Yes, No, No, No, Unbounded>;

/// Checked integer (and therefore finite).
pub type IntegerBrand = Brands<Yes, Yes, No, No, Unbounded>;

/// Checked not negative.
pub type PositiveBrand = Brands<No, No, Yes, No, Unbounded>;

/// Checked not zero.
pub type NonZeroBrand = Brands<No, No, No, Yes, Unbounded>;

/// Checked non-negative integer.
pub type NaturalBrand = Brands<Yes, Yes, Yes, No, Unbounded>;

/// Checked within `[MIN, MAX]`.
pub type RangeBrand<const MIN: i64, const MAX: i64> = Brands<No, No, No, No, Bounded<MIN, MAX>>;

/// Checked within the [`Bounds`] of `T`.
pub type BoundsBrand<T> = Brands<No, No, No, No, Within<T>>;

#[cfg(test)]
mod tests {
    use super::*;

    fn same<A: 'static, B: 'static>() -> bool {
        std::any::TypeId::of::<A>() == std::any::TypeId::of::<B>()
    }

    #[test]
    fn test_merge_is_flagwise_or() {
        assert!(same::<Merged<PositiveBrand, IntegerBrand>, NaturalBrand>());
        assert!(same::<Merged<IntegerBrand, PositiveBrand>, NaturalBrand>());
        assert!(same::<Merged<FiniteBrand, IntegerBrand>, IntegerBrand>());
        assert!(same::<Merged<Unbranded, NonZeroBrand>, NonZeroBrand>());
    }

    #[test]
    fn test_merge_keeps_bounds() {
        type Rating = Merged<IntegerBrand, RangeBrand<1, 5>>;
        assert_eq!(<Rating as BrandSet>::Range::BOUNDS, Some((1.0, 5.0)));
        type OneToFive = RangeBrand<1, 5>;
        assert!(same::<Merged<OneToFive, OneToFive>, OneToFive>());
        assert!(!same::<RangeBrand<1, 5>, RangeBrand<1, 10>>());
    }

    #[test]
    fn test_verify_order() {
        assert_eq!(
            NaturalBrand::verify(f64::NEG_INFINITY),
            Err(NumberError::Negative {
                value: f64::NEG_INFINITY
            })
        );
        assert_eq!(
            NaturalBrand::verify(-1.5),
            Err(NumberError::Negative { value: -1.5 })
        );
        assert_eq!(
            NaturalBrand::verify(2.5),
            Err(NumberError::Integer { value: 2.5 })
        );
        assert!(matches!(
            NaturalBrand::verify(f64::NAN),
            Err(NumberError::NotFinite { .. })
        ));
        assert!(NaturalBrand::verify(0.0).is_ok());
    }

    #[test]
    fn test_verify_range_and_zero() {
        assert!(RangeBrand::<1, 5>::verify(5.0).is_ok());
        assert_eq!(
            RangeBrand::<1, 5>::verify(5.5),
            Err(NumberError::out_of_range(1.0, 5.0, 5.5))
        );
        assert_eq!(
            NonZeroBrand::verify(-0.0),
            Err(NumberError::Zero { value: -0.0 })
        );
        assert!(Unbranded::verify(f64::NAN).is_ok());
    }

    #[test]
    fn test_wide_integer_bounds_are_exact() {
        // 2^53 + 1 has no f64 representation; `as f64` rounds it to 2^53
        const ABOVE: i64 = 9_007_199_254_740_993;
        type Positive = RangeBrand<ABOVE, { i64::MAX }>;
        type Negative = RangeBrand<{ -ABOVE }, { -ABOVE }>;
        let just_below = 9_007_199_254_740_992.0;
        assert!(!Bounded::<ABOVE, ABOVE>::contains(just_below));
        assert!(Positive::verify(just_below).is_err());
        assert!(Negative::verify(-just_below).is_err());

        // i64::MAX as f64 is 2^63, one past the bound
        let two_pow_63 = 9_223_372_036_854_775_808.0;
        assert!(!Bounded::<0, { i64::MAX }>::contains(two_pow_63));
        assert!(Bounded::<{ i64::MIN }, 0>::contains(-two_pow_63));
    }

    #[test]
    fn test_fractional_integer_bounds() {
        assert!(Bounded::<1, 5>::contains(4.999));
        assert!(!Bounded::<1, 5>::contains(5.001));
        assert!(!Bounded::<1, 5>::contains(0.999));
        assert!(!Bounded::<1, 5>::contains(f64::INFINITY));
        assert!(Bounded::<1, 5>::contains(f64::NAN));
    }

    #[derive(Debug, Clone, Copy, Default)]
    struct UnitInterval;

    impl Bounds for UnitInterval {
        const MIN: f64 = 0.0;
        const MAX: f64 = 1.0;
    }

    #[derive(Debug, Clone, Copy, Default)]
    struct AtLeastHalf;

    impl Bounds for AtLeastHalf {
        const MIN: f64 = 0.5;
        const MAX: f64 = f64::INFINITY;
    }

    #[test]
    fn test_marker_bounds() {
        assert!(BoundsBrand::<UnitInterval>::verify(0.5).is_ok());
        assert_eq!(
            BoundsBrand::<UnitInterval>::verify(1.5),
            Err(NumberError::out_of_range(0.0, 1.0, 1.5))
        );
        assert!(BoundsBrand::<AtLeastHalf>::verify(f64::INFINITY).is_ok());
        assert!(BoundsBrand::<AtLeastHalf>::verify(0.25).is_err());
        type Unit = BoundsBrand<UnitInterval>;
        type Half = BoundsBrand<AtLeastHalf>;
        assert!(!same::<Unit, Half>());
        assert!(same::<
            Merged<IntegerBrand, Unit>,
            Brands<Yes, Yes, No, No, Within<UnitInterval>>,
        >());
    }

    #[test]
    fn test_markers_are_zero_sized() {
        assert_eq!(size_of::<Yes>(), 0);
        assert_eq!(size_of::<Bounded<1, 5>>(), 0);
        assert_eq!(size_of::<Within<UnitInterval>>(), 0);
        assert_eq!(size_of::<NaturalBrand>(), 0);
    }
}
