//! Branded numbers
//!
//! [`Branded<B>`] is an `f64` whose type carries the brand set `B`. There
//! is no public constructor: a branded value comes out of a validator, or
//! out of [`TryFrom<f64>`] / `Deserialize`, both of which run the checks
//! that `B` claims.
//!
//! Brands are erased as soon as the value is used as a plain number:
//!
//! ```rust
//! use numbrand::prelude::*;
//!
//! let n = natural().validate(4.0)?;
//! let doubled: f64 = n * 2.0; // arithmetic yields a plain f64
//! assert_eq!(doubled, 8.0);
//! # Ok::<(), NumberError>(())
//! ```
//!
//! A brand cannot be conjured without a validator:
//!
//! ```compile_fail
//! use numbrand::prelude::*;
//!
//! let forged: NonZeroNumber = Branded { value: 0.0, brand: std::marker::PhantomData };
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use crate::foundation::brand::{
    BoundsBrand, BrandSet, FiniteBrand, IntegerBrand, Merge, Merged, NaturalBrand, NonZeroBrand,
    PositiveBrand, RangeBrand, Satisfies, Unbranded,
};
use crate::foundation::error::NumberError;
use crate::foundation::sealed::Sealed;

/// An `f64` carrying a compile-time brand set.
///
/// Same size and layout as `f64`; the brand exists only in the type.
#[repr(transparent)]
pub struct Branded<B: BrandSet> {
    value: f64,
    brand: PhantomData<fn() -> B>,
}

impl<B: BrandSet> Branded<B> {
    /// Only reachable from a validator, after its check passed.
    #[inline]
    pub(crate) const fn new_unchecked(value: f64) -> Self {
        Self {
            value,
            brand: PhantomData,
        }
    }

    /// The underlying number, with every brand erased.
    #[inline]
    #[must_use]
    pub const fn get(self) -> f64 {
        self.value
    }

    /// Drops brands, keeping only those of `Target`.
    ///
    /// Only compiles when `B` carries every brand `Target` asks for.
    ///
    /// ```rust
    /// use numbrand::prelude::*;
    ///
    /// let n: NaturalNumber = natural().validate(3.0)?;
    /// let i: IntegerNumber = n.relax();
    /// assert_eq!(i, 3.0);
    /// # Ok::<(), NumberError>(())
    /// ```
    ///
    /// ```compile_fail
    /// use numbrand::prelude::*;
    ///
    /// let f: FiniteNumber = finite().validate(3.0).unwrap();
    /// let i: IntegerNumber = f.relax(); // finite does not imply integer
    /// ```
    #[inline]
    #[must_use]
    pub fn relax<Target>(self) -> Branded<Target>
    where
        Target: BrandSet,
        B: Satisfies<Target>,
    {
        Branded::new_unchecked(self.value)
    }
}

// ============================================================================
// NUMBER INPUT
// ============================================================================

/// Anything a validator accepts: a plain `f64` or an already branded value.
///
/// Validation keeps the brands the input already has and adds its own.
pub trait Number: Sealed + Copy {
    /// Brands the input already carries.
    type Brands: BrandSet;

    /// The raw value.
    fn get(self) -> f64;
}

impl Sealed for f64 {}

impl Number for f64 {
    type Brands = Unbranded;

    #[inline]
    fn get(self) -> f64 {
        self
    }
}

impl<B: BrandSet> Sealed for Branded<B> {}

impl<B: BrandSet> Number for Branded<B> {
    type Brands = B;

    #[inline]
    fn get(self) -> f64 {
        self.value
    }
}

// ============================================================================
// VALUE ALIASES
// ============================================================================

/// A plain number that went through no validator.
pub type Unchecked = Branded<Unbranded>;

/// Not `NaN`, not infinite.
pub type FiniteNumber = Branded<FiniteBrand>;

/// A finite number without a fractional part.
pub type IntegerNumber = Branded<IntegerBrand>;

/// Not negative (zero included).
pub type PositiveNumber = Branded<PositiveBrand>;

/// Not zero (of either sign).
pub type NonZeroNumber = Branded<NonZeroBrand>;

/// A non-negative integer.
pub type NaturalNumber = Branded<NaturalBrand>;

/// Within `[MIN, MAX]`, bounds inclusive.
pub type NumberInRange<const MIN: i64, const MAX: i64> = Branded<RangeBrand<MIN, MAX>>;

/// Within the [`Bounds`](crate::foundation::Bounds) of `T`, inclusive.
pub type NumberWithin<T> = Branded<BoundsBrand<T>>;

/// A value carrying the brands of both `A` and `B`.
///
/// ```rust
/// use numbrand::prelude::*;
///
/// type Rating = Intersect<IntegerNumber, NumberInRange<1, 5>>;
///
/// let rating: Rating = compose((integer(), in_range::<1, 5>())).validate(4.0)?;
/// assert_eq!(rating, 4.0);
/// # Ok::<(), NumberError>(())
/// ```
pub type Intersect<A, B> = Branded<Merged<<A as Number>::Brands, <B as Number>::Brands>>;

// ============================================================================
// CONVERSIONS
// ============================================================================

impl<B: BrandSet> From<Branded<B>> for f64 {
    #[inline]
    fn from(value: Branded<B>) -> Self {
        value.value
    }
}

/// Runs the checks `B` claims, then brands the value.
impl<B: BrandSet> TryFrom<f64> for Branded<B> {
    type Error = NumberError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        B::verify(value)?;
        Ok(Self::new_unchecked(value))
    }
}

impl<B: BrandSet> Branded<B> {
    /// Adds the brands of `Other` by re-running their checks.
    ///
    /// Equivalent to validating `self` with every validator `Other` implies.
    pub fn refine<Other>(self) -> Result<Branded<Merged<B, Other>>, NumberError>
    where
        Other: BrandSet,
        B: Merge<Other>,
    {
        Other::verify(self.value)?;
        Ok(Branded::new_unchecked(self.value))
    }
}

// ============================================================================
// STD TRAITS
// ============================================================================

impl<B: BrandSet> Clone for Branded<B> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: BrandSet> Copy for Branded<B> {}

impl<B: BrandSet> fmt::Debug for Branded<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Branded").field(&self.value).finish()
    }
}

impl<B: BrandSet> fmt::Display for Branded<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<B1: BrandSet, B2: BrandSet> PartialEq<Branded<B2>> for Branded<B1> {
    #[inline]
    fn eq(&self, other: &Branded<B2>) -> bool {
        self.value == other.value
    }
}

impl<B: BrandSet> PartialEq<f64> for Branded<B> {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.value == *other
    }
}

impl<B: BrandSet> PartialEq<Branded<B>> for f64 {
    #[inline]
    fn eq(&self, other: &Branded<B>) -> bool {
        *self == other.value
    }
}

impl<B1: BrandSet, B2: BrandSet> PartialOrd<Branded<B2>> for Branded<B1> {
    #[inline]
    fn partial_cmp(&self, other: &Branded<B2>) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<B: BrandSet> PartialOrd<f64> for Branded<B> {
    #[inline]
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.value.partial_cmp(other)
    }
}

// Arithmetic widens back to f64: brands do not survive unchecked math.
macro_rules! erase_on {
    ($($tr:ident :: $method:ident),+ $(,)?) => {
        $(
            impl<B: BrandSet, Rhs: Number> $tr<Rhs> for Branded<B> {
                type Output = f64;

                #[inline]
                fn $method(self, rhs: Rhs) -> f64 {
                    self.value.$method(rhs.get())
                }
            }

            impl<B: BrandSet> $tr<Branded<B>> for f64 {
                type Output = f64;

                #[inline]
                fn $method(self, rhs: Branded<B>) -> f64 {
                    self.$method(rhs.value)
                }
            }
        )+
    };
}

erase_on!(Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem);

impl<B: BrandSet> Neg for Branded<B> {
    type Output = f64;

    #[inline]
    fn neg(self) -> f64 {
        -self.value
    }
}

// ============================================================================
// SERDE
// ============================================================================

#[cfg(feature = "serde")]
impl<B: BrandSet> serde::Serialize for Branded<B> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value)
    }
}

#[cfg(feature = "serde")]
impl<'de, B: BrandSet> serde::Deserialize<'de> for Branded<B> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Self::try_from(value).map_err(serde::de::Error::custom)
    }
}
