//! Built-in validators
//!
//! One validator per invariant:
//!
//! - **Range**: [`in_range`] (integer bounds), [`in_bounds`] (`f64` bounds)
//! - **Float**: [`finite`]
//! - **Properties**: [`integer`], [`positive`], [`non_zero`], [`natural`]
//!
//! # Examples
//!
//! ```rust
//! use numbrand::prelude::*;
//!
//! let rating = integer().and(in_range::<1, 5>());
//! let divisor = finite().and(non_zero());
//! # let _ = (rating, divisor);
//! ```

pub mod float;
pub mod properties;
pub mod range;

pub use float::{Finite, finite};
pub use properties::{Integer, Natural, NonZero, Positive, integer, natural, non_zero, positive};
pub use range::{InBounds, InRange, in_bounds, in_range};
