//! # numbrand
//!
//! Branded numbers: `f64` values whose type records which invariants have
//! been checked, and composable validators that produce them.
//!
//! ## Quick Start
//!
//! ```rust
//! use numbrand::prelude::*;
//!
//! // a rating is an integer in [1, 5]
//! let rating = compose((integer(), in_range::<1, 5>()));
//! let r = rating.validate(4.0)?;
//!
//! // division needs a finite, non-zero divisor, proven by the type
//! let votes = natural().validate(12.0)?;
//! let divisor = non_zero().validate(r)?;
//! assert_eq!(safe_div(votes, divisor), 3.0);
//!
//! assert!(rating.validate(2.5).is_err());
//! # Ok::<(), NumberError>(())
//! ```
//!
//! ## Built-in Validators
//!
//! - **Range**: [`InRange`](validators::InRange),
//!   [`InBounds`](validators::InBounds)
//! - **Float**: [`Finite`](validators::Finite)
//! - **Properties**: [`Integer`](validators::Integer),
//!   [`Positive`](validators::Positive), [`NonZero`](validators::NonZero),
//!   [`Natural`](validators::Natural)
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize` for branded values, and a `Deserialize` that
//!   re-runs the checks the brand claims.

// Nested And<Composed<(..)>, ..> and Brands<..> records are inherent to
// type-level brand tracking.
#![allow(clippy::type_complexity)]

pub mod arith;
pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;
