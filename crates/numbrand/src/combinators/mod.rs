//! Validator combinators
//!
//! Combinators build one validator out of several. Every combinator is
//! itself a [`Validate`](crate::foundation::Validate) implementation, so
//! they nest freely.
//!
//! - [`And`] / [`and`]: two validators, both brands
//! - [`compose`]: one to four validators as a tuple
//! - [`AndAll`] / [`and_all`]: a runtime list
//! - [`Erased`]: forget the brand, keep the check
//! - [`Logged`]: report failures through `tracing`

pub mod and;
pub mod composed;
pub mod erased;
pub mod logged;

#[cfg(test)]
pub(crate) mod testing;

pub use and::{And, AndAll, and, and_all};
pub use composed::{Composed, compose};
pub use erased::Erased;
pub use logged::Logged;
