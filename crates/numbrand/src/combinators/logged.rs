//! Logging combinator
//!
//! [`Logged`] wraps a validator and reports every rejection through
//! `tracing` at a chosen level. Successes are reported at `TRACE`.

use tracing::Level;

use crate::foundation::sealed::Sealed;
use crate::foundation::{NumberError, Validate};

/// Emits a `tracing` event whenever the inner validator rejects a value.
///
/// The brand and the returned error are those of the inner validator.
///
/// # Examples
///
/// ```rust
/// use numbrand::prelude::*;
/// use tracing::Level;
///
/// let divisor = finite().and(non_zero()).logged(Level::WARN);
/// assert!(divisor.validate(0.0).is_err()); // logs a WARN event
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Logged<V> {
    validator: V,
    level: Level,
}

impl<V> Logged<V> {
    /// Wraps `validator`, logging failures at `level`.
    pub const fn new(validator: V, level: Level) -> Self {
        Self { validator, level }
    }

    /// The level failures are logged at.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns a reference to the wrapped validator.
    pub fn inner(&self) -> &V {
        &self.validator
    }
}

impl<V> Sealed for Logged<V> {}

impl<V: Validate> Validate for Logged<V> {
    type Brand = V::Brand;

    fn check(&self, value: f64) -> Result<(), NumberError> {
        let validator = self.validator.name();
        match self.validator.check(value) {
            Ok(()) => {
                tracing::trace!(validator, value, "validation passed");
                Ok(())
            }
            Err(error) => {
                let code = error.code();
                if self.level == Level::ERROR {
                    tracing::error!(validator, code, value, %error, "validation failed");
                } else if self.level == Level::WARN {
                    tracing::warn!(validator, code, value, %error, "validation failed");
                } else if self.level == Level::INFO {
                    tracing::info!(validator, code, value, %error, "validation failed");
                } else if self.level == Level::DEBUG {
                    tracing::debug!(validator, code, value, %error, "validation failed");
                } else {
                    tracing::trace!(validator, code, value, %error, "validation failed");
                }
                Err(error)
            }
        }
    }

    fn name(&self) -> &'static str {
        self.validator.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{natural, positive};

    #[test]
    fn test_logged_is_transparent() {
        let plain = natural();
        let logged = natural().logged(Level::DEBUG);
        for value in [0.0, 3.0, -1.0, 2.5, f64::NAN] {
            assert_eq!(
                logged.check(value).map_err(|e| e.kind()),
                plain.check(value).map_err(|e| e.kind())
            );
        }
        assert_eq!(logged.level(), Level::DEBUG);
        assert_eq!(logged.name(), "And");
    }

    #[test]
    fn test_logged_keeps_brand() {
        let n: crate::foundation::PositiveNumber =
            positive().logged(Level::ERROR).validate(1.0).unwrap();
        assert_eq!(n, 1.0);
    }
}
