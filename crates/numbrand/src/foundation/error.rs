//! Error taxonomy for numeric validation
//!
//! Every failure is a [`NumberError`]. Each variant is one invariant kind;
//! the enum itself is the common root, so callers can either propagate the
//! whole error or match on the specific kind they care about.
//!
//! ```rust
//! use numbrand::prelude::*;
//!
//! let err = non_zero().validate(-0.0).unwrap_err();
//! assert_eq!(err.kind(), NumberErrorKind::Zero);
//! assert_eq!(err.code(), "zero");
//! ```

use std::fmt;

use smallvec::SmallVec;

/// Ordered `(name, value)` parameters attached to an error.
///
/// At most three entries (two bounds and the actual value), so they
/// never spill to the heap.
pub type ErrorParams = SmallVec<[(&'static str, f64); 3]>;

/// A numeric invariant violation.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum NumberError {
    /// Value lies outside the inclusive `[min, max]` bounds.
    #[error("expected number in range {min} <= x <= {max}, got {value}")]
    Range { min: f64, max: f64, value: f64 },

    /// Value is finite but has a non-zero fractional part.
    #[error("expected integer, got {value}")]
    Integer { value: f64 },

    /// Value is less than zero.
    #[error("expected non-negative number, got {value}")]
    Negative { value: f64 },

    /// Value is numerically equal to zero (either sign).
    #[error("expected non-zero number, got {value}")]
    Zero { value: f64 },

    /// Value is `NaN` or infinite.
    #[error("expected finite number, got {value}")]
    NotFinite { value: f64 },
}

/// Discriminant of a [`NumberError`], without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum NumberErrorKind {
    /// See [`NumberError::Range`].
    Range,
    /// See [`NumberError::Integer`].
    Integer,
    /// See [`NumberError::Negative`].
    Negative,
    /// See [`NumberError::Zero`].
    Zero,
    /// See [`NumberError::NotFinite`].
    NotFinite,
}

impl NumberError {
    /// Creates a range violation.
    #[must_use]
    pub fn out_of_range(min: f64, max: f64, value: f64) -> Self {
        Self::Range { min, max, value }
    }

    /// Which invariant was violated.
    #[must_use]
    pub fn kind(&self) -> NumberErrorKind {
        match self {
            Self::Range { .. } => NumberErrorKind::Range,
            Self::Integer { .. } => NumberErrorKind::Integer,
            Self::Negative { .. } => NumberErrorKind::Negative,
            Self::Zero { .. } => NumberErrorKind::Zero,
            Self::NotFinite { .. } => NumberErrorKind::NotFinite,
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// The offending input.
    #[must_use]
    pub fn value(&self) -> f64 {
        match *self {
            Self::Range { value, .. }
            | Self::Integer { value }
            | Self::Negative { value }
            | Self::Zero { value }
            | Self::NotFinite { value } => value,
        }
    }

    /// Violated bounds, for range errors.
    #[must_use]
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match *self {
            Self::Range { min, max, .. } => Some((min, max)),
            _ => None,
        }
    }

    /// Parameters of the violation: the bounds (if any), then `actual`.
    #[must_use]
    pub fn params(&self) -> ErrorParams {
        let mut params = ErrorParams::new();
        if let Some((min, max)) = self.bounds() {
            params.push(("min", min));
            params.push(("max", max));
        }
        params.push(("actual", self.value()));
        params
    }

    /// Looks up a parameter value by name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<f64> {
        self.params()
            .into_iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }
}

impl NumberErrorKind {
    /// Machine-readable code shared by every error of this kind.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Range => "range",
            Self::Integer => "integer",
            Self::Negative => "negative",
            Self::Zero => "zero",
            Self::NotFinite => "not_finite",
        }
    }
}

impl fmt::Display for NumberErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A validation result using [`NumberError`].
pub type ValidationResult<T> = Result<T, NumberError>;
