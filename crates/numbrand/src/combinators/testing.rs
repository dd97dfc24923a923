//! Stand-in validators for combinator tests.

use std::cell::Cell;

use crate::foundation::sealed::Sealed;
use crate::foundation::{NumberError, Unbranded, Validate};

/// Counts its invocations and rejects values below `threshold`.
pub(crate) struct Counting<'a> {
    pub(crate) calls: &'a Cell<usize>,
    pub(crate) threshold: f64,
}

impl<'a> Counting<'a> {
    /// Rejects values below `threshold`.
    pub(crate) fn below(calls: &'a Cell<usize>, threshold: f64) -> Self {
        Self { calls, threshold }
    }

    /// Accepts every value that is not `NaN`.
    pub(crate) fn passing(calls: &'a Cell<usize>) -> Self {
        Self::below(calls, f64::NEG_INFINITY)
    }
}

impl Sealed for Counting<'_> {}

impl Validate for Counting<'_> {
    type Brand = Unbranded;

    fn check(&self, value: f64) -> Result<(), NumberError> {
        self.calls.set(self.calls.get() + 1);
        if value < self.threshold {
            Err(NumberError::out_of_range(self.threshold, f64::MAX, value))
        } else {
            Ok(())
        }
    }
}

/// Snapshot of several counters, for comparing in one assertion.
pub(crate) fn counts(calls: &[Cell<usize>]) -> Vec<usize> {
    calls.iter().map(Cell::get).collect()
}
