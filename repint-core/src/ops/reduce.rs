//! Reductions answered from the descriptor in O(1).
//!
//! A detached handle falls back to [`crate::helpers::scan`]; both paths give
//! the same answers as running the plain algorithm over the realized buffer.

use crate::helpers::scan;
use crate::{Int, RepError, RepInt, Summary};

impl RepInt {
    /// Sum of all elements. `Ok(None)` when a missing value propagates.
    ///
    /// The result is 64 bits wide; a sum that does not fit is an
    /// `IntegerOverflow` error, never a wrapped value.
    pub fn sum(&self, na_rm: bool) -> Result<Option<i64>, RepError> {
        if let Some(buf) = self.detached_buffer() {
            return scan::sum(buf, na_rm);
        }
        let length = self.desc.length;
        if length == 0 {
            return Ok(Some(0));
        }
        match self.desc.value {
            Int::Na => Ok(if na_rm { Some(0) } else { None }),
            Int::Value(v) => {
                // |v| < 2^31 and length < 2^64, so the product fits in 96 bits.
                let wide = i128::from(v) * i128::from(length);
                i64::try_from(wide)
                    .map(Some)
                    .map_err(|_| RepError::integer_overflow(length))
            }
        }
    }

    /// Smallest element.
    ///
    /// `Int::Na` if a missing value propagates; `EmptyReduction` if nothing
    /// is left to compare (empty vector, or all missing with `na_rm`).
    pub fn min(&self, na_rm: bool) -> Result<Int, RepError> {
        match self.detached_buffer() {
            Some(buf) => scan::min(buf, na_rm),
            None => self.extreme("min", na_rm),
        }
    }

    /// Largest element. Same conventions as [`RepInt::min`].
    pub fn max(&self, na_rm: bool) -> Result<Int, RepError> {
        match self.detached_buffer() {
            Some(buf) => scan::max(buf, na_rm),
            None => self.extreme("max", na_rm),
        }
    }

    fn extreme(&self, op: &'static str, na_rm: bool) -> Result<Int, RepError> {
        if self.desc.length == 0 {
            return Err(RepError::empty_reduction(op));
        }
        match self.desc.value {
            Int::Na if na_rm => Err(RepError::empty_reduction(op)),
            value => Ok(value),
        }
    }

    /// Sortedness. A single repeated value is always sorted.
    pub fn is_sorted(&self) -> bool {
        self.detached_buffer().map_or(true, scan::is_sorted)
    }

    /// True if no element is missing.
    ///
    /// Without a detached buffer this reports the descriptor value, also for
    /// an empty vector.
    pub fn no_na(&self) -> bool {
        match self.detached_buffer() {
            Some(buf) => scan::no_na(buf),
            None => !self.desc.value.is_na(),
        }
    }

    /// Run every reduction and collect the outcomes.
    pub fn summarize(&self, na_rm: bool) -> Summary {
        Summary {
            length: self.len(),
            na_rm,
            sum: self.sum(na_rm).map_err(|e| e.error_type()),
            min: self.min(na_rm).map_err(|e| e.error_type()),
            max: self.max(na_rm).map_err(|e| e.error_type()),
            sorted: self.is_sorted(),
            no_na: self.no_na(),
        }
    }
}
