//! Reference implementation: a plain, fully materialized vector.

use repint_core::{Descriptor, Int, NA_INTEGER};

/// A fully materialized integer vector with textbook algorithms.
///
/// Errors are reported by their `error_type()` string so results can be
/// compared directly with `repint-core`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NaiveVec {
    data: Vec<i32>,
}

impl NaiveVec {
    /// Materialize a descriptor eagerly.
    ///
    /// # Panics
    ///
    /// Panics if the length does not fit in memory; the oracle is for tests.
    pub fn from_descriptor(desc: Descriptor) -> Self {
        let len = usize::try_from(desc.length).expect("oracle length fits usize");
        let mut data = Vec::with_capacity(len);
        for _ in 0..len {
            data.push(desc.value.to_raw());
        }
        Self { data }
    }

    /// Wrap raw elements.
    pub fn from_raw(data: Vec<i32>) -> Self {
        Self { data }
    }

    /// The raw elements.
    pub fn as_raw(&self) -> &[i32] {
        &self.data
    }

    /// Number of elements.
    pub fn len(&self) -> u64 {
        self.data.len() as u64
    }

    /// True if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Overwrite one element. Returns false if `i` is out of range.
    pub fn set(&mut self, i: u64, value: Int) -> bool {
        match usize::try_from(i).ok().and_then(|i| self.data.get_mut(i)) {
            Some(slot) => {
                *slot = value.to_raw();
                true
            }
            None => false,
        }
    }

    /// Element at `i`.
    pub fn elt(&self, i: u64) -> Result<Int, &'static str> {
        usize::try_from(i)
            .ok()
            .and_then(|i| self.data.get(i))
            .map(|&raw| Int::from_raw(raw))
            .ok_or("index_out_of_range")
    }

    /// Copy `[start, start + count)` into the front of `out`, one element at a time.
    pub fn get_region(&self, start: u64, count: u64, out: &mut [i32]) -> usize {
        let mut copied = 0;
        let mut i = start;
        while (copied as u64) < count && copied < out.len() {
            match self.elt(i) {
                Ok(v) => out[copied] = v.to_raw(),
                Err(_) => break,
            }
            copied += 1;
            i += 1;
        }
        copied
    }

    /// Sum with a 64-bit accumulator.
    pub fn sum(&self, na_rm: bool) -> Result<Option<i64>, &'static str> {
        let mut total: i64 = 0;
        for v in self.values() {
            match v.get() {
                Some(x) => total = total.checked_add(i64::from(x)).ok_or("integer_overflow")?,
                None if na_rm => {}
                None => return Ok(None),
            }
        }
        Ok(Some(total))
    }

    /// Minimum, with missing values propagating unless skipped.
    pub fn min(&self, na_rm: bool) -> Result<Int, &'static str> {
        if !na_rm && self.values().any(Int::is_na) {
            return Ok(Int::Na);
        }
        self.values()
            .filter_map(Int::get)
            .min()
            .map(Int::Value)
            .ok_or("empty_reduction")
    }

    /// Maximum, with missing values propagating unless skipped.
    pub fn max(&self, na_rm: bool) -> Result<Int, &'static str> {
        if !na_rm && self.values().any(Int::is_na) {
            return Ok(Int::Na);
        }
        self.values()
            .filter_map(Int::get)
            .max()
            .map(Int::Value)
            .ok_or("empty_reduction")
    }

    /// Constant, or monotone without missing values.
    pub fn is_sorted(&self) -> bool {
        let d = &self.data;
        if d.windows(2).all(|w| w[0] == w[1]) {
            return true;
        }
        if d.contains(&NA_INTEGER) {
            return false;
        }
        let mut sorted = d.clone();
        sorted.sort_unstable();
        if sorted == *d {
            return true;
        }
        sorted.reverse();
        sorted == *d
    }

    /// True if no element is missing.
    pub fn no_na(&self) -> bool {
        !self.values().any(Int::is_na)
    }

    fn values(&self) -> impl Iterator<Item = Int> + '_ {
        self.data.iter().map(|&raw| Int::from_raw(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive_reductions() {
        let v = NaiveVec::from_raw(vec![3, NA_INTEGER, 1]);
        assert_eq!(v.sum(false), Ok(None));
        assert_eq!(v.sum(true), Ok(Some(4)));
        assert_eq!(v.min(true), Ok(Int::Value(1)));
        assert_eq!(v.max(false), Ok(Int::Na));
        assert!(!v.no_na());
        assert!(!v.is_sorted());
    }

    #[test]
    fn test_naive_region() {
        let v = NaiveVec::from_descriptor(Descriptor::new(9, 5));
        let mut out = [0; 8];
        assert_eq!(v.get_region(3, 8, &mut out), 2);
        assert_eq!(out, [9, 9, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_set() {
        let mut v = NaiveVec::from_descriptor(Descriptor::new(1, 2));
        assert!(v.set(1, Int::Na));
        assert!(!v.set(2, Int::Value(0)));
        assert_eq!(v.as_raw(), &[1, NA_INTEGER]);
    }
}
