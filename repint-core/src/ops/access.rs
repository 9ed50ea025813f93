//! Element and region reads that never materialize.

use std::iter::FusedIterator;
use std::slice;

use crate::helpers::region::region_len;
use crate::{Int, RepError, RepInt, XLen};

impl RepInt {
    /// Element at index `i`.
    pub fn elt(&self, i: XLen) -> Result<Int, RepError> {
        if i >= self.desc.length {
            return Err(RepError::index_out_of_range(i, self.desc.length));
        }
        match self.detached_buffer() {
            // i < length == buf.len()
            Some(buf) => Ok(Int::from_raw(buf[i as usize])),
            None => Ok(self.desc.value),
        }
    }

    /// Copy elements `[start, start + k)` into `out[0..k)` and return `k`.
    ///
    /// `k` is `count` clamped to the elements remaining after `start` and to
    /// `out.len()`. Elements of `out` past `k` are left untouched.
    pub fn get_region(&self, start: XLen, count: XLen, out: &mut [i32]) -> usize {
        let k = region_len(start, count, self.desc.length, out.len());
        if k == 0 {
            return 0;
        }
        match self.detached_buffer() {
            Some(buf) => {
                // start < length == buf.len()
                let start = start as usize;
                out[..k].copy_from_slice(&buf[start..start + k]);
            }
            None => out[..k].fill(self.desc.value.to_raw()),
        }
        k
    }

    /// Iterate over the logical elements.
    pub fn iter(&self) -> Iter<'_> {
        let inner = match self.detached_buffer() {
            Some(buf) => IterInner::Buffer(buf.iter()),
            None => IterInner::Repeat {
                value: self.desc.value,
                remaining: self.desc.length,
            },
        };
        Iter { inner }
    }
}

impl<'a> IntoIterator for &'a RepInt {
    type Item = Int;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the elements of a [`RepInt`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: IterInner<'a>,
}

#[derive(Debug, Clone)]
enum IterInner<'a> {
    Repeat { value: Int, remaining: XLen },
    Buffer(slice::Iter<'a, i32>),
}

impl Iterator for Iter<'_> {
    type Item = Int;

    fn next(&mut self) -> Option<Int> {
        match &mut self.inner {
            IterInner::Repeat { value, remaining } => {
                if *remaining == 0 {
                    return None;
                }
                *remaining -= 1;
                Some(*value)
            }
            IterInner::Buffer(it) => it.next().map(|&raw| Int::from_raw(raw)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            IterInner::Repeat { remaining, .. } => match usize::try_from(*remaining) {
                Ok(n) => (n, Some(n)),
                Err(_) => (usize::MAX, None),
            },
            IterInner::Buffer(it) => it.size_hint(),
        }
    }
}

impl FusedIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use crate::{Int, RepInt, NA_INTEGER};

    #[test]
    fn test_elt_returns_value() {
        let v = RepInt::new(7, 5);
        for i in 0..5 {
            assert_eq!(v.elt(i).unwrap(), Int::Value(7));
        }
        assert!(!v.is_materialized());
    }

    #[test]
    fn test_elt_out_of_range() {
        let v = RepInt::new(7, 5);
        let err = v.elt(5).unwrap_err();
        assert!(err.is_index_out_of_range());
    }

    #[test]
    fn test_elt_on_empty() {
        let v = RepInt::new(1, 0);
        assert!(v.elt(0).unwrap_err().is_index_out_of_range());
    }

    #[test]
    fn test_elt_after_realize() {
        let v = RepInt::new(Int::Na, 3);
        v.realize().unwrap();
        assert_eq!(v.elt(2).unwrap(), Int::Na);
    }

    #[test]
    fn test_region_offset_starts_at_zero() {
        let v = RepInt::new(4, 5);
        let mut out = [-1; 10];
        let k = v.get_region(2, 10, &mut out);
        assert_eq!(k, 3);
        assert_eq!(&out[..3], &[4, 4, 4]);
        assert!(out[3..].iter().all(|&x| x == -1));
        assert!(!v.is_materialized());
    }

    #[test]
    fn test_region_past_end() {
        let v = RepInt::new(4, 5);
        let mut out = [-1; 3];
        assert_eq!(v.get_region(5, 3, &mut out), 0);
        assert_eq!(v.get_region(100, 3, &mut out), 0);
        assert_eq!(out, [-1, -1, -1]);
    }

    #[test]
    fn test_region_small_buffer() {
        let v = RepInt::new(Int::Na, 1_000);
        let mut out = [0; 4];
        assert_eq!(v.get_region(10, 500, &mut out), 4);
        assert_eq!(out, [NA_INTEGER; 4]);
    }

    #[test]
    fn test_region_detached_reads_buffer() {
        let mut v = RepInt::new(1, 5);
        v.realize_mut().unwrap().copy_from_slice(&[1, 2, 3, 4, 5]);
        let mut out = [0; 8];
        assert_eq!(v.get_region(1, 3, &mut out), 3);
        assert_eq!(&out[..4], &[2, 3, 4, 0]);
    }

    #[test]
    fn test_iter() {
        let v = RepInt::new(2, 3);
        let items: Vec<Int> = v.iter().collect();
        assert_eq!(items, vec![Int::Value(2); 3]);
        assert_eq!(v.iter().size_hint(), (3, Some(3)));
        assert!(!v.is_materialized());
    }

    #[test]
    fn test_iter_detached() {
        let mut v = RepInt::new(2, 3);
        v.realize_mut().unwrap()[0] = NA_INTEGER;
        let items: Vec<Int> = (&v).into_iter().collect();
        assert_eq!(items, vec![Int::Na, Int::Value(2), Int::Value(2)]);
    }
}
