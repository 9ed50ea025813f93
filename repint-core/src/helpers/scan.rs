//! Element-by-element reductions over a raw buffer.
//!
//! These are the plain-array algorithms used once a handle is detached. They
//! follow the same contracts as the descriptor shortcuts in [`crate::ops`].

use crate::{Int, RepError, NA_INTEGER};

/// Sum with a checked 64-bit accumulator. `Ok(None)` if a missing value
/// propagates.
pub fn sum(buf: &[i32], na_rm: bool) -> Result<Option<i64>, RepError> {
    let mut acc: i64 = 0;
    for &raw in buf {
        if raw == NA_INTEGER {
            if na_rm {
                continue;
            }
            return Ok(None);
        }
        acc = acc
            .checked_add(i64::from(raw))
            .ok_or_else(|| RepError::integer_overflow(buf.len() as u64))?;
    }
    Ok(Some(acc))
}

/// Minimum element.
pub fn min(buf: &[i32], na_rm: bool) -> Result<Int, RepError> {
    extreme(buf, na_rm, "min", |a, b| a.min(b))
}

/// Maximum element.
pub fn max(buf: &[i32], na_rm: bool) -> Result<Int, RepError> {
    extreme(buf, na_rm, "max", |a, b| a.max(b))
}

fn extreme(
    buf: &[i32],
    na_rm: bool,
    op: &'static str,
    pick: impl Fn(i32, i32) -> i32,
) -> Result<Int, RepError> {
    let mut best: Option<i32> = None;
    for &raw in buf {
        if raw == NA_INTEGER {
            if na_rm {
                continue;
            }
            return Ok(Int::Na);
        }
        best = Some(best.map_or(raw, |b| pick(b, raw)));
    }
    best.map(Int::Value)
        .ok_or_else(|| RepError::empty_reduction(op))
}

/// True if the buffer is constant, or monotone without missing values.
pub fn is_sorted(buf: &[i32]) -> bool {
    let constant = buf.windows(2).all(|w| w[0] == w[1]);
    if constant {
        return true;
    }
    if !no_na(buf) {
        return false;
    }
    buf.windows(2).all(|w| w[0] <= w[1]) || buf.windows(2).all(|w| w[0] >= w[1])
}

/// True if no element is missing.
pub fn no_na(buf: &[i32]) -> bool {
    !buf.contains(&NA_INTEGER)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NA: i32 = NA_INTEGER;

    #[test]
    fn test_sum() {
        assert_eq!(sum(&[1, 2, 3], false).unwrap(), Some(6));
        assert_eq!(sum(&[], false).unwrap(), Some(0));
        assert_eq!(sum(&[1, NA, 3], false).unwrap(), None);
        assert_eq!(sum(&[1, NA, 3], true).unwrap(), Some(4));
        assert_eq!(sum(&[NA, NA], true).unwrap(), Some(0));
    }

    #[test]
    fn test_sum_is_wide() {
        let buf = [i32::MAX; 4];
        assert_eq!(sum(&buf, false).unwrap(), Some(4 * i64::from(i32::MAX)));
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min(&[3, -1, 2], false).unwrap(), Int::Value(-1));
        assert_eq!(max(&[3, -1, 2], false).unwrap(), Int::Value(3));
        assert_eq!(max(&[3, NA, 2], false).unwrap(), Int::Na);
        assert_eq!(max(&[3, NA, 2], true).unwrap(), Int::Value(3));
    }

    #[test]
    fn test_min_max_empty() {
        assert!(min(&[], false).unwrap_err().is_empty_reduction());
        assert!(max(&[NA, NA], true).unwrap_err().is_empty_reduction());
        // Without na_rm the missing value wins before emptiness matters.
        assert_eq!(max(&[NA], false).unwrap(), Int::Na);
    }

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted(&[]));
        assert!(is_sorted(&[4, 4, 4]));
        assert!(is_sorted(&[NA, NA]));
        assert!(is_sorted(&[1, 2, 2, 5]));
        assert!(is_sorted(&[5, 2, 2, 1]));
        assert!(!is_sorted(&[1, 3, 2]));
        assert!(!is_sorted(&[1, 2, NA]));
    }

    #[test]
    fn test_no_na() {
        assert!(no_na(&[]));
        assert!(no_na(&[1, 2]));
        assert!(!no_na(&[1, NA]));
    }
}
