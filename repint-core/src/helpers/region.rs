//! Region-read clamping.

use crate::XLen;

/// Number of elements a region read may copy.
///
/// Clamps `count` to the elements remaining after `start` and to the
/// caller's buffer. A `start` at or past the end yields 0.
#[inline]
pub fn region_len(start: XLen, count: XLen, total_len: XLen, out_len: usize) -> usize {
    let available = total_len.saturating_sub(start).min(count);
    usize::try_from(available).map_or(out_len, |n| n.min(out_len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps_to_remaining() {
        assert_eq!(region_len(2, 10, 5, 16), 3);
        assert_eq!(region_len(0, 10, 5, 16), 5);
    }

    #[test]
    fn test_clamps_to_count() {
        assert_eq!(region_len(1, 2, 5, 16), 2);
    }

    #[test]
    fn test_clamps_to_buffer() {
        assert_eq!(region_len(0, 100, 100, 4), 4);
    }

    #[test]
    fn test_start_past_end() {
        assert_eq!(region_len(5, 3, 5, 8), 0);
        assert_eq!(region_len(9, 3, 5, 8), 0);
    }

    #[test]
    fn test_huge_lengths() {
        assert_eq!(region_len(0, u64::MAX, u64::MAX, 8), 8);
    }
}
