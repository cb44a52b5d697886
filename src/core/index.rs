//! Index wrapping shared by every looping widget.

/// Wraps a possibly negative or out-of-range index into `[0, len)`.
///
/// Uses `((i % len) + len) % len` so negative inputs land on the tail.
/// Returns `None` when `len` is zero.
#[inline]
pub fn wrap_index(index: i64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let len = len as i64;
    Some((((index % len) + len) % len) as usize)
}

/// Moves `steps` positions from `current` in a ring of `len` items.
#[inline]
pub fn step(current: usize, steps: i64, len: usize) -> Option<usize> {
    wrap_index(current as i64 + steps, len)
}

/// Whether `current + steps` leaves `[0, len)` before wrapping.
#[inline]
pub fn crosses_boundary(current: usize, steps: i64, len: usize) -> bool {
    let target = current as i64 + steps;
    target < 0 || target >= len as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_in_range() {
        for i in 0..5 {
            assert_eq!(wrap_index(i, 5), Some(i as usize));
        }
    }

    #[test]
    fn test_wrap_negative() {
        assert_eq!(wrap_index(-1, 3), Some(2));
        assert_eq!(wrap_index(-3, 3), Some(0));
        assert_eq!(wrap_index(-7, 3), Some(2));
    }

    #[test]
    fn test_wrap_past_end() {
        assert_eq!(wrap_index(3, 3), Some(0));
        assert_eq!(wrap_index(5, 3), Some(2));
        assert_eq!(wrap_index(301, 3), Some(1));
    }

    #[test]
    fn test_wrap_matches_formula() {
        let n = 7_i64;
        for i in -50..50 {
            assert_eq!(wrap_index(i, n as usize), Some((((i % n) + n) % n) as usize));
        }
    }

    #[test]
    fn test_wrap_empty() {
        assert_eq!(wrap_index(0, 0), None);
        assert_eq!(step(0, 1, 0), None);
    }

    #[test]
    fn test_step_inverse() {
        for n in 1..6 {
            for i in 0..n {
                let forward = step(i, 1, n).unwrap();
                assert_eq!(step(forward, -1, n), Some(i));
            }
        }
    }

    #[test]
    fn test_crosses_boundary() {
        assert!(crosses_boundary(2, 1, 3));
        assert!(crosses_boundary(0, -1, 3));
        assert!(!crosses_boundary(1, 1, 3));
        assert!(!crosses_boundary(1, -1, 3));
    }
}
