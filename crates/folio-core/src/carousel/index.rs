//! Index arithmetic over a fixed-size cyclic list.
//!
//! All functions are identity / zero for lists of one item or fewer.

/// Successor of `i` in a cyclic list of `len` items
#[inline]
pub fn next_index(i: usize, len: usize) -> usize {
    if len <= 1 {
        return i;
    }
    (i + 1) % len
}

/// Predecessor of `i` in a cyclic list of `len` items
#[inline]
pub fn prev_index(i: usize, len: usize) -> usize {
    if len <= 1 {
        return i;
    }
    (i + len - 1) % len
}

/// Wrap any signed index into `[0, len)`. Negative indices count from the end.
///
/// Returns `None` for an empty list.
#[inline]
pub fn normalize_index(i: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(i.rem_euclid(len as isize) as usize)
}

/// Signed offset `d` with the smallest magnitude such that `(from + d) mod len == to`.
///
/// Ties (the antipodal item of an even-length list) resolve to the positive offset.
pub fn circular_distance(to: usize, from: usize, len: usize) -> isize {
    if len <= 1 {
        return 0;
    }
    let len = len as isize;
    let forward = (to as isize - from as isize).rem_euclid(len);
    if forward * 2 <= len {
        forward
    } else {
        forward - len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_prev_wrap() {
        assert_eq!(next_index(4, 5), 0);
        assert_eq!(prev_index(0, 5), 4);
        assert_eq!(next_index(1, 5), 2);
        assert_eq!(prev_index(3, 5), 2);
    }

    #[test]
    fn test_next_prev_inverse() {
        for len in 2..9 {
            for i in 0..len {
                assert_eq!(next_index(prev_index(i, len), len), i);
                assert_eq!(prev_index(next_index(i, len), len), i);
            }
        }
    }

    #[test]
    fn test_single_and_empty_are_identity() {
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(prev_index(0, 1), 0);
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
        assert_eq!(circular_distance(0, 0, 1), 0);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let len = 7;
        for start in 0..len {
            let mut i = start;
            for _ in 0..len {
                i = next_index(i, len);
            }
            assert_eq!(i, start);
        }
    }

    #[test]
    fn test_circular_distance_odd() {
        // active = 0 in a list of 5
        let offsets: Vec<isize> = (0..5).map(|i| circular_distance(i, 0, 5)).collect();
        assert_eq!(offsets, vec![0, 1, 2, -2, -1]);
    }

    #[test]
    fn test_circular_distance_even_tie_is_positive() {
        assert_eq!(circular_distance(2, 0, 4), 2);
        assert_eq!(circular_distance(0, 2, 4), 2);
        assert_eq!(circular_distance(3, 0, 4), -1);
    }

    #[test]
    fn test_circular_distance_satisfies_definition() {
        for len in 1..10usize {
            for from in 0..len {
                for to in 0..len {
                    let d = circular_distance(to, from, len);
                    let landed = (from as isize + d).rem_euclid(len as isize) as usize;
                    assert_eq!(landed, to);
                    assert!(d.unsigned_abs() * 2 <= len);
                }
            }
        }
    }

    #[test]
    fn test_normalize_index() {
        assert_eq!(normalize_index(7, 5), Some(2));
        assert_eq!(normalize_index(-1, 5), Some(4));
        assert_eq!(normalize_index(3, 5), Some(3));
        assert_eq!(normalize_index(3, 0), None);
    }
}
