//! Index lookups in ascending sorted slices.
//!
//! These locate the bracketing entries for a key in a sorted table, the first
//! step of any tabulated interpolation. All four are `O(log n)` binary
//! searches and treat runs of equal elements consistently:
//!
//! | Function | Returns | Among duplicates of `key` |
//! |----------|---------|---------------------------|
//! | [`last_less_than_or_equal_to`] | last `i` with `s[i] <= key` | last duplicate |
//! | [`last_less_than`] | last `i` with `s[i] < key` | just before the first duplicate |
//! | [`first_greater_than_or_equal_to`] | first `i` with `s[i] >= key` | first duplicate |
//! | [`first_greater_than`] | first `i` with `s[i] > key` | just after the last duplicate |
//!
//! The "last" searches return `None` when the key precedes every element. The
//! "first" searches return `s.len()` when the key follows every element, which
//! is the insertion point.
//!
//! ```
//! use spacemath_core::collections::search::*;
//!
//! let table = [0.0, 2.0, 2.0, 2.0, 4.0, 4.0, 5.0, 7.0];
//! assert_eq!(last_less_than_or_equal_to(&table, &2.0), Some(3));
//! assert_eq!(last_less_than(&table, &2.0), Some(0));
//! assert_eq!(first_greater_than_or_equal_to(&table, &2.0), 1);
//! assert_eq!(first_greater_than(&table, &2.0), 4);
//! ```
//!
//! Comparisons with NaN are false, so a table or key containing NaN gives an
//! unspecified (but in-bounds) result.

use std::cmp::Ordering;

/// Last index whose element is `<= key`.
pub fn last_less_than_or_equal_to<T: PartialOrd>(sorted: &[T], key: &T) -> Option<usize> {
    sorted.partition_point(|x| x <= key).checked_sub(1)
}

/// Last index whose element is `< key`.
pub fn last_less_than<T: PartialOrd>(sorted: &[T], key: &T) -> Option<usize> {
    sorted.partition_point(|x| x < key).checked_sub(1)
}

/// First index whose element is `>= key`, or `sorted.len()`.
pub fn first_greater_than_or_equal_to<T: PartialOrd>(sorted: &[T], key: &T) -> usize {
    sorted.partition_point(|x| x < key)
}

/// First index whose element is `> key`, or `sorted.len()`.
pub fn first_greater_than<T: PartialOrd>(sorted: &[T], key: &T) -> usize {
    sorted.partition_point(|x| x <= key)
}

/// [`last_less_than_or_equal_to`] with `compare(element)` giving the ordering
/// of each element relative to the key, as in [`slice::binary_search_by`].
pub fn last_less_than_or_equal_to_by<T, F>(sorted: &[T], mut compare: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    sorted
        .partition_point(|x| compare(x) != Ordering::Greater)
        .checked_sub(1)
}

pub fn last_less_than_by<T, F>(sorted: &[T], mut compare: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    sorted
        .partition_point(|x| compare(x) == Ordering::Less)
        .checked_sub(1)
}

pub fn first_greater_than_or_equal_to_by<T, F>(sorted: &[T], mut compare: F) -> usize
where
    F: FnMut(&T) -> Ordering,
{
    sorted.partition_point(|x| compare(x) == Ordering::Less)
}

pub fn first_greater_than_by<T, F>(sorted: &[T], mut compare: F) -> usize
where
    F: FnMut(&T) -> Ordering,
{
    sorted.partition_point(|x| compare(x) != Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TABLE: [f64; 8] = [0.0, 2.0, 2.0, 2.0, 4.0, 4.0, 5.0, 7.0];

    #[rstest]
    #[case(-1.0, None, None, 0, 0)]
    #[case(0.0, Some(0), None, 0, 1)]
    #[case(1.0, Some(0), Some(0), 1, 1)]
    #[case(2.0, Some(3), Some(0), 1, 4)]
    #[case(3.0, Some(3), Some(3), 4, 4)]
    #[case(4.0, Some(5), Some(3), 4, 6)]
    #[case(7.0, Some(7), Some(6), 7, 8)]
    #[case(9.0, Some(7), Some(7), 8, 8)]
    fn test_searches(
        #[case] key: f64,
        #[case] last_le: Option<usize>,
        #[case] last_lt: Option<usize>,
        #[case] first_ge: usize,
        #[case] first_gt: usize,
    ) {
        assert_eq!(last_less_than_or_equal_to(&TABLE, &key), last_le);
        assert_eq!(last_less_than(&TABLE, &key), last_lt);
        assert_eq!(first_greater_than_or_equal_to(&TABLE, &key), first_ge);
        assert_eq!(first_greater_than(&TABLE, &key), first_gt);
    }

    #[test]
    fn test_empty() {
        let empty: [i32; 0] = [];
        assert_eq!(last_less_than_or_equal_to(&empty, &1), None);
        assert_eq!(last_less_than(&empty, &1), None);
        assert_eq!(first_greater_than_or_equal_to(&empty, &1), 0);
        assert_eq!(first_greater_than(&empty, &1), 0);
    }

    #[test]
    fn test_by_variants_match() {
        let epochs: Vec<(i64, char)> = vec![(10, 'a'), (20, 'b'), (20, 'c'), (35, 'd')];
        let keys: Vec<i64> = epochs.iter().map(|(t, _)| *t).collect();

        for key in [5, 10, 20, 30, 35, 40] {
            let cmp = |entry: &(i64, char)| entry.0.cmp(&key);
            assert_eq!(
                last_less_than_or_equal_to_by(&epochs, cmp),
                last_less_than_or_equal_to(&keys, &key)
            );
            assert_eq!(last_less_than_by(&epochs, cmp), last_less_than(&keys, &key));
            assert_eq!(
                first_greater_than_or_equal_to_by(&epochs, cmp),
                first_greater_than_or_equal_to(&keys, &key)
            );
            assert_eq!(
                first_greater_than_by(&epochs, cmp),
                first_greater_than(&keys, &key)
            );
        }
    }
}
