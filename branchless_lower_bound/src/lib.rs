//! Branchless lower bound search over sorted slices.
//!
//! Returns the same index as a classic branchy lower bound, but the choice of which half to keep
//! is computed with arithmetic instead of a conditional jump. The only branch left in the hot loop
//! is the loop condition itself, which depends on the length alone and is trivially predictable.
//!
//! The number of comparisons is a function of the slice length only, see [`comparison_count`].
//!
//! ```text
//! let v = [1, 2, 2, 2, 5, 8];
//! assert_eq!(lower_bound(&v, &2), 1);
//! assert_eq!(lower_bound(&v, &6), 5);
//! assert_eq!(lower_bound(&v, &9), 6);
//! ```

#![cfg_attr(not(test), no_std)]

/// Returns the index of the first element for which `pred` returns `false`.
///
/// The slice must be partitioned by `pred`, all elements for which it returns `true` must precede
/// all elements for which it returns `false`. If that doesn't hold the result is unspecified, but
/// always in `0..=v.len()`.
///
/// `pred` is called exactly [`comparison_count`]`(v.len())` times, no matter where the partition
/// point lies.
#[inline]
pub fn partition_point<T, P>(v: &[T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let mut n = v.len();
    if n == 0 {
        return 0;
    }

    // Invariant: base + n <= v.len() and the result lies in [base, base + n].
    let mut base = 0usize;

    while n > 1 {
        let half = n / 2;
        debug_assert!(base + half < v.len());

        // SAFETY: half < n, so base + half < base + n <= v.len(). Both outcomes below preserve
        // base + n, either base grows by half while n shrinks by half, or base stays and n shrinks.
        let is_before = pred(unsafe { v.get_unchecked(base + half) });

        // Must stay a select, a branch here would be data-dependent.
        base += (is_before as usize) * half;
        n -= half;
    }

    debug_assert!(base < v.len());

    // SAFETY: The loop ends with n == 1, and base + n <= v.len().
    let is_before = pred(unsafe { v.get_unchecked(base) });

    base + (is_before as usize)
}

/// Returns the index of the first element in the sorted slice `v` that is not less than `value`.
///
/// For duplicate keys this is the leftmost occurrence. Returns `v.len()` if every element is less
/// than `value`.
#[inline]
pub fn lower_bound<T>(v: &[T], value: &T) -> usize
where
    T: Ord,
{
    partition_point(v, |elem| elem < value)
}

/// Like [`lower_bound`] but with a custom `is_less(elem, value)` comparison.
///
/// `is_less` has to describe a strict weak ordering that `v` is sorted by. The target may be of a
/// different type than the elements. The comparison is free to carry state, it is invoked exactly
/// [`comparison_count`]`(v.len())` times.
#[inline]
pub fn lower_bound_by<T, U, F>(v: &[T], value: &U, mut is_less: F) -> usize
where
    U: ?Sized,
    F: FnMut(&T, &U) -> bool,
{
    partition_point(v, |elem| is_less(elem, value))
}

/// Like [`lower_bound`] but compares the key extracted by `f` from every probed element.
#[inline]
pub fn lower_bound_by_key<T, K, F>(v: &[T], key: &K, mut f: F) -> usize
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    partition_point(v, |elem| f(elem) < *key)
}

/// Number of comparisons performed by a search over `len` elements.
///
/// Zero for an empty slice, otherwise `ceil(log2(len)) + 1`. That is at most one more than the
/// worst case of a classic branchy lower bound.
///
/// This is not the bit length of `len`: for `len == 3` the loop probes twice before the final
/// comparison, three calls, while `3` has a bit length of two.
#[inline]
pub const fn comparison_count(len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    // Bit length of (len - 1) == ceil(log2(len)), without overflowing next_power_of_two.
    (usize::BITS - (len - 1).leading_zeros()) as usize + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        let v: [i32; 0] = [];
        let mut calls = 0;
        assert_eq!(
            lower_bound_by(&v, &5, |a, b| {
                calls += 1;
                a < b
            }),
            0
        );
        assert_eq!(calls, 0);
    }

    #[test]
    fn duplicates_leftmost() {
        let v = [1, 2, 2, 2, 5, 8];
        assert_eq!(lower_bound(&v, &0), 0);
        assert_eq!(lower_bound(&v, &2), 1);
        assert_eq!(lower_bound(&v, &3), 4);
        assert_eq!(lower_bound(&v, &6), 5);
        assert_eq!(lower_bound(&v, &8), 5);
        assert_eq!(lower_bound(&v, &9), 6);
    }

    #[test]
    fn by_key() {
        let v = [(1, 'a'), (3, 'b'), (3, 'c'), (7, 'd')];
        assert_eq!(lower_bound_by_key(&v, &3, |&(k, _)| k), 1);
        assert_eq!(lower_bound_by_key(&v, &4, |&(k, _)| k), 3);
    }

    #[test]
    fn comparison_count_small() {
        let expected = [0, 1, 2, 3, 3, 4, 4, 4, 4, 5];
        for (len, count) in expected.iter().enumerate() {
            assert_eq!(comparison_count(len), *count, "len: {len}");
        }

        assert_eq!(comparison_count(1 << 20), 21);
        assert_eq!(comparison_count((1 << 20) + 1), 22);
        assert_eq!(comparison_count(usize::MAX), usize::BITS as usize + 1);
    }

    #[test]
    fn zero_sized_elements() {
        let v = [(); 1000];
        assert_eq!(partition_point(&v, |_| true), 1000);
        assert_eq!(partition_point(&v, |_| false), 0);
    }
}
