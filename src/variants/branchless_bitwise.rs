lower_bound_impl!("branchless_bitwise", true);

#[cfg_attr(feature = "no_inline_search", inline(never))]
pub fn partition_point<T, P>(v: &[T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let mut n = v.len();
    if n == 0 {
        return 0;
    }

    let mut base = 0usize;

    while n > 1 {
        let half = n / 2;

        // SAFETY: base + n <= v.len() holds throughout, and half < n.
        let is_before = pred(unsafe { v.get_unchecked(base + half) });

        // All ones if is_before, zero otherwise.
        let mask = (is_before as usize).wrapping_neg();
        base += half & mask;
        n -= half;
    }

    // SAFETY: n == 1 and base + n <= v.len().
    let is_before = pred(unsafe { v.get_unchecked(base) });

    base + (is_before as usize)
}
