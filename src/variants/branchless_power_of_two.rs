lower_bound_impl!("branchless_power_of_two");

/// Searches with power of two step sizes.
///
/// The first probe splits off the largest power of two prefix. If the result lies behind it, the
/// search continues on the power of two sized window aligned to the end of the slice. That single
/// decision is a branch, every step after it is branchless.
///
/// Unlike the halving search the comparison count depends on the searched value. For lengths that
/// are not a power of two, values past the first probe can finish early.
#[cfg_attr(feature = "no_inline_search", inline(never))]
pub fn partition_point<T, P>(v: &[T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let len = v.len();
    if len == 0 {
        return 0;
    }

    let mut begin = 0usize;
    let mut step = 1usize << len.ilog2();

    // step < len here, len < 2 * step.
    if step != len && pred(&v[step]) {
        let rest = len - (step + 1);
        if rest == 0 {
            return len;
        }

        // rest < step, so the window [len - step, len) starts past zero and no later than
        // step + 1. Everything in front of it is known to satisfy pred.
        step = rest.next_power_of_two();
        begin = len - step;
    }

    // Invariant: begin + step <= len, the result lies in [begin, begin + step].
    step /= 2;
    while step != 0 {
        debug_assert!(begin + step < len);

        // SAFETY: The window shrinks from [begin, begin + 2 * step), which is in bounds.
        let is_before = pred(unsafe { v.get_unchecked(begin + step) });
        begin += (is_before as usize) * step;
        step /= 2;
    }

    debug_assert!(begin < len);

    // SAFETY: The window has size one, begin + 1 <= len.
    let is_before = pred(unsafe { v.get_unchecked(begin) });

    begin + (is_before as usize)
}
