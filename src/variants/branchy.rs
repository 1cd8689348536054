lower_bound_impl!("branchy");

/// Classic lower bound, the shape of C++ `std::lower_bound`.
///
/// Excludes the probed element on every step, so it needs slightly fewer comparisons than the
/// branchless variants. Which side is kept is a branch on the comparison result.
#[cfg_attr(feature = "no_inline_search", inline(never))]
pub fn partition_point<T, P>(v: &[T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let mut first = 0usize;
    let mut count = v.len();

    while count > 0 {
        let step = count / 2;
        let mid = first + step;

        if pred(&v[mid]) {
            first = mid + 1;
            count -= step + 1;
        } else {
            count = step;
        }
    }

    first
}
