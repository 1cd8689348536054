lower_bound_impl!("branchless_halving", true);

#[cfg_attr(feature = "no_inline_search", inline(never))]
pub fn partition_point<T, P>(v: &[T], pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    branchless_lower_bound::partition_point(v, pred)
}
