lower_bound_impl!("std");

#[cfg_attr(feature = "no_inline_search", inline(never))]
pub fn partition_point<T, P>(v: &[T], pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    // The implementation depends on the toolchain version, so does its comparison count.
    v.partition_point(pred)
}
