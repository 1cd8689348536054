pub trait LowerBound {
    fn name() -> String;

    /// Whether the number of comparisons depends on the input length alone, and not on the
    /// searched value.
    fn fixed_comparison_count() -> bool {
        false
    }

    fn partition_point<T, P>(v: &[T], pred: P) -> usize
    where
        P: FnMut(&T) -> bool;

    fn lower_bound<T>(v: &[T], value: &T) -> usize
    where
        T: Ord,
    {
        Self::partition_point(v, |elem| elem < value)
    }

    fn lower_bound_by<T, U, F>(v: &[T], value: &U, mut is_less: F) -> usize
    where
        U: ?Sized,
        F: FnMut(&T, &U) -> bool,
    {
        Self::partition_point(v, |elem| is_less(elem, value))
    }
}

#[doc(hidden)]
pub use paste;

pub mod patterns;
