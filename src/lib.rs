macro_rules! lower_bound_impl {
    ($name:expr) => {
        lower_bound_impl!($name, false);
    };
    ($name:expr, $fixed_comparison_count:expr) => {
        pub struct LowerBoundImpl;

        impl search_test_tools::LowerBound for LowerBoundImpl {
            fn name() -> String {
                $name.into()
            }

            fn fixed_comparison_count() -> bool {
                $fixed_comparison_count
            }

            #[inline]
            fn partition_point<T, P>(v: &[T], pred: P) -> usize
            where
                P: FnMut(&T) -> bool,
            {
                partition_point(v, pred)
            }
        }
    };
}

pub use search_test_tools::{patterns, LowerBound};

pub mod variants;
