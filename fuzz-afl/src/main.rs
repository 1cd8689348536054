#[macro_use]
extern crate afl;

fn main() {
    fuzz!(|data: &[u8]| {
        // Last byte is the target, the rest is the input.
        if let Some((target, rest)) = data.split_last() {
            let mut v = rest.to_vec();
            v.sort_unstable();

            let found = branchless_lower_bound::lower_bound(&v, target);
            assert_eq!(found, v.partition_point(|elem| elem < target));
        }
    });
}
