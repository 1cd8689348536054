#![no_main]

use libfuzzer_sys::fuzz_target;

use search_comp_fuzz::util::sorted_and_target;

fuzz_target!(|data: &[u8]| {
    if let Some((v, target)) = sorted_and_target(data) {
        let found = branchless_lower_bound::lower_bound(&v, &target);
        assert_eq!(found, v.partition_point(|elem| *elem < target));
    }
});
