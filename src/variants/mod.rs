// The search this repository is about, see the branchless_lower_bound crate.
pub mod branchless;

// Same algorithm, with the select written as mask-and-add.
pub mod branchless_bitwise;

// Power of two steps, one data-dependent branch at the start.
pub mod branchless_power_of_two;

// Classic lower bound with a data-dependent branch per step.
pub mod branchy;

pub mod std;
