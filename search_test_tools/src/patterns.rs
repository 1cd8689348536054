use std::env;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use rand::prelude::*;

use once_cell::sync::OnceCell;

/// Provides input patterns for testing and benchmarking searches.
/// The patterns are not sorted, sort them before searching.

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_seed();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = new_seed();

    // Abstracting over ranges in Rust :(
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_squared(len: usize) -> Vec<i64> {
    //        :
    //      .::
    // ...:::::

    // Squaring a uniform value skews the distribution towards large magnitudes.
    // i32 * i32 always fits into i64.
    let mut rng = new_seed();

    (0..len)
        .map(|_| {
            let val = rng.gen::<i32>() as i64;
            val * val
        })
        .collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..len).map(|_| 66).collect::<Vec<_>>()
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect::<Vec<_>>()
}

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

/// Seed used by all patterns.
///
/// Fixed for the whole process, unless [`disable_fixed_seed`] was called. Set the env var
/// `OVERRIDE_SEED` to the seed printed by a failing test to replay it.
pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        static SEED: OnceCell<u64> = OnceCell::new();
        *SEED.get_or_init(|| -> u64 {
            if let Ok(val) = env::var("OVERRIDE_SEED") {
                u64::from_str(&val)
                    .unwrap_or_else(|_| panic!("Invalid OVERRIDE_SEED value: '{val}'"))
            } else {
                thread_rng().gen()
            }
        })
    } else {
        thread_rng().gen()
    }
}

// --- Private ---

fn new_seed() -> StdRng {
    // Random seed, printed by the tests and replayable with OVERRIDE_SEED.
    rand::SeedableRng::seed_from_u64(random_init_seed())
}
