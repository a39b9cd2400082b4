//! The random integer collection workload

use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

use rand::Rng;

/// The inclusive range every generated integer is drawn from
pub const VALUE_RANGE: RangeInclusive<i64> = 0..=1_000_000;

/// Generate a collection of `size` integers drawn uniformly from [`VALUE_RANGE`]
///
/// Every element is sampled independently with the thread-local RNG, so two
/// collections of the same size almost certainly differ.
pub fn generate(size: usize) -> Vec<i64> {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen_range(VALUE_RANGE)).collect()
}

/// Sort `values` in place into non-decreasing order and return the elapsed time
///
/// The sort is a general-purpose comparison sort. Stability is not required
/// since the elements are plain integers without a secondary key.
pub fn sort_timed(values: &mut [i64]) -> Duration {
    let start = Instant::now();
    values.sort_unstable();
    start.elapsed()
}
