//! Bootstrap resampling of observation pairs.
//!
//! Off by default: the benchmark fits the same sample every iteration. When a
//! base seed is supplied, iteration `i` instead fits `n` pairs drawn with
//! replacement from an RNG seeded with `seed + i`. The draw depends only on the
//! seed and the iteration index, never on which worker runs it or when.

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::domain::Sample;

/// Per-iteration seed derived from the run's base seed.
pub fn iteration_seed(base_seed: u64, iteration: usize) -> u64 {
    base_seed.wrapping_add(iteration as u64)
}

/// Draw `sample.len()` (x, y) pairs with replacement.
pub fn bootstrap_sample(sample: &Sample, seed: u64) -> Sample {
    let n = sample.len();
    if n == 0 {
        return sample.clone();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut x = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);
    for _ in 0..n {
        let idx = rng.gen_range(0..n);
        x.push(sample.x[idx]);
        y.push(sample.y[idx]);
    }

    Sample { x, y }
}
