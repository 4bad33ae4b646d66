//! Sequential strategy: one fit after another on the calling thread.

use log::debug;

use super::{Accumulator, Aggregate, fit_iteration};
use crate::domain::{ITERATIONS, Sample};

pub fn run_sequential(sample: &Sample, bootstrap_seed: Option<u64>) -> Aggregate {
    let mut acc = Accumulator::default();
    for iteration in 0..ITERATIONS {
        acc.add(&fit_iteration(sample, bootstrap_seed, iteration));
    }
    debug!("sequential: reduced {ITERATIONS} fits");
    acc.finish()
}
