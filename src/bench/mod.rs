//! Repeated-fit aggregation.
//!
//! Both strategies run exactly `ITERATIONS` independent fits over the same
//! read-only sample and reduce them to averages. They differ only in how the
//! fits are scheduled:
//!
//! - `sequential`: a plain loop on the calling thread
//! - `concurrent`: one task per fit on a rayon pool, results funneled through
//!   a bounded channel to a collector draining them as they arrive
//!
//! The reduction sums in iteration-index order, so both strategies return
//! identical averages regardless of completion order.

use rayon::ThreadPool;

use crate::domain::{FitResult, Sample, Strategy};
use crate::error::AppError;
use crate::fit::{bootstrap_sample, fit_metrics, iteration_seed};

pub mod concurrent;
pub mod sequential;

pub use concurrent::run_concurrent;
pub use sequential::run_sequential;

/// Reduced output of one aggregation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregate {
    pub avg: FitResult,
    /// Number of results that went into `avg` (always `ITERATIONS` on success).
    pub fits: usize,
}

/// Run `ITERATIONS` fits with the given strategy and average the metrics.
///
/// `pool` hosts the concurrent tasks; the sequential strategy ignores it.
/// Must not be called from one of `pool`'s own workers.
pub fn aggregate(
    strategy: Strategy,
    pool: &ThreadPool,
    sample: &Sample,
    bootstrap_seed: Option<u64>,
) -> Result<Aggregate, AppError> {
    match strategy {
        Strategy::Sequential => Ok(run_sequential(sample, bootstrap_seed)),
        Strategy::Concurrent => run_concurrent(pool, sample, bootstrap_seed),
    }
}

/// One unit of work: fit iteration `iteration` of the run.
pub(crate) fn fit_iteration(
    sample: &Sample,
    bootstrap_seed: Option<u64>,
    iteration: usize,
) -> FitResult {
    match bootstrap_seed {
        Some(seed) => {
            let resampled = bootstrap_sample(sample, iteration_seed(seed, iteration));
            fit_metrics(&resampled.x, &resampled.y)
        }
        None => fit_metrics(&sample.x, &sample.y),
    }
}

/// Running sums of fit metrics.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Accumulator {
    mse: f64,
    aic: f64,
    bic: f64,
    count: usize,
}

impl Accumulator {
    pub(crate) fn add(&mut self, fit: &FitResult) {
        self.mse += fit.mse;
        self.aic += fit.aic;
        self.bic += fit.bic;
        self.count += 1;
    }

    pub(crate) fn finish(self) -> Aggregate {
        let n = self.count as f64;
        Aggregate {
            avg: FitResult {
                mse: self.mse / n,
                aic: self.aic / n,
                bic: self.bic / n,
            },
            fits: self.count,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::domain::Sample;

    pub fn pool(threads: usize) -> rayon::ThreadPool {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .unwrap()
    }

    /// A small noisy line so the metrics are finite.
    pub fn noisy_sample() -> Sample {
        let x: Vec<f64> = (0..50).map(|i| i as f64 * 0.3).collect();
        let y = x
            .iter()
            .enumerate()
            .map(|(i, v)| 4.0 - 1.5 * v + ((i * 7) % 5) as f64 * 0.2)
            .collect();
        Sample { x, y }
    }

    pub fn rel_close(a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{noisy_sample, pool, rel_close};
    use super::*;
    use crate::domain::ITERATIONS;

    #[test]
    fn strategies_agree_on_fixed_sample() {
        let s = noisy_sample();
        let seq = aggregate(Strategy::Sequential, &pool(4), &s, None).unwrap();
        let conc = aggregate(Strategy::Concurrent, &pool(4), &s, None).unwrap();

        assert_eq!(seq.fits, ITERATIONS);
        assert_eq!(conc.fits, ITERATIONS);
        assert!(rel_close(seq.avg.mse, conc.avg.mse));
        assert!(rel_close(seq.avg.aic, conc.avg.aic));
        assert!(rel_close(seq.avg.bic, conc.avg.bic));
    }

    #[test]
    fn strategies_agree_with_bootstrap() {
        let s = noisy_sample();
        let seq = aggregate(Strategy::Sequential, &pool(4), &s, Some(42)).unwrap();
        let conc = aggregate(Strategy::Concurrent, &pool(4), &s, Some(42)).unwrap();
        assert_eq!(seq, conc);
    }

    #[test]
    fn average_of_identical_fits_is_the_single_fit() {
        let s = noisy_sample();
        let single = fit_metrics(&s.x, &s.y);
        let agg = aggregate(Strategy::Sequential, &pool(4), &s, None).unwrap();
        assert!(rel_close(agg.avg.mse, single.mse));
        assert!(rel_close(agg.avg.aic, single.aic));
        assert!(rel_close(agg.avg.bic, single.bic));
    }

    #[test]
    fn bootstrap_changes_the_average() {
        let s = noisy_sample();
        let plain = aggregate(Strategy::Sequential, &pool(4), &s, None).unwrap();
        let boot = aggregate(Strategy::Sequential, &pool(4), &s, Some(3)).unwrap();
        assert_ne!(plain.avg.mse, boot.avg.mse);
    }

    #[test]
    fn degenerate_sample_propagates_non_finite() {
        let s = Sample {
            x: vec![1.0, 2.0, 3.0],
            y: vec![2.0, 4.0, 6.0],
        };
        let agg = aggregate(Strategy::Concurrent, &pool(4), &s, None).unwrap();
        assert_eq!(agg.avg.mse, 0.0);
        assert_eq!(agg.avg.aic, f64::NEG_INFINITY);
        assert_eq!(agg.avg.bic, f64::NEG_INFINITY);
    }
}
