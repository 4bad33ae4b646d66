//! The timed benchmark pipeline.
//!
//! One timed run is: load CSV -> extract predictor/response -> aggregate
//! `ITERATIONS` fits -> reduce. The timer covers all of it, load included.

use std::path::Path;
use std::time::Instant;

use log::info;
use rayon::ThreadPool;

use crate::bench::aggregate;
use crate::domain::{RunConfig, RunSummary, Sample, Strategy};
use crate::error::AppError;
use crate::io::load_dataset;

/// Execute one timed run with a single strategy.
pub fn run_strategy(
    path: &Path,
    strategy: Strategy,
    pool: &ThreadPool,
    bootstrap_seed: Option<u64>,
) -> Result<RunSummary, AppError> {
    let start = Instant::now();

    let dataset = load_dataset(path)?;
    let sample = Sample::from_dataset(&dataset);
    let agg = aggregate(strategy, pool, &sample, bootstrap_seed)?;

    let elapsed = start.elapsed();
    info!(
        "{}: {} fits over {} rows in {elapsed:?}",
        strategy.display_name(),
        agg.fits,
        sample.len()
    );

    Ok(RunSummary {
        strategy,
        avg: agg.avg,
        fits: agg.fits,
        elapsed,
    })
}

/// Execute every configured strategy, in order, sharing one worker pool.
///
/// Fails fast: the first error aborts the remaining strategies and no summary
/// is returned.
pub fn run_benchmark(config: &RunConfig) -> Result<Vec<RunSummary>, AppError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .thread_name(|i| format!("regbench-fit-{i}"))
        .build()
        .map_err(|e| AppError::runtime(format!("Failed to build worker pool: {e}")))?;

    config
        .strategies
        .iter()
        .map(|&strategy| {
            run_strategy(&config.dataset_path, strategy, &pool, config.bootstrap_seed)
        })
        .collect()
}
