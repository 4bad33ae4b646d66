//! Concurrent strategy: fixed fan-out, bounded fan-in.
//!
//! Every iteration becomes its own task on the given rayon pool. Tasks borrow
//! the sample read-only and share no mutable state; each sends exactly one
//! `(iteration, FitResult)` into a `sync_channel` whose capacity equals the task
//! count, so no producer ever blocks.
//!
//! The fan-out is driven from a scoped helper thread while the calling thread
//! drains the channel as results arrive. The caller must not be one of the
//! pool's workers; otherwise a single-worker pool still makes progress.

use std::sync::mpsc::{self, Receiver};
use std::thread;

use log::{debug, warn};
use rayon::ThreadPool;

use super::{Accumulator, Aggregate, fit_iteration};
use crate::domain::{FitResult, ITERATIONS, Sample};
use crate::error::AppError;

pub fn run_concurrent(
    pool: &ThreadPool,
    sample: &Sample,
    bootstrap_seed: Option<u64>,
) -> Result<Aggregate, AppError> {
    let (tx, rx) = mpsc::sync_channel::<(usize, FitResult)>(ITERATIONS);

    let (collected, producers) = thread::scope(|s| {
        let producers = s.spawn(move || {
            // The pool scope owns the original sender; the channel closes once
            // every task has sent or unwound.
            pool.scope(move |scope| {
                for iteration in 0..ITERATIONS {
                    let tx = tx.clone();
                    scope.spawn(move |_| {
                        let fit = fit_iteration(sample, bootstrap_seed, iteration);
                        if tx.send((iteration, fit)).is_err() {
                            warn!("concurrent: collector gone before iteration {iteration} reported");
                        }
                    });
                }
            });
        });

        let collected = collect(&rx);
        // Joined explicitly so a panicking task surfaces as an error, not a re-panic.
        (collected, producers.join())
    });

    let slots = collected?;
    if producers.is_err() {
        return Err(AppError::runtime("A concurrent fit task panicked."));
    }
    debug!(
        "concurrent: collected {ITERATIONS} fits on {} worker threads",
        pool.current_num_threads()
    );

    // Sum in iteration order so the result does not depend on arrival order.
    let mut acc = Accumulator::default();
    for fit in slots.iter().flatten() {
        acc.add(fit);
    }
    Ok(acc.finish())
}

/// Receive exactly `ITERATIONS` results, slotted by iteration index.
fn collect(rx: &Receiver<(usize, FitResult)>) -> Result<Vec<Option<FitResult>>, AppError> {
    let mut slots: Vec<Option<FitResult>> = vec![None; ITERATIONS];
    for received in 0..ITERATIONS {
        let (iteration, fit) = rx.recv().map_err(|_| {
            AppError::runtime(format!(
                "Concurrent run collected only {received} of {ITERATIONS} results."
            ))
        })?;
        debug_assert!(slots[iteration].is_none(), "iteration {iteration} reported twice");
        slots[iteration] = Some(fit);
    }
    Ok(slots)
}
