//! Shared domain types.
//!
//! These types are plain data: the loader produces a `Dataset`, the fitter
//! produces `FitResult`s, and the aggregator reduces them into a `RunSummary`.

use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;
use nalgebra::DMatrix;

/// Number of independent fits performed per benchmark run.
pub const ITERATIONS: usize = 100;

/// Number of estimated parameters in the simple regression (intercept + slope).
///
/// Used as `k` in the AIC/BIC penalties.
pub const PARAM_COUNT: usize = 2;

/// Numeric table loaded from disk.
///
/// The header row and the identifier column are already stripped; every row
/// has the same number of columns by construction of the matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub values: DMatrix<f64>,
}

impl Dataset {
    pub fn new(values: DMatrix<f64>) -> Self {
        Self { values }
    }

    pub fn n_rows(&self) -> usize {
        self.values.nrows()
    }

    pub fn n_cols(&self) -> usize {
        self.values.ncols()
    }

    /// First numeric column (the sole predictor).
    pub fn predictor(&self) -> Vec<f64> {
        self.column_or_empty(0)
    }

    /// Last numeric column (the response variable).
    pub fn response(&self) -> Vec<f64> {
        match self.n_cols() {
            0 => Vec::new(),
            n => self.column_or_empty(n - 1),
        }
    }

    fn column_or_empty(&self, idx: usize) -> Vec<f64> {
        if idx >= self.n_cols() {
            return Vec::new();
        }
        self.values.column(idx).iter().copied().collect()
    }
}

/// Paired predictor/response sequences handed to every fit.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Sample {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            x: dataset.predictor(),
            y: dataset.response(),
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Closed-form least-squares line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    pub intercept: f64,
    pub slope: f64,
    /// Residual sum of squares.
    pub rss: f64,
    pub n: usize,
}

/// Goodness-of-fit metrics for a single fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitResult {
    pub mse: f64,
    pub aic: f64,
    pub bic: f64,
}

/// Execution strategy for the repeated fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// One fit after another on the calling thread.
    Sequential,
    /// Fan-out of independent tasks, fan-in through a bounded channel.
    Concurrent,
}

impl Strategy {
    pub fn display_name(self) -> &'static str {
        match self {
            Strategy::Sequential => "sequential",
            Strategy::Concurrent => "concurrent",
        }
    }
}

/// Which strategies to run, as selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategySpec {
    Concurrent,
    Sequential,
    /// Run sequential, then concurrent, and report the speedup.
    Both,
}

impl StrategySpec {
    pub fn strategies(self) -> Vec<Strategy> {
        match self {
            StrategySpec::Concurrent => vec![Strategy::Concurrent],
            StrategySpec::Sequential => vec![Strategy::Sequential],
            StrategySpec::Both => vec![Strategy::Sequential, Strategy::Concurrent],
        }
    }
}

/// Averaged metrics for one timed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub strategy: Strategy,
    pub avg: FitResult,
    /// Number of fit results reduced into `avg`.
    pub fits: usize,
    pub elapsed: Duration,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub dataset_path: PathBuf,
    pub strategies: Vec<Strategy>,
    /// Worker threads for the concurrent strategy; `0` means rayon's default.
    pub threads: usize,
    /// When set, every iteration fits a bootstrap resample seeded from this value.
    pub bootstrap_seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predictor_and_response_are_first_and_last_columns() {
        let ds = Dataset::new(DMatrix::from_row_slice(
            2,
            3,
            &[1.0, 10.0, 100.0, 2.0, 20.0, 200.0],
        ));
        assert_eq!(ds.predictor(), vec![1.0, 2.0]);
        assert_eq!(ds.response(), vec![100.0, 200.0]);
    }

    #[test]
    fn single_column_is_both_predictor_and_response() {
        let ds = Dataset::new(DMatrix::from_row_slice(2, 1, &[3.0, 4.0]));
        assert_eq!(ds.predictor(), ds.response());
    }

    #[test]
    fn both_runs_sequential_first() {
        assert_eq!(
            StrategySpec::Both.strategies(),
            vec![Strategy::Sequential, Strategy::Concurrent]
        );
    }
}
