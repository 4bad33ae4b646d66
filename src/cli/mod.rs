//! Command-line parsing for the regression benchmark.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! loading/fitting code. Running with no arguments reproduces the default
//! benchmark: `boston.csv`, concurrent strategy.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::domain::StrategySpec;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "regbench",
    version,
    about = "Benchmark repeated simple linear regression fits: sequential vs concurrent"
)]
pub struct Cli {
    /// CSV dataset: header row, identifier column, then numeric columns.
    /// The first numeric column is the predictor, the last is the response.
    #[arg(value_name = "DATASET", default_value = "boston.csv")]
    pub dataset: PathBuf,

    /// Execution strategy for the repeated fits.
    #[arg(short = 's', long, value_enum, default_value_t = StrategySpec::Concurrent)]
    pub strategy: StrategySpec,

    /// Worker threads for the concurrent strategy (0 = one per core).
    #[arg(short = 't', long, default_value_t = 0)]
    pub threads: usize,

    /// Fit a bootstrap resample (seeded per iteration) instead of the same data every time.
    #[arg(long, value_name = "SEED")]
    pub bootstrap_seed: Option<u64>,

    /// Increase log verbosity on stderr (-v info, -vv debug).
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}
