//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - sets up logging
//! - runs the timed benchmark for each selected strategy
//! - prints the report
//!
//! Nothing is printed to stdout unless every selected strategy succeeded.

use clap::Parser;
use log::info;

use crate::cli::Cli;
use crate::domain::RunConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `regbench` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    crate::logging::init_logging(cli.verbose);

    let config = run_config_from_args(&cli);
    info!(
        "dataset={} strategies={:?} threads={} bootstrap_seed={:?}",
        config.dataset_path.display(),
        config.strategies,
        config.threads,
        config.bootstrap_seed
    );

    let summaries = pipeline::run_benchmark(&config)?;

    match summaries.as_slice() {
        [single] => println!("{}", crate::report::format_run_summary(single)),
        many => print!("{}", crate::report::format_comparison(many)),
    }

    Ok(())
}

pub fn run_config_from_args(cli: &Cli) -> RunConfig {
    RunConfig {
        dataset_path: cli.dataset.clone(),
        strategies: cli.strategy.strategies(),
        threads: cli.threads,
        bootstrap_seed: cli.bootstrap_seed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Strategy;
    use std::path::PathBuf;

    #[test]
    fn config_from_default_args() {
        let cli = Cli::try_parse_from(["regbench"]).unwrap();
        let config = run_config_from_args(&cli);
        assert_eq!(config.dataset_path, PathBuf::from("boston.csv"));
        assert_eq!(config.strategies, vec![Strategy::Concurrent]);
        assert_eq!(config.bootstrap_seed, None);
    }

    #[test]
    fn config_expands_both() {
        let cli = Cli::try_parse_from(["regbench", "-s", "both", "--bootstrap-seed", "1"]).unwrap();
        let config = run_config_from_args(&cli);
        assert_eq!(
            config.strategies,
            vec![Strategy::Sequential, Strategy::Concurrent]
        );
        assert_eq!(config.bootstrap_seed, Some(1));
    }
}
