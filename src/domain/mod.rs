//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the loaded numeric table (`Dataset`) and the x/y pair fitted from it (`Sample`)
//! - per-fit outputs (`LineFit`, `FitResult`) and the averaged `RunSummary`
//! - run configuration (`Strategy`, `StrategySpec`, `RunConfig`)
//! - the fixed benchmark constants (`ITERATIONS`, `PARAM_COUNT`)

pub mod types;

pub use types::*;
