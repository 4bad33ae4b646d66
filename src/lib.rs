//! `regbench` library crate.
//!
//! The binary (`regbench`) is a thin wrapper around this library so that:
//!
//! - loading, fitting, and aggregation are testable without spawning processes
//! - the sequential and concurrent strategies can be driven directly

pub mod app;
pub mod bench;
pub mod cli;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod logging;
pub mod math;
pub mod report;
