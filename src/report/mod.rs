//! Reporting utilities: formatted benchmark output.

pub mod format;

pub use format::*;
