//! Input helpers.
//!
//! - CSV ingest into a numeric `Dataset` (`ingest`)

pub mod ingest;

pub use ingest::*;
