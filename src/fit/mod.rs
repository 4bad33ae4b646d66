//! Regression fitting.
//!
//! Responsibilities:
//!
//! - compute MSE / AIC / BIC for one predictor/response pair
//! - optionally bootstrap-resample the pair before fitting

pub mod fitter;
pub mod resample;

pub use fitter::*;
pub use resample::*;
