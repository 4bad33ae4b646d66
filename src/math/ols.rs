//! Closed-form simple linear regression.
//!
//! For a single predictor the normal equations have an explicit solution:
//!
//! ```text
//! slope     = Σ (x_i - x̄)(y_i - ȳ) / Σ (x_i - x̄)^2
//! intercept = ȳ - slope · x̄
//! ```
//!
//! Sums are accumulated on mean-centered values. Degenerate input (an empty
//! sample or a constant predictor) yields non-finite values.

use crate::domain::LineFit;

/// Fit `y ≈ intercept + slope · x` by ordinary least squares.
pub fn simple_linear_regression(x: &[f64], y: &[f64]) -> LineFit {
    debug_assert_eq!(x.len(), y.len(), "predictor/response length mismatch");

    let n = x.len();
    let n_f = n as f64;
    let x_mean = x.iter().sum::<f64>() / n_f;
    let y_mean = y.iter().sum::<f64>() / n_f;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - x_mean;
        sxy += dx * (yi - y_mean);
        sxx += dx * dx;
    }

    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;

    LineFit {
        intercept,
        slope,
        rss: residual_sum_of_squares(x, y, intercept, slope),
        n,
    }
}

/// Σ (y_i - intercept - slope · x_i)^2
pub fn residual_sum_of_squares(x: &[f64], y: &[f64], intercept: f64, slope: f64) -> f64 {
    x.iter()
        .zip(y)
        .map(|(&xi, &yi)| {
            let residual = yi - (intercept + slope * xi);
            residual * residual
        })
        .sum()
}
