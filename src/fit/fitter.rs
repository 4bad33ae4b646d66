//! Goodness-of-fit metrics for a single regression.
//!
//! Given paired predictor/response values we:
//! - solve the closed-form OLS line
//! - derive `MSE = RSS / n`
//! - derive the log-likelihood proxy `L = n · ln(RSS / n)`
//! - penalize with `k = PARAM_COUNT`: `AIC = L + 2k`, `BIC = L + ln(n) · k`
//!
//! `RSS = 0` (a perfect fit) or `n = 0` produce non-finite criteria. That is a
//! known boundary and is passed through unchanged.

use crate::domain::{FitResult, LineFit, PARAM_COUNT};
use crate::math::simple_linear_regression;

/// Fit the line and compute MSE/AIC/BIC.
pub fn fit_metrics(x: &[f64], y: &[f64]) -> FitResult {
    metrics_from_line(&simple_linear_regression(x, y))
}

pub fn metrics_from_line(line: &LineFit) -> FitResult {
    let n_f = line.n as f64;
    let mse = line.rss / n_f;
    let log_lik = n_f * mse.ln();

    FitResult {
        mse,
        aic: aic(log_lik, PARAM_COUNT),
        bic: bic(log_lik, line.n, PARAM_COUNT),
    }
}

fn aic(log_lik: f64, k: usize) -> f64 {
    log_lik + 2.0 * k as f64
}

fn bic(log_lik: f64, n: usize, k: usize) -> f64 {
    log_lik + (n as f64).ln() * k as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_fit_hits_degenerate_boundary() {
        let line = simple_linear_regression(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]);
        assert_eq!(line.slope, 2.0);
        assert_eq!(line.intercept, 0.0);
        assert_eq!(line.rss, 0.0);

        let m = metrics_from_line(&line);
        assert_eq!(m.mse, 0.0);
        assert_eq!(m.aic, f64::NEG_INFINITY);
        assert_eq!(m.bic, f64::NEG_INFINITY);
    }

    #[test]
    fn criteria_follow_closed_form() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [1.0, 3.0, 2.0, 4.0];
        let m = fit_metrics(&x, &y);

        // RSS = 1.8, n = 4
        let mse = 1.8 / 4.0;
        let l = 4.0 * f64::ln(mse);
        assert!((m.mse - mse).abs() < 1e-12);
        assert!((m.aic - (l + 4.0)).abs() < 1e-12);
        assert!((m.bic - (l + 2.0 * f64::ln(4.0))).abs() < 1e-12);
    }

    #[test]
    fn bic_exceeds_aic_once_ln_n_is_above_two() {
        // ln(n) > 2 for n >= 8
        let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let y: Vec<f64> = x
            .iter()
            .enumerate()
            .map(|(i, v)| 1.0 + 0.5 * v + if i % 2 == 0 { 0.1 } else { -0.1 })
            .collect();
        let m = fit_metrics(&x, &y);
        assert!(m.bic > m.aic);
    }

    #[test]
    fn repeated_fits_are_bit_identical() {
        let x = [0.5, 1.7, 2.2, 3.9, 5.1];
        let y = [1.1, 2.0, 2.9, 4.2, 4.8];
        let a = fit_metrics(&x, &y);
        let b = fit_metrics(&x, &y);
        assert_eq!(a.mse.to_bits(), b.mse.to_bits());
        assert_eq!(a.aic.to_bits(), b.aic.to_bits());
        assert_eq!(a.bic.to_bits(), b.bic.to_bits());
    }

    #[test]
    fn empty_sample_is_non_finite() {
        let m = fit_metrics(&[], &[]);
        assert!(!m.mse.is_finite());
        assert!(!m.aic.is_finite());
    }
}
