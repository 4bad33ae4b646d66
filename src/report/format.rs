//! Formatted terminal output.
//!
//! All stdout text is built here so the benchmark code stays free of printing
//! and the exact output lines can be unit tested.

use crate::domain::{RunSummary, Strategy};

/// Averaged metrics line.
pub fn format_metrics_line(summary: &RunSummary) -> String {
    format!(
        "Average MSE: {:.6}, Average AIC: {:.6}, Average BIC: {:.6}",
        summary.avg.mse, summary.avg.aic, summary.avg.bic
    )
}

/// Elapsed wall-clock line (`Duration`'s debug form: `1.234ms`, `2.5s`, ...).
pub fn format_elapsed_line(summary: &RunSummary) -> String {
    format!("Time taken: {:?}", summary.elapsed)
}

/// The two report lines for one run.
pub fn format_run_summary(summary: &RunSummary) -> String {
    format!(
        "{}\n{}",
        format_metrics_line(summary),
        format_elapsed_line(summary)
    )
}

/// Report for several strategies: one labelled block each, plus the speedup
/// when both a sequential and a concurrent run are present.
pub fn format_comparison(summaries: &[RunSummary]) -> String {
    let mut out = String::new();
    for (i, summary) in summaries.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("=== {} ===\n", summary.strategy.display_name()));
        out.push_str(&format_run_summary(summary));
        out.push('\n');
    }

    if let Some(speedup) = speedup(summaries) {
        out.push_str(&format!(
            "\nSpeedup (sequential / concurrent): {speedup:.2}x\n"
        ));
    }

    out
}

/// Sequential elapsed divided by concurrent elapsed, if both were run.
pub fn speedup(summaries: &[RunSummary]) -> Option<f64> {
    let find = |s: Strategy| summaries.iter().find(|r| r.strategy == s);
    let seq = find(Strategy::Sequential)?;
    let conc = find(Strategy::Concurrent)?;

    let conc_secs = conc.elapsed.as_secs_f64();
    if conc_secs <= 0.0 {
        return None;
    }
    Some(seq.elapsed.as_secs_f64() / conc_secs)
}
