//! Diagnostics on stderr.
//!
//! Library code logs through the `log` macros; the fmt subscriber picks those
//! records up and writes them to stderr so stdout only carries the report.

use tracing::metadata::LevelFilter;

/// Map `-v` occurrences to a level: warn, info, debug, then trace.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init_logging(verbose: u8) {
    let installed = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_max_level(level_for_verbosity(verbose))
        .try_init();

    if installed.is_ok() {
        log::debug!("logging initialized at {}", level_for_verbosity(verbose));
    }
}
