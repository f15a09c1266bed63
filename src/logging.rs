//! Logger setup
//!
//! Logs go to stderr through `env_logger`. `RUST_LOG` overrides the level
//! picked from the verbosity flag.

use log::LevelFilter;

/// Map the number of `-v` flags to a log level
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbosity: u8) {
    let _ = env_logger::Builder::new()
        .filter_level(level_for(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}
