//! Logger setup for the command-line binary.

use env_logger::Env;
use log::LevelFilter;

/// Maps the count of `-v` flags to a default log level.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the global logger writing to stderr.
///
/// `RUST_LOG` takes precedence over the verbosity-derived level. Calling
/// this more than once keeps the first logger.
pub fn init_logging(verbose: u8) {
    let default_level = level_for_verbosity(verbose).to_string().to_lowercase();
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
