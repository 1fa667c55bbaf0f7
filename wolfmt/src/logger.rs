//! Logger bootstrap for the CLI.
//!
//! Honors `RUST_LOG` by default; the `--debug`, `--disable-debug`, and
//! `--quiet` flags map to explicit level overrides.

use log::LevelFilter;

/// Initializes the global logger.
///
/// `level` overrides whatever `RUST_LOG` says; `None` leaves the environment
/// configuration in charge. Repeated initialization (as happens in tests) is
/// tolerated silently.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = level {
        builder.filter_level(level);
    }
    let _ = builder.format_timestamp(None).try_init();
}

/// Resolves the CLI logging flags to a level override.
pub fn level_from_flags(quiet: bool, debug: bool, disable_debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if disable_debug {
        Some(LevelFilter::Info)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}
