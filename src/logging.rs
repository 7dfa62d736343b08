//! Log setup.

use log::LevelFilter;

/// Initialise `env_logger`: warn by default, info with `-v`, debug with `-vv`.
///
/// `RUST_LOG`, when set, takes precedence.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}
