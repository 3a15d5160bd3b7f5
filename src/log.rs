use log::LevelFilter;

/// Environment variable that turns on debug logging without a flag.
pub const DEBUG_ENV: &str = "XWORD_DEBUG";

/// Initialize `env_logger` for the CLI.
///
/// Uses `Debug` when `debug_enabled` is set (or [`DEBUG_ENV`] is present),
/// `Info` otherwise. An explicit `RUST_LOG` overrides both.
pub fn init_logger(debug_enabled: bool) {
    let debug_enabled = debug_enabled || std::env::var_os(DEBUG_ENV).is_some();
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // A second init (tests, embedding) keeps the first logger.
    if builder.try_init().is_ok() {
        log::debug!("logger initialized at {level:?} level");
    }
}
