use log::LevelFilter;

/// Start logging at `level`
///
/// Directives in `RUST_LOG` are applied on top, so a single module can still be turned up
/// without changing the command line.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .parse_env("RUST_LOG")
        .init();
}
