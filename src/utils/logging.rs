use env_logger::Env;
use crate::models::Config;

/// Install the global logger; `--debug` lowers the default filter to debug.
///
/// `RUST_LOG` takes precedence when set.
pub fn init_logging(config: &Config) {
    let level = if config.debug_mode { "debug" } else { "info" };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
