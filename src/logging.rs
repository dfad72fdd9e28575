//! Logger setup for native and browser builds

use log::LevelFilter;

/// Initializes the global logger.
///
/// When `verbose` is `true`, debug messages (per-frame state changes) are
/// printed. Otherwise only info level and above are shown. On native,
/// `RUST_LOG` takes precedence.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(verbose: bool) {
    use env_logger::{Builder, Env};

    let level = level_for(verbose);
    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);

    // `try_init` only fails if a logger was already set; tests may call this
    // more than once.
    let _ = builder.try_init();
}

#[cfg(target_arch = "wasm32")]
pub fn init(verbose: bool) {
    console_error_panic_hook::set_once();
    let level = level_for(verbose).to_level().unwrap_or(log::Level::Info);
    let _ = console_log::init_with_level(level);
}

fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init(false);
        init(true);
        assert_eq!(level_for(true), LevelFilter::Debug);
    }
}
