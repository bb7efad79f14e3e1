//! Logging utilities
//!
//! The engine logs through the `log` facade. Binaries install a backend with
//! [`init`] or [`init_with_level`].

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system from `RUST_LOG`
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system with a default filter such as `"info"` or
/// `"sprite_engine=debug"`. `RUST_LOG` still takes precedence when set.
/// Calling this more than once is harmless.
pub fn init_with_level(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env).try_init();
}
