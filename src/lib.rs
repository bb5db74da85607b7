// XOLtab Library - Public API

// Re-export error types
pub mod error;
pub use error::{CommandError, Result, XolError};

// Module declarations
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use core::config::Config;
pub use core::system_info::{collect_system_info, Field, SystemSnapshot};

/// Initialize logging to stderr.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or every
/// probe decision with `verbose`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
