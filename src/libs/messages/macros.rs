//! Convenience macros for application messaging and logging.
//!
//! The macros route every message either to plain console output or to the
//! tracing system, depending on whether debug mode is enabled. Debug mode
//! is detected once from the environment (`DROIDUP_DEBUG` or `RUST_LOG`)
//! and cached for the rest of the run.

use std::sync::OnceLock;

/// Cached result of the debug mode environment check.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Checks if debug mode is enabled, with caching for performance.
///
/// Debug mode is considered enabled if either `DROIDUP_DEBUG` or the
/// standard `RUST_LOG` variable is set. In debug mode the `msg_*` macros
/// log through `tracing` instead of printing directly.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("DROIDUP_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a success message with ✅ prefix and automatic routing.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

/// Prints an informational message with ℹ️ prefix and automatic routing.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
}

/// Prints a warning message with ⚠️ prefix and automatic routing.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
}

/// Debug-only message display with 🔍 prefix.
///
/// Suppressed entirely outside debug mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}
