//! Simple diagnostics library for the reef workspace
//!
//! Provides lightweight, configurable logging across all crates in the project.
//!
//! Usage:
//! - Set REEF_LOG=off (default) - no logs
//! - Set REEF_LOG=info - basic operation logs
//! - Set REEF_LOG=debug - detailed diagnostic logs

use std::sync::Once;

// Re-export emit so macros can use it
pub use emit;

static INIT: Once = Once::new();

/// Initialize diagnostics based on REEF_LOG environment variable
///
/// This should be called once at application startup. It's safe to call
/// multiple times - subsequent calls will be ignored.
pub fn init_diagnostics() {
    INIT.call_once(|| {
        let log_level = std::env::var("REEF_LOG").unwrap_or_else(|_| "off".to_string());

        let rt = match log_level.as_str() {
            "off" => return, // No setup needed
            "debug" => emit::setup()
                .emit_to(emit_term::stderr())
                .emit_when(emit::level::min_filter(emit::Level::Debug))
                .init(),
            "info" => emit::setup()
                .emit_to(emit_term::stderr())
                .emit_when(emit::level::min_filter(emit::Level::Info))
                .init(),
            "warn" => emit::setup()
                .emit_to(emit_term::stderr())
                .emit_when(emit::level::min_filter(emit::Level::Warn))
                .init(),
            "error" => emit::setup()
                .emit_to(emit_term::stderr())
                .emit_when(emit::level::min_filter(emit::Level::Error))
                .init(),
            _ => {
                let rt = emit::setup()
                    .emit_to(emit_term::stderr())
                    .emit_when(emit::level::min_filter(emit::Level::Info))
                    .init();
                // Bootstrap warning - this will show even with unknown level
                eprintln!("Warning: Unknown REEF_LOG value '{}', using 'info'", log_level);
                rt
            }
        };

        // Store runtime properly instead of memory leak
        std::mem::forget(rt); // TODO: Find better lifetime management
    });
}

/// Log basic operations (queries, extension loads, row counts, etc.)
///
/// Use this for operations that users might want to see in normal usage.
/// Examples: "Loaded spatial extension", "Query returned 1532 rows"
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::emit::info!($($arg)*)
    };
}

/// Log detailed diagnostics (SQL text, batch counts, internal state, etc.)
///
/// Use this for detailed information useful for debugging and performance analysis.
/// Examples: "SQL: SELECT dataset_id ...", "Collected 3 record batches"
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::emit::debug!($($arg)*)
    };
}

/// Log warning conditions (config issues, fallbacks, recoverable errors)
///
/// Use this for issues that don't prevent operation but should be noted.
/// Examples: "Unknown REEF_LOG value, using 'info'"
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::emit::warn!($($arg)*)
    };
}

/// Log critical error conditions (failures, exceptions, unrecoverable errors)
///
/// Use this for serious problems that prevent normal operation.
/// Examples: "Failed to reach dataset", "Extension install failed"
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::emit::error!($($arg)*)
    };
}

/// Re-export the init function for convenience
pub use init_diagnostics as init;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_safe_to_call_multiple_times() {
        // Should not panic when called multiple times
        init_diagnostics();
        init_diagnostics();
        init_diagnostics();
    }

    #[test]
    fn test_macros_compile() {
        log_info!("Test message");
        log_debug!("Debug message with {value}", value: 42);
        log_warn!("Warning message");
        log_error!("Error message");
    }
}
