//! crates/logging/src/macros.rs
//! Formatting front-ends for the default logger.
//!
//! Each macro expands at the call site, so the record is attributed to the
//! file that invoked the macro.

/// Formats a debug record and sends it to the default logger.
///
/// # Example
/// ```
/// logging::debug_log!("cache size {}", 42);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)+) => {
        $crate::debug(&::std::format!($($arg)+))
    };
}

/// Formats an info record and sends it to the default logger.
///
/// # Example
/// ```
/// logging::info_log!("listening on port {}", 8080);
/// ```
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)+) => {
        $crate::info(&::std::format!($($arg)+))
    };
}

/// Formats a warning record and sends it to the default logger.
///
/// # Example
/// ```
/// logging::warn_log!("retrying in {}s", 5);
/// ```
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)+) => {
        $crate::warn(&::std::format!($($arg)+))
    };
}

/// Formats an error record and sends it to the default logger.
///
/// # Example
/// ```
/// logging::error_log!("request failed: {}", "timeout");
/// ```
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)+) => {
        $crate::error(&::std::format!($($arg)+))
    };
}
