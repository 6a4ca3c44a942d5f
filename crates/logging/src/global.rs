//! crates/logging/src/global.rs
//! Process-wide default logger and the free functions operating on it.
//!
//! Every call locks the default logger for its own duration only; the last
//! configuration write wins. A poisoned lock is recovered so that logging
//! never panics.

use std::panic::Location;
use std::path::Path;
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

use crate::config::LoggerConfig;
use crate::error::PathError;
use crate::levels::Level;
use crate::logger::Logger;

static DEFAULT_LOGGER: LazyLock<Mutex<Logger>> = LazyLock::new(|| Mutex::new(Logger::new()));

fn default_logger() -> MutexGuard<'static, Logger> {
    DEFAULT_LOGGER
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Snapshot of the default logger's configuration.
pub fn config() -> LoggerConfig {
    default_logger().config().clone()
}

/// Replaces the default logger's configuration.
///
/// The root carried by `config` was validated when its [`RootPath`] was
/// built, so the default logger never holds an unchecked root.
///
/// [`RootPath`]: crate::RootPath
pub fn configure(config: LoggerConfig) {
    default_logger().set_config(config);
}

/// Root path of the default logger, joined with the host separator.
pub fn root_path() -> String {
    default_logger().root_path()
}

/// Validates `path` and adopts it as the default logger's root.
///
/// The previous root is kept when validation fails. A relative `path` is
/// stored as given and shares no segment with absolute caller paths, so
/// callers then render absolute; see [`RootPath::validated`].
///
/// [`RootPath::validated`]: crate::RootPath::validated
pub fn set_root_path(path: impl AsRef<Path>) -> Result<(), PathError> {
    default_logger().set_root_path(path)
}

/// Whether the default logger colors level tags.
pub fn colored_log() -> bool {
    default_logger().colored_log()
}

/// Enables or disables colored level tags on the default logger.
pub fn set_colored_log(enabled: bool) {
    default_logger().set_colored_log(enabled);
}

/// Whether the default logger writes debug records.
pub fn log_debug_level() -> bool {
    default_logger().log_debug_level()
}

/// Enables or disables debug records on the default logger.
pub fn set_log_debug_level(enabled: bool) {
    default_logger().set_log_debug_level(enabled);
}

/// Reports whether the default logger would write a record at `level`.
pub fn enabled(level: Level) -> bool {
    default_logger().enabled(level)
}

/// Writes a debug record when debug output is enabled.
#[track_caller]
pub fn debug(message: &str) {
    let caller = Location::caller();
    default_logger().log_at(Level::Debug, caller, message);
}

/// Writes an info record to standard output.
#[track_caller]
pub fn info(message: &str) {
    let caller = Location::caller();
    default_logger().log_at(Level::Info, caller, message);
}

/// Writes a warning record to standard error.
#[track_caller]
pub fn warn(message: &str) {
    let caller = Location::caller();
    default_logger().log_at(Level::Warn, caller, message);
}

/// Writes an error record to standard error.
#[track_caller]
pub fn error(message: &str) {
    let caller = Location::caller();
    default_logger().log_at(Level::Error, caller, message);
}

/// Writes a record at `level`, attributed to the calling code.
#[track_caller]
pub fn log(level: Level, message: &str) {
    let caller = Location::caller();
    default_logger().log_at(level, caller, message);
}

/// Writes a record attributed to a compiler-recorded source file.
pub fn log_source(level: Level, source: Option<&'static str>, message: &str) {
    default_logger().log_source(level, source, message);
}

/// Path of the calling source file relative to the default logger's root.
#[track_caller]
pub fn resolve_caller_path() -> Option<String> {
    let caller = Location::caller();
    default_logger().resolve_caller_path(caller)
}
