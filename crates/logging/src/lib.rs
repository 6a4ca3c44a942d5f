#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` prints leveled, timestamped records annotated with the source
//! file of the calling code, rendered relative to a configurable root path:
//!
//! ```text
//! [2024/03/05 07:08:09] [./src/server.rs] [INFO]: listening
//! [2024/03/05 07:08:10] [../shared/src/db.rs] [WARN]: slow query
//! ```
//!
//! # Design
//!
//! - [`LoggerConfig`] holds the root path (as segments), the color toggle and
//!   the debug toggle. The root only changes through a validated
//!   [`LoggerConfig::set_root_path`].
//! - The emitters are `#[track_caller]`: the location of the code that called
//!   [`info`] (or any other level) reaches the [`StackResolver`] without a
//!   stack walk. [`TrackedCaller`] turns the compiler-recorded file into an
//!   absolute path; [`FixedCaller`] is a deterministic stand-in for tests.
//! - [`relative_to_root`] compares root and caller segment by segment and
//!   renders `./rest`, `../rest` or the absolute caller path.
//! - [`Logger`] ties configuration, resolver and a
//!   [`LineWriter`](logging_sink::LineWriter) together. The free functions
//!   ([`info`], [`set_root_path`], ...) operate on a process-wide default
//!   logger writing to stdout (debug, info) and stderr (warn, error).
//!
//! # Invariants
//!
//! - A disabled debug record produces no output and never consults the
//!   resolver.
//! - Colors wrap the level tag only; timestamp, path and message are plain.
//! - Logging never panics: unresolved callers leave the path field empty and
//!   write failures on the standard streams are discarded.
//!
//! # Errors
//!
//! Only root-path configuration fails, with a [`PathError`].
//!
//! # Examples
//!
//! ```
//! logging::set_colored_log(false);
//! logging::info("service started");
//! logging::warn_log!("{} retries left", 2);
//!
//! let here = logging::resolve_caller_path();
//! assert!(here.is_some());
//! ```
//!
//! # Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`LoggerConfig`], [`RootPath`]
//!   and [`Level`].
//! - `tracing`: `CallerPathLayer`, a tracing-subscriber layer forwarding
//!   `tracing` events to the logger.

mod config;
mod error;
mod format;
mod global;
mod levels;
mod logger;
mod macros;
mod resolver;
mod segments;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{LoggerConfig, RootPath};
pub use error::PathError;
pub use format::{format_timestamp, render_line, timestamp_now};
pub use global::{
    colored_log, config, configure, debug, enabled, error, info, log, log_debug_level, log_source,
    resolve_caller_path, root_path, set_colored_log, set_log_debug_level, set_root_path, warn,
};
pub use levels::{ANSI_RESET, Level, ParseLevelError};
pub use logger::Logger;
pub use resolver::{FixedCaller, StackResolver, TrackedCaller, relative_to_root};
pub use segments::SEPARATOR;
#[cfg(feature = "tracing")]
pub use tracing_bridge::{
    CallerPathLayer, DefaultLogger, RecordTarget, init_tracing, init_tracing_with_filter,
};
