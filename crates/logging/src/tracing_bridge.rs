//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the caller-path logger.
//!
//! [`CallerPathLayer`] is a tracing-subscriber layer that renders every event
//! through a [`Logger`]. The event's recorded source file takes the place of
//! the `#[track_caller]` location, so `tracing` call sites are shown relative
//! to the root path exactly like direct calls.
//!
//! # Usage
//!
//! ```rust,ignore
//! logging::init_tracing().expect("no other subscriber installed");
//!
//! tracing::info!("copying {} files", 3);
//! tracing::debug!("hidden unless debug output is enabled");
//! ```

use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex, PoisonError};

use logging_sink::LineWriter;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use crate::global;
use crate::levels::Level;
use crate::logger::Logger;
use crate::resolver::StackResolver;

/// Logger that receives bridged events.
pub trait RecordTarget: Send + Sync + 'static {
    /// Reports whether a record at `level` would be written.
    fn enabled(&self, level: Level) -> bool;

    /// Writes a record attributed to `source`.
    fn log_source(&self, level: Level, source: Option<&'static str>, message: &str);
}

/// The process-wide default logger.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultLogger;

impl RecordTarget for DefaultLogger {
    fn enabled(&self, level: Level) -> bool {
        global::enabled(level)
    }

    fn log_source(&self, level: Level, source: Option<&'static str>, message: &str) {
        global::log_source(level, source, message);
    }
}

impl<W, R> RecordTarget for Arc<Mutex<Logger<W, R>>>
where
    W: LineWriter + Send + 'static,
    R: StackResolver + Send + 'static,
{
    fn enabled(&self, level: Level) -> bool {
        self.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .enabled(level)
    }

    fn log_source(&self, level: Level, source: Option<&'static str>, message: &str) {
        self.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .log_source(level, source, message);
    }
}

/// A tracing layer that writes events through a caller-path [`Logger`].
#[derive(Clone, Debug, Default)]
pub struct CallerPathLayer<T = DefaultLogger> {
    target: T,
}

impl CallerPathLayer {
    /// Layer forwarding to the process-wide default logger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            target: DefaultLogger,
        }
    }
}

impl<T> CallerPathLayer<T> {
    /// Layer forwarding to an explicit target.
    #[must_use]
    pub const fn with_target(target: T) -> Self {
        Self { target }
    }

    /// Map a tracing level to a logger level.
    const fn map_level(level: &tracing::Level) -> Level {
        match *level {
            tracing::Level::ERROR => Level::Error,
            tracing::Level::WARN => Level::Warn,
            tracing::Level::INFO => Level::Info,
            tracing::Level::DEBUG | tracing::Level::TRACE => Level::Debug,
        }
    }
}

impl<S, T> Layer<S> for CallerPathLayer<T>
where
    S: Subscriber,
    T: RecordTarget,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = Self::map_level(metadata.level());
        if !self.target.enabled(level) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.target
            .log_source(level, metadata.file(), &visitor.finish());
    }
}

/// Collects the `message` field followed by the remaining fields as `key=value`.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(mut self) -> String {
        if self.message.is_empty() {
            return self.fields.trim_start().to_owned();
        }
        self.message.push_str(&self.fields);
        self.message
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.fields, " {}={value:?}", field.name());
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={value}", field.name());
        }
    }
}

/// Installs a global subscriber that forwards events to the default logger.
///
/// Fails when another global subscriber is already installed.
pub fn init_tracing() -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(CallerPathLayer::new())
        .try_init()
}

/// Like [`init_tracing`], with an additional filter layer in front.
///
/// # Example
///
/// ```rust,ignore
/// use tracing_subscriber::EnvFilter;
///
/// logging::init_tracing_with_filter(EnvFilter::from_default_env())?;
/// ```
pub fn init_tracing_with_filter<F>(filter: F) -> Result<(), TryInitError>
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(filter)
        .with(CallerPathLayer::new())
        .try_init()
}
