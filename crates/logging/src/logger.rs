//! crates/logging/src/logger.rs
//! Logger instance owning its configuration, output and resolver.

use std::panic::Location;
use std::path::Path;

use logging_sink::{LineWriter, StandardStreams};

use crate::config::LoggerConfig;
use crate::error::PathError;
use crate::format;
use crate::levels::Level;
use crate::resolver::{self, StackResolver, TrackedCaller};

/// Leveled logger that tags each record with the caller's root-relative path.
///
/// A `Logger` holds its own [`LoggerConfig`], the [`LineWriter`] records are
/// written to and the [`StackResolver`] used to locate callers. The crate-level
/// functions such as [`crate::info`] operate on a process-wide default
/// instance; construct a `Logger` directly to inject a different writer or
/// resolver.
///
/// # Examples
///
/// ```
/// use logging::{FixedCaller, Logger, LoggerConfig, RootPath};
/// use logging_sink::StreamPair;
///
/// let workspace = std::env::current_dir()?;
/// let config = LoggerConfig::with_root(RootPath::validated(&workspace)?);
/// let mut logger = Logger::with_parts(
///     config,
///     StreamPair::new(Vec::new(), Vec::new()),
///     FixedCaller::new(workspace.join("src").join("main.rs")),
/// );
///
/// logger.info("started");
///
/// let (out, _err) = logger.into_parts().1.into_inner();
/// let line = String::from_utf8(out).unwrap();
/// assert!(line.ends_with("main.rs] [INFO]: started\n"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Logger<W = StandardStreams, R = TrackedCaller> {
    config: LoggerConfig,
    writer: W,
    resolver: R,
}

impl Logger {
    /// Logger writing to the process streams, rooted at the working directory.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(
            LoggerConfig::default(),
            StandardStreams::standard(),
            TrackedCaller::new(),
        )
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl<W, R> Logger<W, R> {
    /// Assembles a logger from explicit parts.
    #[must_use]
    pub const fn with_parts(config: LoggerConfig, writer: W, resolver: R) -> Self {
        Self {
            config,
            writer,
            resolver,
        }
    }

    /// Borrows the configuration.
    #[must_use]
    pub const fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Mutably borrows the configuration.
    pub fn config_mut(&mut self) -> &mut LoggerConfig {
        &mut self.config
    }

    /// Replaces the whole configuration.
    pub fn set_config(&mut self, config: LoggerConfig) {
        self.config = config;
    }

    /// Borrows the writer.
    #[must_use]
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Borrows the resolver.
    #[must_use]
    pub const fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Consumes the logger and returns its parts.
    #[must_use]
    pub fn into_parts(self) -> (LoggerConfig, W, R) {
        (self.config, self.writer, self.resolver)
    }

    /// See [`LoggerConfig::root_path`].
    #[must_use]
    pub fn root_path(&self) -> String {
        self.config.root_path()
    }

    /// See [`LoggerConfig::set_root_path`]; relative paths are stored as given.
    pub fn set_root_path(&mut self, path: impl AsRef<Path>) -> Result<(), PathError> {
        self.config.set_root_path(path)
    }

    /// See [`LoggerConfig::colored_log`].
    #[must_use]
    pub const fn colored_log(&self) -> bool {
        self.config.colored_log()
    }

    /// See [`LoggerConfig::set_colored_log`].
    pub fn set_colored_log(&mut self, enabled: bool) {
        self.config.set_colored_log(enabled);
    }

    /// See [`LoggerConfig::log_debug_level`].
    #[must_use]
    pub const fn log_debug_level(&self) -> bool {
        self.config.log_debug_level()
    }

    /// See [`LoggerConfig::set_log_debug_level`].
    pub fn set_log_debug_level(&mut self, enabled: bool) {
        self.config.set_log_debug_level(enabled);
    }

    /// Reports whether a record at `level` would be written.
    #[must_use]
    pub const fn enabled(&self, level: Level) -> bool {
        !matches!(level, Level::Debug) || self.config.log_debug_level()
    }
}

impl<W, R> Logger<W, R>
where
    R: StackResolver,
{
    /// Resolves `caller` relative to the configured root.
    ///
    /// Returns `None` when the resolver cannot locate the source file.
    #[must_use]
    pub fn resolve_caller_path(&self, caller: &'static Location<'static>) -> Option<String> {
        resolver::resolve_caller_path(&self.resolver, self.config.root(), caller.file())
    }
}

impl<W, R> Logger<W, R>
where
    W: LineWriter,
    R: StackResolver,
{
    /// Writes a debug record when debug output is enabled.
    #[track_caller]
    pub fn debug(&mut self, message: &str) {
        self.log_at(Level::Debug, Location::caller(), message);
    }

    /// Writes an info record.
    #[track_caller]
    pub fn info(&mut self, message: &str) {
        self.log_at(Level::Info, Location::caller(), message);
    }

    /// Writes a warning record.
    #[track_caller]
    pub fn warn(&mut self, message: &str) {
        self.log_at(Level::Warn, Location::caller(), message);
    }

    /// Writes an error record.
    #[track_caller]
    pub fn error(&mut self, message: &str) {
        self.log_at(Level::Error, Location::caller(), message);
    }

    /// Writes a record at `level`, attributed to the calling code.
    #[track_caller]
    pub fn log(&mut self, level: Level, message: &str) {
        self.log_at(level, Location::caller(), message);
    }

    /// Writes a record at `level`, attributed to `caller`.
    pub fn log_at(&mut self, level: Level, caller: &'static Location<'static>, message: &str) {
        self.log_source(level, Some(caller.file()), message);
    }

    /// Writes a record at `level`, attributed to the compiler-recorded `source`
    /// file (for instance the file of a `tracing` event).
    ///
    /// Disabled levels return before the resolver is consulted.
    pub fn log_source(&mut self, level: Level, source: Option<&'static str>, message: &str) {
        if !self.enabled(level) {
            return;
        }

        let caller = source.and_then(|file| {
            resolver::resolve_caller_path(&self.resolver, self.config.root(), file)
        });
        let line = format::render_line(
            &format::timestamp_now(),
            caller.as_deref(),
            level,
            self.config.colored_log(),
            message,
        );

        // Standard stream failures are not reported to the caller.
        let _ = self.writer.write_line(level.stream(), &line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RootPath;
    use crate::resolver::FixedCaller;
    use crate::segments::SEPARATOR;
    use logging_sink::StreamPair;

    type Captured = Logger<StreamPair<Vec<u8>, Vec<u8>>, FixedCaller>;

    fn logger(caller: &str) -> Captured {
        Logger::with_parts(
            LoggerConfig::with_root(RootPath::new("/a/b/c")),
            StreamPair::new(Vec::new(), Vec::new()),
            FixedCaller::new(caller),
        )
    }

    fn output(logger: Captured) -> (String, String) {
        let (out, err) = logger.into_parts().1.into_inner();
        (
            String::from_utf8(out).expect("utf-8"),
            String::from_utf8(err).expect("utf-8"),
        )
    }

    /// Drops the `[timestamp] ` prefix.
    fn without_timestamp(line: &str) -> &str {
        let end = line.find("] ").expect("timestamp bracket");
        &line[end + 2..]
    }

    #[test]
    fn debug_is_silent_and_skips_resolution_when_disabled() {
        let mut logger = logger("/a/b/c/d/e.rs");
        logger.debug("x");

        assert_eq!(logger.resolver().captures(), 0);
        let (out, err) = output(logger);
        assert!(out.is_empty());
        assert!(err.is_empty());
    }

    #[test]
    fn debug_writes_one_line_when_enabled() {
        let mut logger = logger("/a/b/c/d/e.rs");
        logger.set_log_debug_level(true);
        logger.debug("x");

        assert_eq!(logger.resolver().captures(), 1);
        let (out, err) = output(logger);
        assert_eq!(out.lines().count(), 1);
        assert!(err.is_empty());
        assert_eq!(
            without_timestamp(out.trim_end()),
            format!("[.{SEPARATOR}d{SEPARATOR}e.rs] [DEBUG]: x")
        );
    }

    #[test]
    fn levels_are_routed_to_their_streams() {
        let mut logger = logger("/a/b/c/main.rs");
        logger.info("i");
        logger.warn("w");
        logger.error("e");

        let (out, err) = output(logger);
        let out: Vec<_> = out.lines().map(without_timestamp).collect();
        let err: Vec<_> = err.lines().map(without_timestamp).collect();
        let caller = format!(".{SEPARATOR}main.rs");
        assert_eq!(out, [format!("[{caller}] [INFO]: i")]);
        assert_eq!(
            err,
            [
                format!("[{caller}] [WARN]: w"),
                format!("[{caller}] [ERROR]: e")
            ]
        );
    }

    #[test]
    fn color_toggle_restores_plain_output() {
        let mut logger = logger("/a/b/c/main.rs");
        logger.info("same");
        logger.set_colored_log(true);
        logger.info("same");
        logger.set_colored_log(false);
        logger.info("same");

        let (out, _) = output(logger);
        let lines: Vec<_> = out.lines().map(without_timestamp).collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], lines[2]);
        assert_ne!(lines[0], lines[1]);
        assert!(lines[1].contains("[\x1b[32mINFO\x1b[0m]"));
    }

    #[test]
    fn unresolved_caller_leaves_empty_path() {
        let mut logger = Logger::with_parts(
            LoggerConfig::with_root(RootPath::new("/a")),
            StreamPair::new(Vec::new(), Vec::new()),
            FixedCaller::unavailable(),
        );
        logger.error("lost");

        let (_, err) = output(logger);
        assert_eq!(without_timestamp(err.trim_end()), "[] [ERROR]: lost");
    }

    #[test]
    fn log_source_without_file_skips_resolver() {
        let mut logger = logger("/a/b/c/main.rs");
        logger.log_source(Level::Info, None, "bridged");

        assert_eq!(logger.resolver().captures(), 0);
        let (out, _) = output(logger);
        assert_eq!(without_timestamp(out.trim_end()), "[] [INFO]: bridged");
    }

    #[test]
    fn tracked_caller_reports_this_file() {
        let root = std::env::current_dir().expect("cwd");
        let mut logger = Logger::with_parts(
            LoggerConfig::with_root(RootPath::new(&root)),
            StreamPair::new(Vec::new(), Vec::new()),
            TrackedCaller::new(),
        );
        logger.info("here");

        let (_, writer, _) = logger.into_parts();
        let (out, _) = writer.into_inner();
        let out = String::from_utf8(out).expect("utf-8");
        assert!(
            out.contains(&format!("src{SEPARATOR}logger.rs] [INFO]: here")),
            "unexpected line: {out}"
        );
    }

    #[test]
    fn resolve_caller_path_uses_configured_root() {
        let logger = logger("/a/b/x/y.rs");
        let resolved = logger.resolve_caller_path(Location::caller());
        assert_eq!(resolved, Some(format!("..{SEPARATOR}x{SEPARATOR}y.rs")));
    }
}
