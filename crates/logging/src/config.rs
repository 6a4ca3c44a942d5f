//! crates/logging/src/config.rs
//! Logger configuration: root path, color toggle and debug toggle.

use std::env;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::PathError;
use crate::segments::{self, SEPARATOR};

/// Base directory against which caller paths are rendered, stored as segments.
///
/// Both `/` and `\` are accepted as input delimiters; the path is rendered
/// back with the host separator. Outside this crate a `RootPath` can only be
/// obtained from [`validated`](Self::validated), [`current_dir`](Self::current_dir),
/// `Default` (the empty root) or deserialization, which validates as well.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct RootPath {
    segments: Vec<String>,
}

impl RootPath {
    /// Splits `path` into segments without touching the filesystem.
    pub(crate) fn new(path: impl AsRef<Path>) -> Self {
        Self {
            segments: segments::split(&path.as_ref().to_string_lossy()),
        }
    }

    /// Splits `path` after checking that it exists and is not a regular file.
    ///
    /// The path is stored as given. A relative path is checked against the
    /// working directory but compared lexically with the absolute caller
    /// paths, so it shares no segment with them and every caller is then
    /// rendered absolute. Pass an absolute path (for instance via
    /// [`std::path::absolute`]) to get `./` and `../` forms.
    pub fn validated(path: impl AsRef<Path>) -> Result<Self, PathError> {
        let path = path.as_ref();
        let metadata = fs::metadata(path)?;
        if metadata.is_file() {
            return Err(PathError::PathIsFile);
        }
        Ok(Self::new(path))
    }

    /// Root taken from the process working directory.
    ///
    /// An unreadable working directory yields an empty root, which renders
    /// every caller with its absolute path.
    pub fn current_dir() -> Self {
        env::current_dir().map(Self::new).unwrap_or_default()
    }

    /// The ordered segments; an absolute root starts with an empty segment.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Reports whether the root has no segments at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Joins the segments with `separator`.
    #[must_use]
    pub fn join_with(&self, separator: &str) -> String {
        segments::join(&self.segments, separator)
    }
}

impl fmt::Display for RootPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join_with(SEPARATOR))
    }
}

impl TryFrom<String> for RootPath {
    type Error = PathError;

    fn try_from(path: String) -> Result<Self, Self::Error> {
        Self::validated(path)
    }
}

impl From<RootPath> for String {
    fn from(root: RootPath) -> Self {
        root.to_string()
    }
}

/// Settings read by every log call.
///
/// The root path only changes through [`set_root_path`](Self::set_root_path),
/// so it always holds the last path that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    root_path: RootPath,
    colored_log: bool,
    log_debug_level: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            root_path: RootPath::current_dir(),
            colored_log: false,
            log_debug_level: false,
        }
    }
}

impl LoggerConfig {
    /// Creates a configuration with an explicit root and both toggles off.
    ///
    /// `root_path` comes from [`RootPath::validated`] or
    /// [`RootPath::current_dir`], so the invariant that the root passed
    /// validation holds from construction on.
    #[must_use]
    pub const fn with_root(root_path: RootPath) -> Self {
        Self {
            root_path,
            colored_log: false,
            log_debug_level: false,
        }
    }

    /// Returns the configuration with colored output set to `enabled`.
    #[must_use]
    pub fn colored(mut self, enabled: bool) -> Self {
        self.colored_log = enabled;
        self
    }

    /// Returns the configuration with debug output set to `enabled`.
    #[must_use]
    pub fn debug_level(mut self, enabled: bool) -> Self {
        self.log_debug_level = enabled;
        self
    }

    /// The root path joined with the host separator.
    #[must_use]
    pub fn root_path(&self) -> String {
        self.root_path.to_string()
    }

    /// The root path segments used for caller resolution.
    #[must_use]
    pub const fn root(&self) -> &RootPath {
        &self.root_path
    }

    /// Replaces the root path after validating it.
    ///
    /// On failure the previous root is kept. See [`RootPath::validated`] for
    /// how relative paths are treated.
    pub fn set_root_path(&mut self, path: impl AsRef<Path>) -> Result<(), PathError> {
        self.root_path = RootPath::validated(path)?;
        Ok(())
    }

    /// Whether level tags are wrapped in ANSI colors.
    #[must_use]
    pub const fn colored_log(&self) -> bool {
        self.colored_log
    }

    /// Enables or disables colored level tags.
    pub fn set_colored_log(&mut self, enabled: bool) {
        self.colored_log = enabled;
    }

    /// Whether debug records are written.
    #[must_use]
    pub const fn log_debug_level(&self) -> bool {
        self.log_debug_level
    }

    /// Enables or disables debug records.
    pub fn set_log_debug_level(&mut self, enabled: bool) {
        self.log_debug_level = enabled;
    }
}
