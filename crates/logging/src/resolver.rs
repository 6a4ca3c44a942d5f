//! crates/logging/src/resolver.rs
//! Caller-path resolution.
//!
//! The public emitters are `#[track_caller]`, so the source file handed to a
//! [`StackResolver`] already belongs to the code that invoked the logger:
//! neither the resolver's frame nor the emitter's frame is ever observed, and
//! no stack walk takes place. The resolver only has to turn the file the
//! compiler recorded into an absolute path; [`relative_to_root`] then renders
//! it against the configured root.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use crate::config::RootPath;
use crate::segments::{self, SEPARATOR};

/// Source of absolute caller file paths.
pub trait StackResolver {
    /// Returns the absolute path of `file`, the source file the compiler
    /// recorded for the call site, or `None` when it cannot be determined.
    fn caller_file(&self, file: &'static str) -> Option<PathBuf>;
}

impl<T> StackResolver for &T
where
    T: StackResolver + ?Sized,
{
    fn caller_file(&self, file: &'static str) -> Option<PathBuf> {
        (**self).caller_file(file)
    }
}

/// Resolver backed by `#[track_caller]` source locations.
///
/// Cargo records workspace sources relative to the workspace root while the
/// process usually runs from a package or workspace directory. Relative files
/// are therefore anchored at the first ancestor of the base directory under
/// which they exist, falling back to the base itself. Anchored paths are
/// cached per source file.
#[derive(Clone, Debug)]
pub struct TrackedCaller {
    base: Option<PathBuf>,
    anchored: RefCell<HashMap<&'static str, PathBuf>>,
}

impl TrackedCaller {
    /// Anchors relative sources at the process working directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: env::current_dir().ok(),
            anchored: RefCell::default(),
        }
    }

    /// Anchors relative sources at `base`.
    #[must_use]
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self {
            base: Some(base.into()),
            anchored: RefCell::default(),
        }
    }

    /// Directory relative sources are anchored at, if any.
    #[must_use]
    pub fn base(&self) -> Option<&Path> {
        self.base.as_deref()
    }

    fn anchor(&self, file: &Path) -> PathBuf {
        let Some(base) = &self.base else {
            return file.to_path_buf();
        };

        base.ancestors()
            .map(|dir| dir.join(file))
            .find(|candidate| candidate.exists())
            .unwrap_or_else(|| base.join(file))
    }
}

impl Default for TrackedCaller {
    fn default() -> Self {
        Self::new()
    }
}

impl StackResolver for TrackedCaller {
    fn caller_file(&self, file: &'static str) -> Option<PathBuf> {
        if file.is_empty() {
            return None;
        }

        let path = Path::new(file);
        if path.is_absolute() {
            return Some(path.to_path_buf());
        }

        if let Some(hit) = self.anchored.borrow().get(file) {
            return Some(hit.clone());
        }

        let anchored = self.anchor(path);
        self.anchored.borrow_mut().insert(file, anchored.clone());
        Some(anchored)
    }
}

/// Resolver that always reports the same file and counts how often it is asked.
///
/// Used by tests, and by hosts where source locations are meaningless.
#[derive(Debug, Default)]
pub struct FixedCaller {
    file: Option<PathBuf>,
    captures: Cell<usize>,
}

impl FixedCaller {
    /// Reports `file` for every call site.
    #[must_use]
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: Some(file.into()),
            captures: Cell::new(0),
        }
    }

    /// Never resolves a caller.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Number of resolutions performed so far.
    #[must_use]
    pub fn captures(&self) -> usize {
        self.captures.get()
    }
}

impl StackResolver for FixedCaller {
    fn caller_file(&self, _file: &'static str) -> Option<PathBuf> {
        self.captures.set(self.captures.get() + 1);
        self.file.clone()
    }
}

/// Resolves `file` through `resolver` and renders it relative to `root`.
pub fn resolve_caller_path<R>(resolver: &R, root: &RootPath, file: &'static str) -> Option<String>
where
    R: StackResolver + ?Sized,
{
    let caller = resolver.caller_file(file)?;
    Some(render_relative(
        root.segments(),
        &caller.to_string_lossy(),
        SEPARATOR,
    ))
}

/// Renders `caller` relative to `root`.
///
/// Both paths are compared segment by segment from the start. With no shared
/// named segment the caller is returned whole. Otherwise one `..` is emitted
/// per root segment past the shared prefix, or `.` when the caller lies under
/// the root, followed by the caller's remaining segments.
///
/// # Examples
///
/// ```
/// use logging::relative_to_root;
///
/// assert_eq!(relative_to_root("/a/b/c", "/a/b/c/d/e.rs", "/"), "./d/e.rs");
/// assert_eq!(relative_to_root("/a/b/c", "/a/b/x/y.rs", "/"), "../x/y.rs");
/// assert_eq!(relative_to_root("/a/b/c", "/x/y/z.rs", "/"), "/x/y/z.rs");
/// ```
#[must_use]
pub fn relative_to_root(root: &str, caller: &str, separator: &str) -> String {
    render_relative(&segments::split(root), caller, separator)
}

fn render_relative(root: &[String], caller: &str, separator: &str) -> String {
    let caller = segments::split(caller);

    let depth_index = root
        .iter()
        .zip(&caller)
        .take_while(|(root_segment, caller_segment)| root_segment == caller_segment)
        .count();

    // A shared absolute marker alone is not a common ancestor.
    if root[..depth_index].iter().all(String::is_empty) {
        return segments::join(&caller, separator);
    }

    let remaining = segments::join(&caller[depth_index..], separator);
    let mut rendered = String::new();
    if depth_index < root.len() {
        for _ in depth_index..root.len() {
            rendered.push_str("..");
            rendered.push_str(separator);
        }
    } else {
        rendered.push('.');
        rendered.push_str(separator);
    }
    rendered.push_str(&remaining);
    rendered
}
