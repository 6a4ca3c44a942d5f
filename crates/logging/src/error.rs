//! crates/logging/src/error.rs
//! Errors raised while configuring the root path.

use std::io;

/// Error returned when a root path cannot be adopted.
///
/// Each variant renders a fixed, human-readable message. [`PathError::code`]
/// exposes the stable identifier for callers that need to branch on the
/// failure without matching on the enum.
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    /// The path does not exist.
    #[error("The specified path was not found.")]
    PathNotFound,

    /// Access was denied while inspecting the path.
    #[error("Permission denied.")]
    PermissionDenied,

    /// The path exists but names a regular file.
    #[error("The specified path is a file.")]
    PathIsFile,

    /// Any other failure reported by the operating system.
    #[error("An unknown error occurred.")]
    Unknown {
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl PathError {
    /// Returns the stable identifier of the error kind.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::PathNotFound => "PATH_NOT_FOUND",
            Self::PermissionDenied => "PERMISSION_DENIED",
            Self::PathIsFile => "PATH_IS_FILE",
            Self::Unknown { .. } => "UNKNOWN",
        }
    }
}

impl From<io::Error> for PathError {
    fn from(source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::PathNotFound,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::Unknown { source },
        }
    }
}
