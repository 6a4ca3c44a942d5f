//! crates/logging/src/levels.rs
//! Severity levels with their tags, colors and output streams.

use std::fmt;
use std::str::FromStr;

use logging_sink::Stream;

/// ANSI sequence that resets terminal attributes after a colored tag.
pub const ANSI_RESET: &str = "\x1b[0m";

/// Severity of a log record.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Level {
    /// Diagnostic detail, hidden unless debug output is enabled.
    Debug,
    /// Informational message.
    Info,
    /// Something unexpected that does not stop the program.
    Warn,
    /// A failure.
    Error,
}

impl Level {
    /// Every level, in increasing severity.
    pub const ALL: [Self; 4] = [Self::Debug, Self::Info, Self::Warn, Self::Error];

    /// Upper-case tag printed between brackets.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// ANSI foreground color applied to the tag when colored output is on.
    #[must_use]
    pub const fn ansi_color(self) -> &'static str {
        match self {
            Self::Debug => "\x1b[34m",
            Self::Info => "\x1b[32m",
            Self::Warn => "\x1b[33m",
            Self::Error => "\x1b[31m",
        }
    }

    /// Stream the level is written to.
    #[must_use]
    pub const fn stream(self) -> Stream {
        match self {
            Self::Debug | Self::Info => Stream::Stdout,
            Self::Warn | Self::Error => Stream::Stderr,
        }
    }

    /// Lower-case name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error returned when parsing an unknown level name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level: {0}")]
pub struct ParseLevelError(String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(s))
            .or_else(|| s.eq_ignore_ascii_case("warning").then_some(Self::Warn))
            .ok_or_else(|| ParseLevelError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_and_colors() {
        assert_eq!(Level::Debug.tag(), "DEBUG");
        assert_eq!(Level::Info.tag(), "INFO");
        assert_eq!(Level::Warn.tag(), "WARN");
        assert_eq!(Level::Error.tag(), "ERROR");

        assert_eq!(Level::Debug.ansi_color(), "\x1b[34m");
        assert_eq!(Level::Info.ansi_color(), "\x1b[32m");
        assert_eq!(Level::Warn.ansi_color(), "\x1b[33m");
        assert_eq!(Level::Error.ansi_color(), "\x1b[31m");
    }

    #[test]
    fn colors_are_distinct() {
        for (index, level) in Level::ALL.iter().enumerate() {
            for other in &Level::ALL[index + 1..] {
                assert_ne!(level.ansi_color(), other.ansi_color());
            }
        }
    }

    #[test]
    fn streams_follow_severity() {
        assert_eq!(Level::Debug.stream(), Stream::Stdout);
        assert_eq!(Level::Info.stream(), Stream::Stdout);
        assert_eq!(Level::Warn.stream(), Stream::Stderr);
        assert_eq!(Level::Error.stream(), Stream::Stderr);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("debug".parse::<Level>(), Ok(Level::Debug));
        assert_eq!("INFO".parse::<Level>(), Ok(Level::Info));
        assert_eq!("Warning".parse::<Level>(), Ok(Level::Warn));
        assert_eq!("error".parse::<Level>(), Ok(Level::Error));
        assert!("trace".parse::<Level>().is_err());
    }

    #[test]
    fn ordering_is_by_severity() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Warn < Level::Error);
    }
}
