//! crates/logging-sink/src/stream.rs
//! Routing of rendered lines to the standard output or standard error stream.

use std::fmt;
use std::io::{self, Stderr, Stdout, Write};

use crate::sink::MessageSink;

/// Output stream selected for a rendered line.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Stream {
    /// The process standard output stream.
    Stdout,
    /// The process standard error stream.
    Stderr,
}

impl Stream {
    /// Returns the conventional lowercase name of the stream.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Destination for fully rendered log lines.
///
/// Implementors receive one line per record, without a trailing newline, and
/// the stream the record belongs to.
pub trait LineWriter {
    /// Writes `line` to the given stream.
    fn write_line(&mut self, stream: Stream, line: &str) -> io::Result<()>;
}

impl<T> LineWriter for &mut T
where
    T: LineWriter + ?Sized,
{
    fn write_line(&mut self, stream: Stream, line: &str) -> io::Result<()> {
        (**self).write_line(stream, line)
    }
}

/// A pair of [`MessageSink`]s, one per [`Stream`].
#[derive(Clone, Debug, Default)]
pub struct StreamPair<O, E> {
    out: MessageSink<O>,
    err: MessageSink<E>,
}

/// [`StreamPair`] bound to the process standard output and error streams.
pub type StandardStreams = StreamPair<Stdout, Stderr>;

impl StandardStreams {
    /// Creates a pair writing to the process stdout and stderr.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O, E> StreamPair<O, E> {
    /// Creates a pair from explicit writers.
    #[must_use]
    pub fn new(out: O, err: E) -> Self {
        Self {
            out: MessageSink::new(out),
            err: MessageSink::new(err),
        }
    }

    /// Borrows the sink behind the standard output stream.
    #[must_use]
    pub const fn out(&self) -> &MessageSink<O> {
        &self.out
    }

    /// Borrows the sink behind the standard error stream.
    #[must_use]
    pub const fn err(&self) -> &MessageSink<E> {
        &self.err
    }

    /// Consumes the pair and returns both writers.
    #[must_use]
    pub fn into_inner(self) -> (O, E) {
        (self.out.into_inner(), self.err.into_inner())
    }
}

impl<O, E> LineWriter for StreamPair<O, E>
where
    O: Write,
    E: Write,
{
    fn write_line(&mut self, stream: Stream, line: &str) -> io::Result<()> {
        match stream {
            Stream::Stdout => self.out.write(line),
            Stream::Stderr => self.err.write(line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_routed_by_stream() {
        let mut pair = StreamPair::new(Vec::new(), Vec::new());
        pair.write_line(Stream::Stdout, "one").expect("write succeeds");
        pair.write_line(Stream::Stderr, "two").expect("write succeeds");
        pair.write_line(Stream::Stdout, "three").expect("write succeeds");

        let (out, err) = pair.into_inner();
        assert_eq!(out, b"one\nthree\n");
        assert_eq!(err, b"two\n");
    }

    fn emit(mut writer: impl LineWriter) {
        writer
            .write_line(Stream::Stderr, "via ref")
            .expect("write succeeds");
    }

    #[test]
    fn mutable_reference_forwards_lines() {
        let mut pair = StreamPair::new(Vec::new(), Vec::new());
        emit(&mut pair);
        assert_eq!(pair.err().get_ref(), b"via ref\n");
        assert!(pair.out().get_ref().is_empty());
    }

    #[test]
    fn stream_names() {
        assert_eq!(Stream::Stdout.to_string(), "stdout");
        assert_eq!(Stream::Stderr.to_string(), "stderr");
    }
}
