#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the output half of the pathlog logger: a
//! line-oriented [`MessageSink`] wrapping any [`std::io::Write`] implementor,
//! and a [`StreamPair`] that routes rendered lines to the standard output or
//! standard error stream.
//!
//! # Design
//!
//! The logger renders each record into a single line of text and hands it to
//! a [`LineWriter`] together with the [`Stream`] selected by the record's
//! level. [`StreamPair::standard`] targets the process streams; pairs built
//! over in-memory buffers let tests observe exactly what was written.
//!
//! # Invariants
//!
//! - A sink never alters the rendered text; it only appends a newline
//!   terminator.
//! - The line and its terminator reach the writer in a single `write_all`
//!   call, so every record occupies its own line.
//!
//! # Errors
//!
//! All operations surface [`std::io::Error`] values originating from the
//! underlying writer.
//!
//! # Examples
//!
//! ```
//! use logging_sink::{LineWriter, Stream, StreamPair};
//!
//! let mut streams = StreamPair::new(Vec::new(), Vec::new());
//! streams.write_line(Stream::Stdout, "ready")?;
//! streams.write_line(Stream::Stderr, "careful")?;
//!
//! let (out, err) = streams.into_inner();
//! assert_eq!(out, b"ready\n");
//! assert_eq!(err, b"careful\n");
//! # Ok::<(), std::io::Error>(())
//! ```

mod sink;
mod stream;

pub use sink::MessageSink;
pub use stream::{LineWriter, StandardStreams, Stream, StreamPair};
