use std::fmt;

/// Line-oriented sink that writes rendered log lines into an
/// [`std::io::Write`] target.
///
/// Every [`write`](Self::write) is terminated by a newline and reaches the
/// writer as a single `write_all` call.
///
/// # Examples
///
/// ```
/// use logging_sink::MessageSink;
///
/// let mut sink = MessageSink::new(Vec::new());
///
/// sink.write("first")?;
/// sink.write("second")?;
///
/// assert_eq!(sink.into_inner(), b"first\nsecond\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Default)]
pub struct MessageSink<W> {
    writer: W,
}

mod constructors;
mod writing;

impl<W> MessageSink<W> {
    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }
}

impl<W> fmt::Debug for MessageSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageSink")
            .field("writer", &self.writer)
            .finish()
    }
}
