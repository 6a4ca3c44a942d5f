use super::MessageSink;

impl<W> MessageSink<W> {
    /// Creates a sink writing newline-terminated lines to `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}
