use super::MessageSink;
use std::io::{self, Write};

impl<W> MessageSink<W>
where
    W: Write,
{
    /// Writes `line` followed by a newline.
    pub fn write(&mut self, line: &str) -> io::Result<()> {
        // One write per record keeps lines from interleaving on shared streams.
        let mut buffer = String::with_capacity(line.len() + 1);
        buffer.push_str(line);
        buffer.push('\n');
        self.writer.write_all(buffer.as_bytes())
    }
}
