//! Integration tests for routing rendered lines through a [`StreamPair`].

use logging_sink::{LineWriter, MessageSink, Stream, StreamPair};

/// Lines written through the trait object keep their order per stream.
#[test]
fn dyn_line_writer_preserves_order() {
    let mut pair = StreamPair::new(Vec::new(), Vec::new());
    {
        let writer: &mut dyn LineWriter = &mut pair;
        for index in 0..3 {
            writer
                .write_line(Stream::Stdout, &format!("out {index}"))
                .expect("write succeeds");
            writer
                .write_line(Stream::Stderr, &format!("err {index}"))
                .expect("write succeeds");
        }
    }

    let (out, err) = pair.into_inner();
    assert_eq!(String::from_utf8(out).expect("utf-8"), "out 0\nout 1\nout 2\n");
    assert_eq!(String::from_utf8(err).expect("utf-8"), "err 0\nerr 1\nerr 2\n");
}

/// Unicode and ANSI escape sequences pass through untouched.
#[test]
fn escape_sequences_are_not_altered() {
    let mut sink = MessageSink::new(Vec::new());
    let line = "[\u{1b}[32mINFO\u{1b}[0m]: héllo wörld";
    sink.write(line).expect("write succeeds");

    let output = String::from_utf8(sink.into_inner()).expect("utf-8");
    assert_eq!(output, format!("{line}\n"));
}

/// A default pair starts empty on both streams.
#[test]
fn default_pair_is_empty() {
    let pair: StreamPair<Vec<u8>, Vec<u8>> = StreamPair::default();
    assert!(pair.out().get_ref().is_empty());
    assert!(pair.err().get_ref().is_empty());
}
