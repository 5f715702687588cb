#[cfg(test)]
mod tests {
    use std::fmt;
    use std::io::{self, Cursor, Read};
    use std::thread;

    use proptest::prelude::*;
    use dry_bytes::reader::{bytes_reader, ByteSource, ByteStream, ReadStatus, SourceKind, SourceProbe};

    struct MyString {
        s: String,
    }

    impl fmt::Display for MyString {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(&self.s)
        }
    }

    #[derive(Debug)]
    struct MyError {
        s: String,
    }

    impl fmt::Display for MyError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(&self.s)
        }
    }

    impl std::error::Error for MyError {}

    /// Readable and renderable at once, with different content for each.
    #[derive(Clone)]
    struct Both {
        data: Vec<u8>,
        pos: usize,
    }

    impl Read for Both {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let rest = &self.data[self.pos..];
            let n = rest.len().min(buf.len());
            buf[..n].copy_from_slice(&rest[..n]);
            self.pos += n;
            Ok(n)
        }
    }

    impl fmt::Display for Both {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("rendered")
        }
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "link down"))
        }
    }

    fn assert_reads_hello(mut stream: ByteStream) {
        let mut result = [0u8; 5];
        let status = stream.read_status(&mut result).unwrap();
        assert_eq!(status, ReadStatus::Data(5));
        assert_eq!(&result, b"hello");

        let status = stream.read_status(&mut result).unwrap();
        assert_eq!(status, ReadStatus::End);
        assert_eq!(status.count(), 0);
    }

    fn drain(stream: &mut ByteStream, buf_len: usize) -> Vec<u8> {
        let mut out = Vec::new();
        let mut buf = vec![0u8; buf_len];
        loop {
            match stream.read_status(&mut buf).unwrap() {
                ReadStatus::Data(n) => {
                    assert!(n > 0 && n <= buf_len);
                    out.extend_from_slice(&buf[..n]);
                }
                ReadStatus::End => break,
            }
        }
        out
    }

    // --- Each recognized shape ---

    #[test]
    fn reads_hello_from_reader() {
        assert_reads_hello(bytes_reader(ByteSource::reader(Cursor::new("hello"))));
    }

    #[test]
    fn reads_hello_from_bytes() {
        let bytes_input: Vec<u8> = b"hello".to_vec();
        assert_reads_hello(bytes_reader(bytes_input));
    }

    #[test]
    fn reads_hello_from_byte_slice_and_array() {
        assert_reads_hello(bytes_reader(&b"hello"[..]));
        assert_reads_hello(bytes_reader(b"hello"));
    }

    #[test]
    fn reads_hello_from_text() {
        assert_reads_hello(bytes_reader("hello"));
        assert_reads_hello(bytes_reader(String::from("hello")));
    }

    #[test]
    fn reads_hello_from_rendered_value() {
        let my_str = MyString { s: "hello".into() };
        assert_reads_hello(bytes_reader(ByteSource::rendered(my_str)));
    }

    #[test]
    fn reads_hello_from_error_value() {
        let my_err = MyError { s: "hello".into() };
        assert_reads_hello(bytes_reader(ByteSource::described(my_err)));
    }

    #[test]
    fn io_read_signals_end_with_zero() {
        let mut stream = bytes_reader("hello");
        let mut out = String::new();
        stream.read_to_string(&mut out).unwrap();
        assert_eq!(out, "hello");

        let mut buf = [0u8; 4];
        assert_eq!(stream.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn rendered_value_yields_rendering_not_structure() {
        let stream = bytes_reader(ByteSource::rendered(3.5f64));
        assert_eq!(stream.into_bytes().unwrap(), b"3.5");
    }

    #[test]
    fn text_is_utf8_encoded() {
        let stream = bytes_reader("grüße ✓");
        assert_eq!(stream.into_bytes().unwrap(), "grüße ✓".as_bytes());
    }

    #[test]
    fn source_kind_is_reported() {
        assert_eq!(bytes_reader("x").source_kind(), SourceKind::Text);
        assert_eq!(bytes_reader(vec![1u8]).source_kind(), SourceKind::Bytes);
        assert_eq!(
            bytes_reader(ByteSource::reader(io::empty())).source_kind(),
            SourceKind::Reader
        );
    }

    // --- Passthrough ---

    #[test]
    fn reader_is_passed_through_without_copy() {
        let boxed: Box<dyn Read + Send> = Box::new(Cursor::new(b"hello".to_vec()));
        let before = &*boxed as *const (dyn Read + Send) as *const u8 as usize;

        let stream = bytes_reader(boxed);
        assert!(stream.is_passthrough());
        assert_eq!(stream.remaining(), None);

        let back = stream.into_reader();
        let after = &*back as *const (dyn Read + Send) as *const u8 as usize;
        assert_eq!(before, after);
    }

    #[test]
    fn passthrough_error_is_propagated_unchanged() {
        let mut stream = bytes_reader(ByteSource::reader(FailingReader));
        let mut buf = [0u8; 8];

        let err = stream.read_status(&mut buf).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::ConnectionReset);
        assert_eq!(err.to_string(), "link down");

        let err = stream.read(&mut buf).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::ConnectionReset);
    }

    #[test]
    fn byte_stream_can_feed_another_byte_stream() {
        let inner = bytes_reader("hello");
        let outer = bytes_reader(inner);
        assert!(outer.is_passthrough());
        assert_reads_hello(outer);
    }

    // --- Capability priority ---

    #[test]
    fn reader_capability_wins_over_rendering() {
        let both = Both { data: b"hello".to_vec(), pos: 0 };
        // Slots filled in reverse priority order on purpose.
        let probe = SourceProbe::new()
            .with_rendered(both.clone())
            .with_reader(both);
        assert_reads_hello(bytes_reader(probe));
    }

    #[test]
    fn probe_priority_follows_capability_order() {
        let probe = SourceProbe::new()
            .with_described(MyError { s: "error".into() })
            .with_rendered(MyString { s: "rendered".into() })
            .with_text("text");
        assert_eq!(bytes_reader(probe).into_bytes().unwrap(), b"text");

        let probe = SourceProbe::new()
            .with_described(MyError { s: "error".into() })
            .with_rendered(MyString { s: "rendered".into() });
        assert_eq!(bytes_reader(probe).into_bytes().unwrap(), b"rendered");

        let probe = SourceProbe::new()
            .with_text("text")
            .with_bytes(b"bytes".to_vec());
        assert_eq!(bytes_reader(probe).into_bytes().unwrap(), b"bytes");

        let probe = SourceProbe::new().with_described(MyError { s: "hello".into() });
        assert_reads_hello(bytes_reader(probe));
    }

    #[test]
    #[should_panic(expected = "no byte-readable capability")]
    fn empty_probe_is_a_programming_error() {
        let probe = SourceProbe::new();
        assert!(probe.is_empty());
        let _ = bytes_reader(probe);
    }

    // --- Ownership / threads ---

    #[test]
    fn independent_streams_on_many_threads() {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                thread::spawn(move || {
                    let text = format!("thread-{}", i);
                    let stream = bytes_reader(text.clone());
                    (text, stream.into_bytes().unwrap())
                })
            })
            .collect();

        for h in handles {
            let (text, bytes) = h.join().unwrap();
            assert_eq!(bytes, text.as_bytes());
        }
    }

    #[test]
    fn stream_moves_across_threads() {
        let stream = bytes_reader("hello");
        let handle = thread::spawn(move || assert_reads_hello(stream));
        handle.join().unwrap();
    }

    // Property-based: every byte sequence comes back exactly once, in order.
    proptest! {
        #[test]
        fn prop_bytes_round_trip(data in proptest::collection::vec(any::<u8>(), 0..2048), buf_len in 1usize..97) {
            let mut stream = bytes_reader(data.clone());
            let out = drain(&mut stream, buf_len);
            prop_assert_eq!(out, data);
            prop_assert_eq!(stream.remaining(), Some(0));
        }

        #[test]
        fn prop_text_is_utf8(s in "\\PC*") {
            let out = bytes_reader(s.clone()).into_bytes().unwrap();
            prop_assert_eq!(out, s.into_bytes());
        }

        #[test]
        fn prop_rendered_matches_to_string(v in any::<i64>()) {
            let out = bytes_reader(ByteSource::rendered(v)).into_bytes().unwrap();
            prop_assert_eq!(out, v.to_string().into_bytes());
        }

        #[test]
        fn prop_passthrough_matches_source(data in proptest::collection::vec(any::<u8>(), 0..1024), buf_len in 1usize..33) {
            let mut stream = bytes_reader(ByteSource::reader(Cursor::new(data.clone())));
            let out = drain(&mut stream, buf_len);
            prop_assert_eq!(out, data);
        }
    }
}
