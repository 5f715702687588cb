//! reader/types.rs
//! Input shapes accepted by [`bytes_reader`](crate::reader::bytes_reader).

use std::error::Error;
use std::fmt;
use std::io::Read;

use bytes::Bytes;

/// Which capability a [`ByteSource`] was resolved from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SourceKind {
    Reader,
    Bytes,
    Text,
    Rendered,
    Described,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceKind::Reader => "reader",
            SourceKind::Bytes => "bytes",
            SourceKind::Text => "text",
            SourceKind::Rendered => "rendered",
            SourceKind::Described => "described",
        };
        f.write_str(name)
    }
}

/// Closed set of values that can back a byte stream.
pub enum ByteSource {
    /// Already a forward byte reader. Passed through untouched.
    Reader(Box<dyn Read + Send>),
    /// Raw byte sequence.
    Bytes(Bytes),
    /// Text; read as its UTF-8 encoding.
    Text(String),
    /// Any value with a textual rendering; read as the rendered string.
    Rendered(Box<dyn fmt::Display + Send>),
    /// Any error value; read as its description.
    Described(Box<dyn Error + Send + Sync>),
}

impl ByteSource {
    pub fn reader<R: Read + Send + 'static>(reader: R) -> Self {
        ByteSource::Reader(Box::new(reader))
    }

    pub fn rendered<T: fmt::Display + Send + 'static>(value: T) -> Self {
        ByteSource::Rendered(Box::new(value))
    }

    pub fn described<E: Error + Send + Sync + 'static>(err: E) -> Self {
        ByteSource::Described(Box::new(err))
    }

    pub fn kind(&self) -> SourceKind {
        match self {
            ByteSource::Reader(_) => SourceKind::Reader,
            ByteSource::Bytes(_) => SourceKind::Bytes,
            ByteSource::Text(_) => SourceKind::Text,
            ByteSource::Rendered(_) => SourceKind::Rendered,
            ByteSource::Described(_) => SourceKind::Described,
        }
    }
}

impl fmt::Debug for ByteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteSource::Bytes(b) => f.debug_tuple("Bytes").field(&b.len()).finish(),
            ByteSource::Text(s) => f.debug_tuple("Text").field(&s.len()).finish(),
            other => f.debug_tuple("ByteSource").field(&other.kind()).finish(),
        }
    }
}

impl From<Vec<u8>> for ByteSource {
    fn from(v: Vec<u8>) -> Self {
        ByteSource::Bytes(Bytes::from(v))
    }
}

impl From<&[u8]> for ByteSource {
    fn from(v: &[u8]) -> Self {
        ByteSource::Bytes(Bytes::copy_from_slice(v))
    }
}

impl<const N: usize> From<&[u8; N]> for ByteSource {
    fn from(v: &[u8; N]) -> Self {
        ByteSource::Bytes(Bytes::copy_from_slice(v))
    }
}

impl From<Bytes> for ByteSource {
    fn from(b: Bytes) -> Self {
        ByteSource::Bytes(b)
    }
}

impl From<String> for ByteSource {
    fn from(s: String) -> Self {
        ByteSource::Text(s)
    }
}

impl From<&str> for ByteSource {
    fn from(s: &str) -> Self {
        ByteSource::Text(s.to_owned())
    }
}

impl From<Box<dyn Read + Send>> for ByteSource {
    fn from(r: Box<dyn Read + Send>) -> Self {
        ByteSource::Reader(r)
    }
}

impl From<SourceProbe> for ByteSource {
    fn from(probe: SourceProbe) -> Self {
        probe.resolve()
    }
}

/// A value that may expose several capabilities at once.
///
/// Each capability sits in its own slot; [`SourceProbe::resolve`] picks one
/// by priority, independent of the order the slots were filled in.
#[derive(Default)]
pub struct SourceProbe {
    reader: Option<Box<dyn Read + Send>>,
    bytes: Option<Bytes>,
    text: Option<String>,
    rendered: Option<Box<dyn fmt::Display + Send>>,
    described: Option<Box<dyn Error + Send + Sync>>,
}

impl SourceProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reader<R: Read + Send + 'static>(mut self, reader: R) -> Self {
        self.reader = Some(Box::new(reader));
        self
    }

    pub fn with_bytes(mut self, bytes: impl Into<Bytes>) -> Self {
        self.bytes = Some(bytes.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_rendered<T: fmt::Display + Send + 'static>(mut self, value: T) -> Self {
        self.rendered = Some(Box::new(value));
        self
    }

    pub fn with_described<E: Error + Send + Sync + 'static>(mut self, err: E) -> Self {
        self.described = Some(Box::new(err));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.reader.is_none()
            && self.bytes.is_none()
            && self.text.is_none()
            && self.rendered.is_none()
            && self.described.is_none()
    }

    /// Pick the highest-priority capability.
    ///
    /// # Panics
    /// If no capability slot is filled. Building an empty probe is a caller
    /// bug, not a runtime condition.
    pub fn resolve(self) -> ByteSource {
        if let Some(r) = self.reader {
            return ByteSource::Reader(r);
        }
        if let Some(b) = self.bytes {
            return ByteSource::Bytes(b);
        }
        if let Some(s) = self.text {
            return ByteSource::Text(s);
        }
        if let Some(v) = self.rendered {
            return ByteSource::Rendered(v);
        }
        if let Some(e) = self.described {
            return ByteSource::Described(e);
        }
        panic!("SourceProbe::resolve: value exposes no byte-readable capability");
    }
}
