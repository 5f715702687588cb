//! reader/stream.rs
//! Forward, single-pass byte stream over a resolved [`ByteSource`].

use std::fmt;
use std::io::{self, Read};

use bytes::buf::Reader;
use bytes::{Buf, Bytes};

use crate::reader::types::{ByteSource, SourceKind};

/// Outcome of one [`ByteStream::read_status`] call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReadStatus {
    /// `n` bytes were copied to the front of the buffer.
    Data(usize),
    /// No bytes remain.
    End,
}

impl ReadStatus {
    pub fn count(&self) -> usize {
        match self {
            ReadStatus::Data(n) => *n,
            ReadStatus::End => 0,
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(self, ReadStatus::End)
    }
}

enum Inner {
    Passthrough(Box<dyn Read + Send>),
    Memory(Reader<Bytes>),
}

/// Sequential byte reader produced by [`bytes_reader`].
///
/// Owns its source exclusively. Not meant to be shared between readers.
pub struct ByteStream {
    inner: Inner,
    kind: SourceKind,
}

/// Convert `input` into a forward byte stream.
///
/// Readers pass through unchanged; every other shape is materialized into an
/// in-memory buffer once and then read forward.
pub fn bytes_reader(input: impl Into<ByteSource>) -> ByteStream {
    let source = input.into();
    let kind = source.kind();
    log::debug!("Building byte stream from {} source", kind);

    let inner = match source {
        ByteSource::Reader(r) => Inner::Passthrough(r),
        ByteSource::Bytes(b) => Inner::Memory(b.reader()),
        ByteSource::Text(s) => Inner::Memory(Bytes::from(s).reader()),
        ByteSource::Rendered(v) => Inner::Memory(Bytes::from(v.to_string()).reader()),
        ByteSource::Described(e) => Inner::Memory(Bytes::from(e.to_string()).reader()),
    };

    ByteStream { inner, kind }
}

impl ByteStream {
    /// Read into `buf`, reporting end-of-data explicitly.
    ///
    /// Errors from a passthrough reader are returned unchanged.
    pub fn read_status(&mut self, buf: &mut [u8]) -> io::Result<ReadStatus> {
        match &mut self.inner {
            Inner::Memory(reader) => {
                if !reader.get_ref().has_remaining() {
                    return Ok(ReadStatus::End);
                }
                let n = reader.read(buf)?;
                Ok(ReadStatus::Data(n))
            }
            Inner::Passthrough(reader) => {
                let n = reader.read(buf)?;
                if n == 0 && !buf.is_empty() {
                    Ok(ReadStatus::End)
                } else {
                    Ok(ReadStatus::Data(n))
                }
            }
        }
    }

    /// Unread byte count for in-memory streams; `None` for passthrough.
    pub fn remaining(&self) -> Option<usize> {
        match &self.inner {
            Inner::Memory(reader) => Some(reader.get_ref().remaining()),
            Inner::Passthrough(_) => None,
        }
    }

    pub fn is_passthrough(&self) -> bool {
        matches!(self.inner, Inner::Passthrough(_))
    }

    pub fn source_kind(&self) -> SourceKind {
        self.kind
    }

    /// Drain everything not yet read.
    pub fn into_bytes(mut self) -> io::Result<Vec<u8>> {
        let mut out = Vec::with_capacity(self.remaining().unwrap_or(0));
        self.read_to_end(&mut out)?;
        Ok(out)
    }

    /// Give back the underlying reader. Passthrough streams return the
    /// caller's original reader.
    pub fn into_reader(self) -> Box<dyn Read + Send> {
        match self.inner {
            Inner::Passthrough(r) => r,
            Inner::Memory(reader) => Box::new(reader),
        }
    }
}

impl Read for ByteStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match &mut self.inner {
            Inner::Passthrough(reader) => reader.read(buf),
            Inner::Memory(reader) => reader.read(buf),
        }
    }
}

impl fmt::Debug for ByteStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteStream")
            .field("kind", &self.kind)
            .field("remaining", &self.remaining())
            .finish()
    }
}

impl From<ByteStream> for ByteSource {
    fn from(stream: ByteStream) -> Self {
        ByteSource::Reader(stream.into_reader())
    }
}
