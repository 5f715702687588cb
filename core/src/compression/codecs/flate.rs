//! codecs/flate.rs
//! Deflate family via flate2: raw deflate, zlib and gzip, streaming enc/dec.

use std::io::{self, Read, Write};

use flate2::write::{DeflateEncoder, GzDecoder, GzEncoder, ZlibEncoder};
use flate2::{read, Compression, Decompress, FlushDecompress, Status};

use crate::compression::constants::{DEFAULT_LEVEL_FLATE, MAX_LEVEL_FLATE, MIN_LEVEL_FLATE};
use crate::compression::types::{CompressionError, CompressionLevel, Compressor, Decompressor};

/// Container around the deflate bit stream.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlateFormat {
    Raw,
    Zlib,
    Gzip,
}

impl FlateFormat {
    pub fn name(&self) -> &'static str {
        match self {
            FlateFormat::Raw => "deflate",
            FlateFormat::Zlib => "zlib",
            FlateFormat::Gzip => "gzip",
        }
    }
}

pub fn flate_level(level: CompressionLevel, format: FlateFormat) -> Compression {
    let lvl = level.resolve(
        format.name(),
        MIN_LEVEL_FLATE,
        MAX_LEVEL_FLATE,
        DEFAULT_LEVEL_FLATE,
        MAX_LEVEL_FLATE,
    );
    Compression::new(lvl as u32)
}

/// Read-side decoder over a complete compressed buffer.
pub fn flate_reader<'a>(format: FlateFormat, data: &'a [u8]) -> Box<dyn Read + 'a> {
    match format {
        FlateFormat::Raw => Box::new(read::DeflateDecoder::new(data)),
        FlateFormat::Zlib => Box::new(read::ZlibDecoder::new(data)),
        FlateFormat::Gzip => Box::new(read::GzDecoder::new(data)),
    }
}

enum Encoder {
    Raw(DeflateEncoder<Vec<u8>>),
    Zlib(ZlibEncoder<Vec<u8>>),
    Gzip(GzEncoder<Vec<u8>>),
}

impl Encoder {
    fn new(format: FlateFormat, level: Compression) -> Self {
        match format {
            FlateFormat::Raw => Encoder::Raw(DeflateEncoder::new(Vec::new(), level)),
            FlateFormat::Zlib => Encoder::Zlib(ZlibEncoder::new(Vec::new(), level)),
            FlateFormat::Gzip => Encoder::Gzip(GzEncoder::new(Vec::new(), level)),
        }
    }

    fn write_all(&mut self, input: &[u8]) -> io::Result<()> {
        match self {
            Encoder::Raw(e) => e.write_all(input),
            Encoder::Zlib(e) => e.write_all(input),
            Encoder::Gzip(e) => e.write_all(input),
        }
    }

    /// Move output produced so far into `out`.
    fn drain_into(&mut self, out: &mut Vec<u8>) {
        let produced = match self {
            Encoder::Raw(e) => e.get_mut(),
            Encoder::Zlib(e) => e.get_mut(),
            Encoder::Gzip(e) => e.get_mut(),
        };
        out.append(produced);
    }

    fn finish(self) -> io::Result<Vec<u8>> {
        match self {
            Encoder::Raw(e) => e.finish(),
            Encoder::Zlib(e) => e.finish(),
            Encoder::Gzip(e) => e.finish(),
        }
    }
}

/// Output space reserved per inflate step.
const INFLATE_STEP: usize = 32 * 1024;

/// Raw deflate or zlib inflater that tracks whether the final block (and,
/// for zlib, the Adler-32 trailer) has been seen.
struct Inflater {
    raw: Decompress,
    done: bool,
}

impl Inflater {
    fn new(zlib_header: bool) -> Self {
        Self { raw: Decompress::new(zlib_header), done: false }
    }

    fn feed(&mut self, mut input: &[u8], out: &mut Vec<u8>) -> io::Result<()> {
        loop {
            if self.done {
                if !input.is_empty() {
                    return Err(io::Error::new(io::ErrorKind::InvalidData, "trailing data after stream end"));
                }
                return Ok(());
            }
            if out.capacity() - out.len() < INFLATE_STEP {
                out.reserve(INFLATE_STEP);
            }
            let (in_before, out_before) = (self.raw.total_in(), self.raw.total_out());
            let status = self
                .raw
                .decompress_vec(input, out, FlushDecompress::None)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            let consumed = (self.raw.total_in() - in_before) as usize;
            let produced = self.raw.total_out() - out_before;
            input = &input[consumed..];

            if status == Status::StreamEnd {
                self.done = true;
                continue;
            }
            if consumed == 0 && produced == 0 {
                return Ok(());
            }
            if input.is_empty() && out.len() < out.capacity() {
                return Ok(());
            }
        }
    }
}

enum Decoder {
    Raw(Inflater),
    Zlib(Inflater),
    Gzip(GzDecoder<Vec<u8>>),
}

impl Decoder {
    fn new(format: FlateFormat) -> Self {
        match format {
            FlateFormat::Raw => Decoder::Raw(Inflater::new(false)),
            FlateFormat::Zlib => Decoder::Zlib(Inflater::new(true)),
            FlateFormat::Gzip => Decoder::Gzip(GzDecoder::new(Vec::new())),
        }
    }

    fn feed(&mut self, input: &[u8], out: &mut Vec<u8>) -> io::Result<()> {
        match self {
            Decoder::Raw(d) | Decoder::Zlib(d) => d.feed(input, out),
            Decoder::Gzip(d) => {
                d.write_all(input)?;
                out.append(d.get_mut());
                Ok(())
            }
        }
    }

    /// Fails unless the whole compressed stream was seen.
    fn finish(self, out: &mut Vec<u8>) -> io::Result<()> {
        match self {
            Decoder::Raw(mut d) | Decoder::Zlib(mut d) => {
                d.feed(&[], out)?;
                if !d.done {
                    return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "incomplete deflate stream"));
                }
                Ok(())
            }
            Decoder::Gzip(d) => {
                out.extend_from_slice(&d.finish()?);
                Ok(())
            }
        }
    }
}

pub struct FlateCompressor {
    format: FlateFormat,
    encoder: Option<Encoder>, // wrapped in Option to allow finish()
}

impl FlateCompressor {
    pub fn new(
        format: FlateFormat,
        level: CompressionLevel,
    ) -> Result<Box<dyn Compressor + Send>, CompressionError> {
        let lvl = flate_level(level, format);
        log::debug!("Creating {} compressor at level {}", format.name(), lvl.level());
        Ok(Box::new(Self { format, encoder: Some(Encoder::new(format, lvl)) }))
    }
}

impl Compressor for FlateCompressor {
    fn compress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let codec = self.format.name();
        let enc = self
            .encoder
            .as_mut()
            .ok_or_else(|| CompressionError::StateError(format!("{} encoder already finished", codec)))?;
        enc.write_all(input).map_err(|e| CompressionError::process(codec, e))?;
        enc.drain_into(out);
        Ok(())
    }

    fn finish(&mut self, out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let codec = self.format.name();
        let enc = self
            .encoder
            .take()
            .ok_or_else(|| CompressionError::StateError(format!("{} encoder already finished", codec)))?;
        let tail = enc.finish().map_err(|e| CompressionError::process(codec, e))?;
        out.extend_from_slice(&tail);
        Ok(())
    }
}

pub struct FlateDecompressor {
    format: FlateFormat,
    decoder: Option<Decoder>,
}

impl FlateDecompressor {
    pub fn new(format: FlateFormat) -> Result<Box<dyn Decompressor + Send>, CompressionError> {
        log::debug!("Creating {} decompressor", format.name());
        Ok(Box::new(Self { format, decoder: Some(Decoder::new(format)) }))
    }
}

impl Decompressor for FlateDecompressor {
    fn decompress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let codec = self.format.name();
        let dec = self
            .decoder
            .as_mut()
            .ok_or_else(|| CompressionError::StateError(format!("{} decoder already finished", codec)))?;
        dec.feed(input, out).map_err(|e| CompressionError::process(codec, e))
    }

    fn finish(&mut self, out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let codec = self.format.name();
        let dec = self
            .decoder
            .take()
            .ok_or_else(|| CompressionError::StateError(format!("{} decoder already finished", codec)))?;
        dec.finish(out).map_err(|e| CompressionError::process(codec, e))
    }
}
