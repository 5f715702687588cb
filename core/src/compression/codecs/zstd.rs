//! codecs/zstd.rs
//!
//! Zstd streaming compressor/decompressor.
//!
//! - The encoder wraps the zstd write-side encoder around an internal Vec that
//!   is drained after every chunk.
//! - The decoder drives the raw zstd context and refuses to finish mid-frame.
//! - Errors are mapped into `CompressionError` variants with codec context.
use std::io::{Read, Write};

use zstd::stream::raw::{Decoder as RawDecoder, InBuffer, Operation, OutBuffer};
use zstd::stream::write::Encoder;

use crate::compression::constants::{BEST_LEVEL_ZSTD, DEFAULT_LEVEL_ZSTD, MAX_LEVEL_ZSTD, MIN_LEVEL_ZSTD};
use crate::compression::types::{CompressionError, CompressionLevel, Compressor, Decompressor};

const CODEC: &str = "zstd";

pub fn zstd_level(level: CompressionLevel) -> i32 {
    level.resolve(CODEC, MIN_LEVEL_ZSTD, MAX_LEVEL_ZSTD, DEFAULT_LEVEL_ZSTD, BEST_LEVEL_ZSTD)
}

/// Read-side decoder over a complete compressed buffer.
pub fn zstd_reader<'a>(data: &'a [u8]) -> Result<Box<dyn Read + 'a>, CompressionError> {
    let decoder = zstd::stream::read::Decoder::new(data).map_err(|e| CompressionError::init(CODEC, e))?;
    Ok(Box::new(decoder))
}

pub struct ZstdCompressor {
    encoder: Option<Encoder<'static, Vec<u8>>>, // wrapped in Option to allow finish()
}

impl ZstdCompressor {
    /// # Errors
    /// - `CompressionError::CodecInitFailed` if encoder initialization fails.
    pub fn new(level: CompressionLevel) -> Result<Box<dyn Compressor + Send>, CompressionError> {
        let lvl = zstd_level(level);
        log::debug!("Creating zstd compressor at level {}", lvl);
        let encoder = Encoder::new(Vec::new(), lvl).map_err(|e| CompressionError::init(CODEC, e))?;
        Ok(Box::new(Self { encoder: Some(encoder) }))
    }
}

impl Compressor for ZstdCompressor {
    fn compress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let enc = self
            .encoder
            .as_mut()
            .ok_or_else(|| CompressionError::StateError("zstd encoder already finished".into()))?;
        enc.write_all(input).map_err(|e| CompressionError::process(CODEC, e))?;
        out.append(enc.get_mut());
        Ok(())
    }

    fn finish(&mut self, out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let enc = self
            .encoder
            .take()
            .ok_or_else(|| CompressionError::StateError("zstd encoder already finished".into()))?;
        let tail = enc.finish().map_err(|e| CompressionError::process(CODEC, e))?;
        out.extend_from_slice(&tail);
        Ok(())
    }
}

/// Output scratch size per decode step.
const DECODE_STEP: usize = 32 * 1024;

pub struct ZstdDecompressor {
    decoder: Option<RawDecoder<'static>>,
    scratch: Vec<u8>,
    // Input still expected by the current frame; 0 once a frame is complete.
    hint: usize,
}

impl ZstdDecompressor {
    pub fn new() -> Result<Box<dyn Decompressor + Send>, CompressionError> {
        log::debug!("Creating zstd decompressor");
        let decoder = RawDecoder::new().map_err(|e| CompressionError::init(CODEC, e))?;
        Ok(Box::new(Self { decoder: Some(decoder), scratch: vec![0u8; DECODE_STEP], hint: 1 }))
    }
}

impl Decompressor for ZstdDecompressor {
    fn decompress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let dec = self
            .decoder
            .as_mut()
            .ok_or_else(|| CompressionError::StateError("zstd decoder already finished".into()))?;
        let mut src = InBuffer::around(input);
        loop {
            let before = src.pos();
            let (hint, written) = {
                let mut dst = OutBuffer::around(&mut self.scratch[..]);
                let hint = dec.run(&mut src, &mut dst).map_err(|e| CompressionError::process(CODEC, e))?;
                (hint, dst.pos())
            };
            out.extend_from_slice(&self.scratch[..written]);
            // A call with nothing to do reports the next frame's header size.
            if written > 0 || src.pos() > before {
                self.hint = hint;
            }
            if src.pos() == input.len() && written < self.scratch.len() {
                return Ok(());
            }
        }
    }

    fn finish(&mut self, _out: &mut Vec<u8>) -> Result<(), CompressionError> {
        self.decoder
            .take()
            .ok_or_else(|| CompressionError::StateError("zstd decoder already finished".into()))?;
        if self.hint != 0 {
            return Err(CompressionError::process(CODEC, "incomplete frame"));
        }
        Ok(())
    }
}
