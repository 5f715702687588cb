//! compression/types.rs
//! Codec identifiers, levels, options, errors and the codec traits.
use std::fmt;
use std::io;

use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::compression::constants::codec_ids;
use crate::constants::{DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE};
use crate::utils::enum_name_or_hex;

/// Compression codec identifiers.
#[repr(u16)]
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CompressionCodec {
    /// Raw deflate (RFC 1951), no header or trailer.
    Deflate = codec_ids::DEFLATE,
    /// Zlib wrapper (RFC 1950).
    Zlib = codec_ids::ZLIB,
    /// Gzip member (RFC 1952).
    Gzip = codec_ids::GZIP,
    Zstd = codec_ids::ZSTD,
    /// LZ4 block prefixed with its uncompressed size (u32, LE).
    Lz4 = codec_ids::LZ4,
}

impl CompressionCodec {
    pub fn id(&self) -> u16 {
        *self as u16
    }

    pub fn from_id(raw: u16) -> Result<Self, CompressionError> {
        CompressionCodec::try_from_primitive(raw)
            .map_err(|_| CompressionError::UnsupportedCodec { codec_id: raw })
    }

    pub fn name(&self) -> &'static str {
        match self {
            CompressionCodec::Deflate => "deflate",
            CompressionCodec::Zlib => "zlib",
            CompressionCodec::Gzip => "gzip",
            CompressionCodec::Zstd => "zstd",
            CompressionCodec::Lz4 => "lz4",
        }
    }
}

impl fmt::Display for CompressionCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Requested compression effort. Each codec maps it onto its own scale.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionLevel {
    Fastest,
    #[default]
    Default,
    Best,
    /// Codec-native level; clamped into the codec's range.
    Precise(i32),
}

impl CompressionLevel {
    /// Map onto a codec scale `[min, max]`.
    pub(crate) fn resolve(self, codec: &str, min: i32, max: i32, default: i32, best: i32) -> i32 {
        match self {
            CompressionLevel::Fastest => min.max(1),
            CompressionLevel::Default => default,
            CompressionLevel::Best => best,
            CompressionLevel::Precise(level) => {
                let clamped = level.clamp(min, max);
                if clamped != level {
                    log::warn!(
                        "{} level {} out of range {}..={}, using {}",
                        codec, level, min, max, clamped
                    );
                }
                clamped
            }
        }
    }
}

/// Codec choice plus chunking for streaming use.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressionOptions {
    pub codec: CompressionCodec,
    pub level: CompressionLevel,
    pub chunk_size: usize,
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self {
            codec: CompressionCodec::Gzip,
            level: CompressionLevel::Default,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl CompressionOptions {
    pub fn new(codec: CompressionCodec) -> Self {
        Self { codec, ..Self::default() }
    }

    pub fn with_level(mut self, level: CompressionLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn validate(&self) -> Result<(), CompressionError> {
        check_chunk_size(self.chunk_size)
    }
}

/// `chunk_size` must be in `1..=MAX_CHUNK_SIZE`.
pub fn check_chunk_size(chunk_size: usize) -> Result<(), CompressionError> {
    if chunk_size == 0 {
        return Err(CompressionError::InvalidChunkSize(chunk_size));
    }
    if chunk_size > MAX_CHUNK_SIZE {
        return Err(CompressionError::ChunkTooLarge { have: chunk_size, max: MAX_CHUNK_SIZE });
    }
    Ok(())
}

fn codec_label(codec_id: &u16) -> String {
    enum_name_or_hex::<CompressionCodec>(*codec_id)
}

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("unsupported compression codec: {}", codec_label(.codec_id))]
    UnsupportedCodec { codec_id: u16 },

    #[error("codec {codec} init failed: {msg}")]
    CodecInitFailed { codec: String, msg: String },

    #[error("codec {codec} process failed: {msg}")]
    CodecProcessFailed { codec: String, msg: String },

    #[error("chunk too large: {have} > {max}")]
    ChunkTooLarge { have: usize, max: usize },

    #[error("invalid chunk size: {0}")]
    InvalidChunkSize(usize),

    #[error("decompressed output exceeds limit of {max} bytes")]
    OutputTooLarge { max: usize },

    #[error("compression state error: {0}")]
    StateError(String),

    #[error("read error: {0}")]
    Io(#[from] io::Error),
}

impl CompressionError {
    pub(crate) fn init(codec: &str, e: impl fmt::Display) -> Self {
        CompressionError::CodecInitFailed { codec: codec.into(), msg: e.to_string() }
    }

    pub(crate) fn process(codec: &str, e: impl fmt::Display) -> Self {
        CompressionError::CodecProcessFailed { codec: codec.into(), msg: e.to_string() }
    }
}

// Require Send so trait objects can cross thread boundaries.
pub trait Compressor: Send {
    /// Compress one chunk of input, appending whatever output is ready to `out`.
    /// Consecutive chunks form a single compressed stream.
    fn compress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError>;
    /// Flush pending state and the format trailer. Call once.
    fn finish(&mut self, out: &mut Vec<u8>) -> Result<(), CompressionError>;
}

pub trait Decompressor: Send {
    /// Feed one chunk of compressed input. Chunk boundaries are arbitrary.
    fn decompress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError>;
    /// Flush whatever is still buffered. Call once, after the last chunk.
    fn finish(&mut self, _out: &mut Vec<u8>) -> Result<(), CompressionError> {
        Ok(())
    }
}
