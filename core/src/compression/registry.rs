//! compression/registry.rs
//! Codec registry and factory functions.

use crate::compression::codecs::{
    FlateCompressor, FlateDecompressor, FlateFormat, Lz4Compressor, Lz4Decompressor,
    ZstdCompressor, ZstdDecompressor,
};
use crate::compression::constants::{codec_ids, DEFAULT_LEVEL_FLATE, DEFAULT_LEVEL_ZSTD};
use crate::compression::types::{
    CompressionCodec, CompressionError, CompressionLevel, Compressor, Decompressor,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CodecInfo {
    pub codec: CompressionCodec,
    pub name: &'static str,
    pub default_level: i32,
    /// Output is produced as input arrives (as opposed to buffered until finish).
    pub streaming: bool,
}

pub fn resolve(codec_id: u16) -> Result<CodecInfo, CompressionError> {
    match codec_id {
        x if x == codec_ids::DEFLATE => Ok(CodecInfo {
            codec: CompressionCodec::Deflate,
            name: "deflate",
            default_level: DEFAULT_LEVEL_FLATE,
            streaming: true,
        }),
        x if x == codec_ids::ZLIB => Ok(CodecInfo {
            codec: CompressionCodec::Zlib,
            name: "zlib",
            default_level: DEFAULT_LEVEL_FLATE,
            streaming: true,
        }),
        x if x == codec_ids::GZIP => Ok(CodecInfo {
            codec: CompressionCodec::Gzip,
            name: "gzip",
            default_level: DEFAULT_LEVEL_FLATE,
            streaming: true,
        }),
        x if x == codec_ids::ZSTD => Ok(CodecInfo {
            codec: CompressionCodec::Zstd,
            name: "zstd",
            default_level: DEFAULT_LEVEL_ZSTD,
            streaming: true,
        }),
        x if x == codec_ids::LZ4 => Ok(CodecInfo {
            codec: CompressionCodec::Lz4,
            name: "lz4",
            default_level: 0,
            streaming: false,
        }),
        other => Err(CompressionError::UnsupportedCodec { codec_id: other }),
    }
}

pub fn create_compressor(
    codec_id: u16,
    level: CompressionLevel,
) -> Result<Box<dyn Compressor + Send>, CompressionError> {
    match CompressionCodec::from_id(codec_id)? {
        CompressionCodec::Deflate => FlateCompressor::new(FlateFormat::Raw, level),
        CompressionCodec::Zlib => FlateCompressor::new(FlateFormat::Zlib, level),
        CompressionCodec::Gzip => FlateCompressor::new(FlateFormat::Gzip, level),
        CompressionCodec::Zstd => ZstdCompressor::new(level),
        CompressionCodec::Lz4 => Lz4Compressor::new(),
    }
}

pub fn create_decompressor(codec_id: u16) -> Result<Box<dyn Decompressor + Send>, CompressionError> {
    match CompressionCodec::from_id(codec_id)? {
        CompressionCodec::Deflate => FlateDecompressor::new(FlateFormat::Raw),
        CompressionCodec::Zlib => FlateDecompressor::new(FlateFormat::Zlib),
        CompressionCodec::Gzip => FlateDecompressor::new(FlateFormat::Gzip),
        CompressionCodec::Zstd => ZstdDecompressor::new(),
        CompressionCodec::Lz4 => Lz4Decompressor::new(),
    }
}
