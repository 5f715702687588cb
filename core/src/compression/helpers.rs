//! compression/helpers.rs
//! One-shot compression of whole buffers.
use std::io::Read;

use crate::compression::codecs::lz4::decode_block;
use crate::compression::codecs::{flate_reader, lz4_declared_len, zstd_reader, FlateFormat};
use crate::compression::registry::{create_compressor, create_decompressor};
use crate::compression::types::{CompressionCodec, CompressionError, CompressionLevel};

/// Compress `data` as one complete stream of `codec`.
pub fn compress(
    codec: CompressionCodec,
    data: &[u8],
    level: CompressionLevel,
) -> Result<Vec<u8>, CompressionError> {
    let mut compressor = create_compressor(codec.id(), level)?;
    let mut out = Vec::new();
    compressor.compress_chunk(data, &mut out)?;
    compressor.finish(&mut out)?;
    Ok(out)
}

/// Decompress one complete stream of `codec`.
pub fn decompress(codec: CompressionCodec, data: &[u8]) -> Result<Vec<u8>, CompressionError> {
    let mut decompressor = create_decompressor(codec.id())?;
    let mut out = Vec::new();
    decompressor.decompress_chunk(data, &mut out)?;
    decompressor.finish(&mut out)?;
    Ok(out)
}

/// Like [`decompress`], but fails with `OutputTooLarge` instead of producing
/// more than `max_len` bytes.
pub fn decompress_limited(
    codec: CompressionCodec,
    data: &[u8],
    max_len: usize,
) -> Result<Vec<u8>, CompressionError> {
    let reader = match codec {
        CompressionCodec::Lz4 => {
            if lz4_declared_len(data)? > max_len {
                return Err(CompressionError::OutputTooLarge { max: max_len });
            }
            return decode_block(data);
        }
        CompressionCodec::Deflate => flate_reader(FlateFormat::Raw, data),
        CompressionCodec::Zlib => flate_reader(FlateFormat::Zlib, data),
        CompressionCodec::Gzip => flate_reader(FlateFormat::Gzip, data),
        CompressionCodec::Zstd => zstd_reader(data)?,
    };

    let limit = (max_len as u64).saturating_add(1);
    let mut out = Vec::new();
    reader
        .take(limit)
        .read_to_end(&mut out)
        .map_err(|e| CompressionError::process(codec.name(), e))?;
    if out.len() > max_len {
        return Err(CompressionError::OutputTooLarge { max: max_len });
    }
    Ok(out)
}

pub fn deflate(data: &[u8]) -> Result<Vec<u8>, CompressionError> {
    compress(CompressionCodec::Deflate, data, CompressionLevel::Default)
}

pub fn inflate(data: &[u8]) -> Result<Vec<u8>, CompressionError> {
    decompress(CompressionCodec::Deflate, data)
}

pub fn zlib_compress(data: &[u8]) -> Result<Vec<u8>, CompressionError> {
    compress(CompressionCodec::Zlib, data, CompressionLevel::Default)
}

pub fn zlib_decompress(data: &[u8]) -> Result<Vec<u8>, CompressionError> {
    decompress(CompressionCodec::Zlib, data)
}

pub fn gzip(data: &[u8]) -> Result<Vec<u8>, CompressionError> {
    compress(CompressionCodec::Gzip, data, CompressionLevel::Default)
}

pub fn ungzip(data: &[u8]) -> Result<Vec<u8>, CompressionError> {
    decompress(CompressionCodec::Gzip, data)
}

pub fn zstd_compress(data: &[u8]) -> Result<Vec<u8>, CompressionError> {
    compress(CompressionCodec::Zstd, data, CompressionLevel::Default)
}

pub fn zstd_decompress(data: &[u8]) -> Result<Vec<u8>, CompressionError> {
    decompress(CompressionCodec::Zstd, data)
}

pub fn lz4_compress(data: &[u8]) -> Result<Vec<u8>, CompressionError> {
    compress(CompressionCodec::Lz4, data, CompressionLevel::Default)
}

pub fn lz4_decompress(data: &[u8]) -> Result<Vec<u8>, CompressionError> {
    decompress(CompressionCodec::Lz4, data)
}
