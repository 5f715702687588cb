//! compression/stream.rs
//! Chunked streaming compression over any reader.
use std::io::{self, Read};

use crate::compression::registry::{create_compressor, create_decompressor};
use crate::compression::types::{
    check_chunk_size, CompressionError, CompressionOptions, Compressor, Decompressor,
};

/// Read one chunk, retrying on `Interrupted`.
fn read_chunk<R: Read>(r: &mut R, buf: &mut [u8]) -> Result<usize, CompressionError> {
    loop {
        match r.read(buf) {
            Ok(n) => return Ok(n),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(CompressionError::Io(e)),
        }
    }
}

/// Compress data read from R in chunk_size blocks, yielding compressed chunks.
/// - An invalid chunk_size is reported as the first (and only) item.
/// - Calls compressor.finish() once after EOF and yields the trailer.
/// - Chunks for which the codec produced no output yet are skipped.
#[inline]
pub fn compress_stream<R: Read>(
    mut r: R,
    chunk_size: usize,
    mut compressor: Box<dyn Compressor + Send>,
) -> impl Iterator<Item = Result<Vec<u8>, CompressionError>> {
    let mut invalid = check_chunk_size(chunk_size).err();
    let mut buf = if invalid.is_none() { vec![0u8; chunk_size] } else { Vec::new() };
    let mut done = false;

    std::iter::from_fn(move || loop {
        if done {
            return None;
        }
        if let Some(e) = invalid.take() {
            done = true;
            return Some(Err(e));
        }

        let n = match read_chunk(&mut r, &mut buf) {
            Ok(n) => n,
            Err(e) => {
                done = true;
                return Some(Err(e));
            }
        };

        let mut out = Vec::new();
        if n == 0 {
            // EOF: flush and end stream.
            done = true;
            return match compressor.finish(&mut out) {
                Ok(()) if out.is_empty() => None,
                Ok(()) => Some(Ok(out)),
                Err(e) => Some(Err(e)),
            };
        }

        if let Err(e) = compressor.compress_chunk(&buf[..n], &mut out) {
            done = true;
            return Some(Err(e));
        }
        log::trace!("compressed chunk: {} -> {} bytes", n, out.len());
        if !out.is_empty() {
            return Some(Ok(out));
        }
    })
}

/// Decompress data read from R in chunk_size blocks, yielding decompressed chunks.
/// - Chunk boundaries need not line up with anything in the compressed format.
/// - Calls decompressor.finish() once after EOF.
#[inline]
pub fn decompress_stream<R: Read>(
    mut r: R,
    chunk_size: usize,
    mut decompressor: Box<dyn Decompressor + Send>,
) -> impl Iterator<Item = Result<Vec<u8>, CompressionError>> {
    let mut invalid = check_chunk_size(chunk_size).err();
    let mut buf = if invalid.is_none() { vec![0u8; chunk_size] } else { Vec::new() };
    let mut done = false;

    std::iter::from_fn(move || loop {
        if done {
            return None;
        }
        if let Some(e) = invalid.take() {
            done = true;
            return Some(Err(e));
        }

        let n = match read_chunk(&mut r, &mut buf) {
            Ok(n) => n,
            Err(e) => {
                done = true;
                return Some(Err(e));
            }
        };

        let mut out = Vec::new();
        if n == 0 {
            done = true;
            return match decompressor.finish(&mut out) {
                Ok(()) if out.is_empty() => None,
                Ok(()) => Some(Ok(out)),
                Err(e) => Some(Err(e)),
            };
        }

        if let Err(e) = decompressor.decompress_chunk(&buf[..n], &mut out) {
            done = true;
            return Some(Err(e));
        }
        log::trace!("decompressed chunk: {} -> {} bytes", n, out.len());
        if !out.is_empty() {
            return Some(Ok(out));
        }
    })
}

/// Compress everything `r` yields according to `options`.
pub fn compress_reader<R: Read>(r: R, options: &CompressionOptions) -> Result<Vec<u8>, CompressionError> {
    options.validate()?;
    let compressor = create_compressor(options.codec.id(), options.level)?;
    let mut out = Vec::new();
    for chunk in compress_stream(r, options.chunk_size, compressor) {
        out.extend_from_slice(&chunk?);
    }
    Ok(out)
}

/// Decompress everything `r` yields according to `options` (level is ignored).
pub fn decompress_reader<R: Read>(r: R, options: &CompressionOptions) -> Result<Vec<u8>, CompressionError> {
    options.validate()?;
    let decompressor = create_decompressor(options.codec.id())?;
    let mut out = Vec::new();
    for chunk in decompress_stream(r, options.chunk_size, decompressor) {
        out.extend_from_slice(&chunk?);
    }
    Ok(out)
}
