//! codecs/lz4.rs
//! LZ4 block compressor/decompressor via lz4_flex.
//!
//! The block format is not incremental: both sides buffer until `finish`,
//! then emit a single block prefixed with its uncompressed size.
use lz4_flex::block::{compress_prepend_size, decompress_size_prepended};

use crate::compression::constants::LZ4_SIZE_PREFIX_LEN;
use crate::compression::types::{CompressionError, Compressor, Decompressor};

const CODEC: &str = "lz4";

pub struct Lz4Compressor {
    pending: Vec<u8>,
    finished: bool,
}

impl Lz4Compressor {
    pub fn new() -> Result<Box<dyn Compressor + Send>, CompressionError> {
        // lz4_flex block mode has no levels.
        log::debug!("Creating lz4 compressor");
        Ok(Box::new(Self { pending: Vec::new(), finished: false }))
    }
}

impl Compressor for Lz4Compressor {
    fn compress_chunk(&mut self, input: &[u8], _out: &mut Vec<u8>) -> Result<(), CompressionError> {
        if self.finished {
            return Err(CompressionError::StateError("lz4 encoder already finished".into()));
        }
        self.pending.extend_from_slice(input);
        Ok(())
    }

    fn finish(&mut self, out: &mut Vec<u8>) -> Result<(), CompressionError> {
        if self.finished {
            return Err(CompressionError::StateError("lz4 encoder already finished".into()));
        }
        self.finished = true;
        if u32::try_from(self.pending.len()).is_err() {
            return Err(CompressionError::process(CODEC, "input exceeds u32 size prefix"));
        }
        out.extend_from_slice(&compress_prepend_size(&self.pending));
        self.pending = Vec::new();
        Ok(())
    }
}

pub struct Lz4Decompressor {
    pending: Vec<u8>,
    finished: bool,
}

impl Lz4Decompressor {
    pub fn new() -> Result<Box<dyn Decompressor + Send>, CompressionError> {
        log::debug!("Creating lz4 decompressor");
        Ok(Box::new(Self { pending: Vec::new(), finished: false }))
    }
}

impl Decompressor for Lz4Decompressor {
    fn decompress_chunk(&mut self, input: &[u8], _out: &mut Vec<u8>) -> Result<(), CompressionError> {
        if self.finished {
            return Err(CompressionError::StateError("lz4 decoder already finished".into()));
        }
        self.pending.extend_from_slice(input);
        Ok(())
    }

    fn finish(&mut self, out: &mut Vec<u8>) -> Result<(), CompressionError> {
        if self.finished {
            return Err(CompressionError::StateError("lz4 decoder already finished".into()));
        }
        self.finished = true;
        let block = std::mem::take(&mut self.pending);
        out.extend_from_slice(&decode_block(&block)?);
        Ok(())
    }
}

/// Uncompressed size announced by a size-prefixed block.
pub fn lz4_declared_len(block: &[u8]) -> Result<usize, CompressionError> {
    let prefix: [u8; LZ4_SIZE_PREFIX_LEN] = block
        .get(..LZ4_SIZE_PREFIX_LEN)
        .and_then(|p| p.try_into().ok())
        .ok_or_else(|| CompressionError::process(CODEC, "input too short for size prefix"))?;
    Ok(u32::from_le_bytes(prefix) as usize)
}

pub(crate) fn decode_block(block: &[u8]) -> Result<Vec<u8>, CompressionError> {
    let declared = lz4_declared_len(block)?;
    let out = decompress_size_prepended(block).map_err(|e| CompressionError::process(CODEC, e))?;
    if out.len() != declared {
        return Err(CompressionError::process(CODEC, "size prefix mismatch"));
    }
    Ok(out)
}
