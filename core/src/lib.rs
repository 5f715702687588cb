//! dry-bytes
//!
//! Helpers over byte sequences: adaptive byte readers, per-byte transforms,
//! standard compression codecs, text encodings and digests.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

// Helper modules
pub mod compression;
pub mod digest;
pub mod encoding;
pub mod reader;
pub mod transform;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::{
        compress, decompress, deflate, gzip, inflate, ungzip, CompressionCodec, CompressionError,
        CompressionLevel, CompressionOptions, Compressor, Decompressor,
    };
    pub use crate::digest::{digest, digest_hex, DigestAlg};
    pub use crate::encoding::{base64_decode, base64_encode, hex_decode, hex_encode};
    pub use crate::reader::{bytes_reader, ByteSource, ByteStream, ReadStatus, SourceProbe};
    pub use crate::transform::{filter, map, to_upper};
    pub use crate::types::DryError;
}
