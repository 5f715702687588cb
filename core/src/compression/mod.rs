//! compression/mod.rs
//! Compression and decompression of byte buffers with standard formats.
//!
//! - Codecs emit plain, interoperable streams (raw deflate, zlib, gzip,
//!   zstd frames, size-prefixed LZ4 blocks).
//! - Registry resolves codec ids to implementations.
//! - `stream` drives a codec over any `io::Read` in fixed-size chunks.

pub mod codecs;
pub mod constants;
pub mod helpers;
pub mod registry;
pub mod stream;
pub mod types;

pub use constants::*;
pub use helpers::*;
pub use registry::*;
pub use stream::*;
pub use types::*;
