//! compression/codecs/mod.rs
//! Codec implementations behind the `Compressor`/`Decompressor` traits.

pub mod flate;
pub mod lz4;
pub mod zstd;

pub use self::flate::*;
pub use self::lz4::*;
pub use self::zstd::*;
