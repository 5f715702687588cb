/// Stable codec IDs (u16).
pub mod codec_ids {
    pub const DEFLATE: u16 = 0x0001;
    pub const ZLIB: u16 = 0x0002;
    pub const GZIP: u16 = 0x0003;
    pub const ZSTD: u16 = 0x0004;
    pub const LZ4: u16 = 0x0005;
}

/// Default compression levels (balanced).
pub const DEFAULT_LEVEL_FLATE: i32 = 6;
pub const DEFAULT_LEVEL_ZSTD: i32 = 3;

/// Level bounds per codec family.
pub const MIN_LEVEL_FLATE: i32 = 0;
pub const MAX_LEVEL_FLATE: i32 = 9;
pub const MIN_LEVEL_ZSTD: i32 = 1;
pub const MAX_LEVEL_ZSTD: i32 = 22;

/// Level used for `CompressionLevel::Best` with zstd (20+ needs far more memory).
pub const BEST_LEVEL_ZSTD: i32 = 19;

/// Length of the little-endian size prefix in front of an LZ4 block.
pub const LZ4_SIZE_PREFIX_LEN: usize = 4;
