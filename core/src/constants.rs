/// Defaults when no chunk size is requested.
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024; // 64 KiB

/// Max chunk size sanity bound (32 MiB).
pub const MAX_CHUNK_SIZE: usize = 32 * 1024 * 1024;

/// Scratch buffer used when draining readers into a digest.
pub const DEFAULT_READ_BUF: usize = 8 * 1024;

/// Stable ids for digest algorithms.
pub mod digest_ids {
    pub const CRC32: u16 = 0x0001;
    pub const BLAKE3: u16 = 0x0002;
    pub const SHA256: u16 = 0x0003;
}
