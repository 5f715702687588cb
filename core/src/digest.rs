//! digest.rs
//! Checksums and cryptographic digests over byte sequences and readers.

use std::io::{self, Read};

use num_enum::TryFromPrimitive;
use sha2::{Digest as _, Sha256};

use crate::constants::{digest_ids, DEFAULT_READ_BUF};
use crate::types::DryError;
use crate::utils::enum_name_or_hex;

/// Supported digest algorithms.
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive)]
pub enum DigestAlg {
    Crc32 = digest_ids::CRC32,
    Blake3 = digest_ids::BLAKE3, // UNKEYED Blake3
    Sha256 = digest_ids::SHA256,
}

impl DigestAlg {
    /// Digest length in bytes.
    pub fn output_len(&self) -> usize {
        match self {
            DigestAlg::Crc32 => 4,
            DigestAlg::Blake3 => 32,
            DigestAlg::Sha256 => 32,
        }
    }

    pub fn from_id(raw: u16) -> Result<Self, DryError> {
        DigestAlg::try_from_primitive(raw).map_err(|_| {
            DryError::Validation(format!(
                "unknown digest algorithm: {}",
                enum_name_or_hex::<DigestAlg>(raw)
            ))
        })
    }
}

/// Internal hashing state.
enum DigestState {
    Crc32(crc32fast::Hasher),
    Blake3(blake3::Hasher),
    Sha256(Sha256),
}

impl DigestState {
    fn new(alg: DigestAlg) -> Self {
        match alg {
            DigestAlg::Crc32 => DigestState::Crc32(crc32fast::Hasher::new()),
            DigestAlg::Blake3 => DigestState::Blake3(blake3::Hasher::new()),
            DigestAlg::Sha256 => DigestState::Sha256(Sha256::new()),
        }
    }

    #[inline]
    fn update(&mut self, data: &[u8]) {
        match self {
            DigestState::Crc32(h) => h.update(data),
            // Blake3 update returns &mut Hasher, we ignore it here
            DigestState::Blake3(h) => {
                h.update(data);
            }
            DigestState::Sha256(h) => h.update(data),
        }
    }

    #[inline]
    fn finalize(self) -> Vec<u8> {
        match self {
            DigestState::Crc32(h) => h.finalize().to_be_bytes().to_vec(),
            DigestState::Blake3(h) => h.finalize().as_bytes().to_vec(),
            DigestState::Sha256(h) => h.finalize().to_vec(),
        }
    }
}

/// Digest of `data`. CRC32 is returned as 4 big-endian bytes.
pub fn digest(alg: DigestAlg, data: &[u8]) -> Vec<u8> {
    let mut state = DigestState::new(alg);
    state.update(data);
    state.finalize()
}

/// Lowercase hex of [`digest`].
pub fn digest_hex(alg: DigestAlg, data: &[u8]) -> String {
    hex::encode(digest(alg, data))
}

/// Digest everything `reader` yields until end-of-data.
pub fn digest_reader<R: Read>(alg: DigestAlg, mut reader: R) -> Result<Vec<u8>, DryError> {
    log::debug!("Computing {:?} digest over reader", alg);

    let mut state = DigestState::new(alg);
    let mut buf = vec![0u8; DEFAULT_READ_BUF];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => state.update(&buf[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(DryError::Io(e)),
        }
    }
    Ok(state.finalize())
}
