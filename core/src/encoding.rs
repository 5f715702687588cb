//! encoding.rs
//! Hex and base64 text encodings of byte sequences.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine as _;

use crate::types::DryError;

/// Lowercase hex.
pub fn hex_encode(data: &[u8]) -> String {
    hex::encode(data)
}

/// Accepts upper- or lowercase digits; length must be even.
pub fn hex_decode(text: &str) -> Result<Vec<u8>, DryError> {
    Ok(hex::decode(text.trim())?)
}

/// Standard alphabet, padded.
pub fn base64_encode(data: &[u8]) -> String {
    STANDARD.encode(data)
}

pub fn base64_decode(text: &str) -> Result<Vec<u8>, DryError> {
    Ok(STANDARD.decode(text.trim())?)
}

/// URL-safe alphabet, no padding.
pub fn base64_url_encode(data: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(data)
}

pub fn base64_url_decode(text: &str) -> Result<Vec<u8>, DryError> {
    Ok(URL_SAFE_NO_PAD.decode(text.trim())?)
}
