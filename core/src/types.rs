use std::io;

use thiserror::Error;

use crate::compression::CompressionError;

/// Unified error covering I/O, compression, text encodings and generic validation.
/// - `From<T>` impls enable `?` across modules.
#[derive(Debug, Error)]
pub enum DryError {
    /// I/O error from a caller-supplied reader.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Compression/decompression error.
    #[error("compression error: {0}")]
    Compression(#[from] CompressionError),

    /// Malformed hex or base64 text.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Generic validation with a descriptive message.
    #[error("validation error: {0}")]
    Validation(String),
}

impl From<hex::FromHexError> for DryError {
    fn from(e: hex::FromHexError) -> Self {
        DryError::Encoding(format!("hex: {}", e))
    }
}

impl From<base64::DecodeError> for DryError {
    fn from(e: base64::DecodeError) -> Self {
        DryError::Encoding(format!("base64: {}", e))
    }
}
