//! reader/mod.rs
//! Adaptive byte-source reader.
//!
//! Turns a value of one of several shapes (a reader, raw bytes, text, a
//! `Display` value, an error) into a single-pass forward byte stream.
//!
//! Resolution order when a value exposes several capabilities:
//! reader > bytes > text > rendered > described.

pub mod stream;
pub mod types;

pub use stream::*;
pub use types::*;
