//! # Error Types
//!
//! Errors raised by the foundational layer. All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations.
//!
//! - Encoding errors name the offending field and the byte offset where
//!   decoding stopped.
//! - Validation errors carry the rejected input verbatim.

use thiserror::Error;

/// Top-level error type for `nft-core`.
#[derive(Error, Debug)]
pub enum CoreError {
    /// An identifier failed to parse.
    #[error("validation error: {0}")]
    Validation(String),
}

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Float values are not permitted in canonical representations.
    #[error("float values are not permitted in canonical representations: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// A byte sequence that does not decode as UTF-8.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "invalid utf-8 in {}: valid up to byte {} of {}",
    .field.as_deref().unwrap_or("input"),
    .valid_up_to,
    .len
)]
pub struct EncodingError {
    /// Name of the field being decoded, if known.
    pub field: Option<String>,
    /// Length of the longest valid UTF-8 prefix.
    pub valid_up_to: usize,
    /// Total length of the input.
    pub len: usize,
}

impl EncodingError {
    /// Attach the name of the field that failed to decode.
    pub fn for_field(mut self, field: &str) -> Self {
        self.field = Some(field.to_string());
        self
    }
}
