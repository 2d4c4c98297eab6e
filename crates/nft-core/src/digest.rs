//! # Content Digest
//!
//! SHA-256 digests over canonical bytes, plus the lowercase-hex helpers
//! shared by every 32-byte identifier in the workspace.
//!
//! ## Invariant
//!
//! `sha256_digest()` accepts only `&CanonicalBytes`, so every digest in the
//! ledger is computed over the JCS pipeline output.

use sha2::{Digest, Sha256};

use crate::canonical::CanonicalBytes;
use crate::error::CoreError;

/// A raw 32-byte SHA-256 digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentDigest(pub [u8; 32]);

impl ContentDigest {
    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        encode_hex(&self.0)
    }

    /// Access the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sha256:{}", self.to_hex())
    }
}

/// Compute a SHA-256 digest from canonical bytes.
pub fn sha256_digest(data: &CanonicalBytes) -> ContentDigest {
    let hash = Sha256::digest(data.as_bytes());
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    ContentDigest(bytes)
}

/// Lowercase hex encoding.
pub(crate) fn encode_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Parse exactly 64 hex characters, with or without a `0x` prefix.
pub(crate) fn decode_hex32(s: &str) -> Result<[u8; 32], CoreError> {
    let hex = s.strip_prefix("0x").unwrap_or(s);
    if hex.len() != 64 {
        return Err(CoreError::Validation(format!(
            "expected 64 hex characters, got {}: {s:?}",
            hex.len()
        )));
    }
    let mut out = [0u8; 32];
    for (i, chunk) in hex.as_bytes().chunks(2).enumerate() {
        let pair = std::str::from_utf8(chunk)
            .map_err(|_| CoreError::Validation(format!("non-ascii hex input: {s:?}")))?;
        out[i] = u8::from_str_radix(pair, 16)
            .map_err(|_| CoreError::Validation(format!("invalid hex digit in {s:?}")))?;
    }
    Ok(out)
}
