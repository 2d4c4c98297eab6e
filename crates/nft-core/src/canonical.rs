//! # Canonical Serialization
//!
//! `CanonicalBytes` is the sole construction path for bytes that feed a
//! digest: transaction digests and derived object ids both hash canonical
//! bytes, never raw `serde_json::to_vec()` output.
//!
//! The inner bytes are private and produced only by `serde_jcs` (RFC 8785:
//! sorted keys, no whitespace) after a pass that rejects floating-point
//! numbers. Equal values therefore always produce equal digests.

use serde::Serialize;
use serde_json::Value;

use crate::error::CanonicalizationError;

/// JCS-canonical JSON bytes of a float-free value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Canonicalize `value`.
    ///
    /// # Errors
    ///
    /// `FloatRejected` if any number in `value` is not an integer.
    pub fn new(value: &impl Serialize) -> Result<Self, CanonicalizationError> {
        let tree = serde_json::to_value(value)?;
        ensure_integral(&tree)?;
        Ok(Self(serde_jcs::to_string(&tree)?.into_bytes()))
    }

    /// The canonical bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Byte length.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no bytes. Never true for a serialized value.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Rejects any non-integer number anywhere in the tree.
fn ensure_integral(tree: &Value) -> Result<(), CanonicalizationError> {
    match tree {
        Value::Number(n) if n.is_f64() => Err(CanonicalizationError::FloatRejected(
            n.as_f64().unwrap_or(f64::NAN),
        )),
        Value::Array(items) => items.iter().try_for_each(ensure_integral),
        Value::Object(fields) => fields.values().try_for_each(ensure_integral),
        _ => Ok(()),
    }
}
