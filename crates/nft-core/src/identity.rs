//! # Identity Newtypes
//!
//! 32-byte identifiers for accounts, objects, and transactions. Each is a
//! distinct type, so an `ObjectId` can never be handed to an API expecting
//! an `Address`.
//!
//! All three render as `0x` followed by 64 lowercase hex characters and
//! serialize as that string, which keeps JSON snapshots readable and lets
//! identifiers act as map keys.
//!
//! ## Id Derivation
//!
//! ```text
//! TransactionDigest = sha256(jcs({"epoch", "sender", "sequence"}))
//! ObjectId          = sha256(jcs({"index", "tx_digest"}))
//! ```
//!
//! The ledger sequence number never repeats, so neither do transaction
//! digests; the per-transaction creation index never repeats within a
//! transaction, so neither do object ids.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::canonical::CanonicalBytes;
use crate::digest::{decode_hex32, encode_hex, sha256_digest};
use crate::error::{CanonicalizationError, CoreError};

macro_rules! hex_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name([u8; 32]);

        impl $name {
            /// Wrap raw bytes.
            pub const fn from_bytes(bytes: [u8; 32]) -> Self {
                Self(bytes)
            }

            /// Access the raw bytes.
            pub fn as_bytes(&self) -> &[u8; 32] {
                &self.0
            }

            /// Render as `0x`-prefixed lowercase hex.
            pub fn to_hex(&self) -> String {
                format!("0x{}", encode_hex(&self.0))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.to_hex())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                decode_hex32(s).map(Self)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_hex())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

hex_identifier!(
    /// An account address. Objects are owned by addresses.
    Address
);

hex_identifier!(
    /// Globally unique identifier of a stored object.
    ObjectId
);

hex_identifier!(
    /// Digest identifying one executed transaction.
    TransactionDigest
);

impl Address {
    /// The all-zero address.
    pub const ZERO: Address = Address([0u8; 32]);

    /// Generate a fresh random address.
    pub fn generate() -> Self {
        Self(rand::random())
    }
}

impl TransactionDigest {
    /// Compute the digest of the `sequence`-th transaction sent by `sender`
    /// in `epoch`.
    pub fn compute(
        sender: &Address,
        epoch: u64,
        sequence: u64,
    ) -> Result<Self, CanonicalizationError> {
        let cb = CanonicalBytes::new(&serde_json::json!({
            "sender": sender,
            "epoch": epoch,
            "sequence": sequence,
        }))?;
        Ok(Self(sha256_digest(&cb).0))
    }
}

impl ObjectId {
    /// Derive the id of the `index`-th object created by transaction `tx`.
    pub fn derive(tx: &TransactionDigest, index: u64) -> Result<Self, CanonicalizationError> {
        let cb = CanonicalBytes::new(&serde_json::json!({
            "tx_digest": tx,
            "index": index,
        }))?;
        Ok(Self(sha256_digest(&cb).0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_display_is_prefixed_hex() {
        let addr = Address::from_bytes([0x01; 32]);
        assert_eq!(addr.to_string(), format!("0x{}", "01".repeat(32)));
    }

    #[test]
    fn test_parse_roundtrip() {
        let id = ObjectId::from_bytes([0x7f; 32]);
        let parsed: ObjectId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_parse_rejects_short_input() {
        assert!(matches!(
            "0x01".parse::<Address>(),
            Err(CoreError::Validation(msg)) if msg.contains("0x01")
        ));
    }

    #[test]
    fn test_serde_as_string() {
        let addr = Address::from_bytes([0xaa; 32]);
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, format!("\"0x{}\"", "aa".repeat(32)));
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
    }

    #[test]
    fn test_generated_addresses_differ() {
        assert_ne!(Address::generate(), Address::generate());
    }

    #[test]
    fn test_tx_digest_depends_on_sequence() {
        let sender = Address::from_bytes([1; 32]);
        let a = TransactionDigest::compute(&sender, 0, 1).unwrap();
        let b = TransactionDigest::compute(&sender, 0, 2).unwrap();
        assert_ne!(a, b);
        assert_eq!(a, TransactionDigest::compute(&sender, 0, 1).unwrap());
    }

    #[test]
    fn test_derived_ids_unique_within_transaction() {
        let tx = TransactionDigest::compute(&Address::ZERO, 0, 0).unwrap();
        let ids: HashSet<ObjectId> = (0..100).map(|i| ObjectId::derive(&tx, i).unwrap()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_derived_ids_differ_across_transactions() {
        let tx1 = TransactionDigest::compute(&Address::ZERO, 0, 0).unwrap();
        let tx2 = TransactionDigest::compute(&Address::ZERO, 0, 1).unwrap();
        assert_ne!(ObjectId::derive(&tx1, 0).unwrap(), ObjectId::derive(&tx2, 0).unwrap());
    }
}
