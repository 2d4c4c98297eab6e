//! # nft-core: Foundational Types for the NFT Workspace
//!
//! Leaf crate of the workspace. Defines the primitives every other crate
//! builds on: account and object identifiers, the canonical byte pipeline
//! used for every digest, UTC timestamps, and the fallible byte-to-text
//! codec used by minting.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for identifiers.** `Address`, `ObjectId`, and
//!    `TransactionDigest` are distinct 32-byte types. An object id cannot be
//!    passed where an account address is expected.
//!
//! 2. **Derived object ids.** Fresh ids are SHA-256 digests over the
//!    canonical bytes of `(transaction digest, creation index)`. Two objects
//!    created anywhere in the ledger never share an id.
//!
//! 3. **`CanonicalBytes` newtype.** All digest computation flows through
//!    `CanonicalBytes::new()`.
//!
//! 4. **Text is decoded, never cast.** Raw bytes become `String` only via
//!    [`text::decode_text`], which returns an `EncodingError` on invalid UTF-8.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `nft-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod digest;
pub mod error;
pub mod identity;
pub mod temporal;
pub mod text;

pub use canonical::CanonicalBytes;
pub use digest::{sha256_digest, ContentDigest};
pub use error::{CanonicalizationError, CoreError, EncodingError};
pub use identity::{Address, ObjectId, TransactionDigest};
pub use temporal::Timestamp;
pub use text::decode_text;
