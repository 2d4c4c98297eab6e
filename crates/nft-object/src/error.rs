//! # Execution Errors
//!
//! Every failure inside a transaction surfaces as an `ExecutionError`.
//! A transaction that returns an error is discarded whole: no object is
//! created, mutated, or transferred, and no event is recorded.

use thiserror::Error;

use nft_core::{Address, CanonicalizationError, EncodingError, ObjectId};

/// Errors raised while executing a transaction.
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// Caller-supplied bytes were not valid text.
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// No object with this id exists.
    #[error("object {id} not found")]
    ObjectNotFound {
        /// The requested id.
        id: ObjectId,
    },

    /// The sender does not own the object.
    #[error("object {id} is owned by {owner}, not by sender {sender}")]
    NotOwner {
        /// The object.
        id: ObjectId,
        /// Current owner, rendered.
        owner: String,
        /// The transaction sender.
        sender: Address,
    },

    /// The object is frozen and cannot be taken or transferred.
    #[error("object {id} is immutable")]
    Immutable {
        /// The object.
        id: ObjectId,
    },

    /// The stored object has a different type than requested.
    #[error("object {id} has type {found}, expected {expected}")]
    TypeMismatch {
        /// The object.
        id: ObjectId,
        /// Requested type tag.
        expected: String,
        /// Stored type tag.
        found: String,
    },

    /// A publisher was presented for a module other than the one required.
    #[error("publisher {id} was issued as {found}, expected {expected}")]
    AuthorityMismatch {
        /// The publisher object.
        id: ObjectId,
        /// Required publisher type tag.
        expected: String,
        /// Presented publisher type tag.
        found: String,
    },

    /// The module has already consumed its one-time witness.
    #[error("module {module} is already published")]
    AlreadyPublished {
        /// Module name.
        module: String,
    },

    /// A display key is already present.
    #[error("display field {key:?} already exists")]
    DuplicateField {
        /// The duplicated key.
        key: String,
    },

    /// A display key is not present.
    #[error("display field {key:?} not found")]
    FieldNotFound {
        /// The missing key.
        key: String,
    },

    /// A display version counter cannot be incremented further.
    #[error("display {id} version overflow")]
    VersionOverflow {
        /// The display object.
        id: ObjectId,
    },

    /// Id or digest derivation failed.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    /// Object contents could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
