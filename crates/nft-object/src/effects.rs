//! # Transaction Effects
//!
//! The observable outcome of one committed transaction. Effects are the
//! only place a caller learns the ids of objects a transaction created.

use serde::{Deserialize, Serialize};

use nft_core::{Address, ObjectId, Timestamp, TransactionDigest};

use crate::event::Event;
use crate::object::{Object, Owner};

/// An object written by a transaction, with its resulting owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectChange {
    /// Object id.
    pub id: ObjectId,
    /// Type tag of the object.
    pub type_tag: String,
    /// Owner after the transaction.
    pub owner: Owner,
}

/// Record of a committed transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionEffects {
    /// Transaction digest.
    pub digest: TransactionDigest,
    /// Account that sent the transaction.
    pub sender: Address,
    /// Epoch the transaction executed in.
    pub epoch: u64,
    /// Ledger sequence number assigned at commit.
    pub sequence: u64,
    /// Commit time (UTC).
    pub timestamp: Timestamp,
    /// Objects created by this transaction.
    pub created: Vec<ObjectChange>,
    /// Pre-existing objects written by this transaction.
    pub mutated: Vec<ObjectChange>,
    /// Events in emission order.
    pub events: Vec<Event>,
}

impl TransactionEffects {
    /// Ids of created objects holding a `T`, in creation order.
    pub fn created_of<T: Object>(&self) -> Vec<ObjectId> {
        let tag = T::type_tag();
        self.created
            .iter()
            .filter(|c| c.type_tag == tag)
            .map(|c| c.id)
            .collect()
    }

    /// Events with the given type tag.
    pub fn events_tagged<'a>(&'a self, type_tag: &'a str) -> impl Iterator<Item = &'a Event> {
        self.events.iter().filter(move |e| e.type_tag == type_tag)
    }
}
