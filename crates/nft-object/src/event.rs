//! # Events
//!
//! Transactions emit typed events; the ledger records them as a type tag
//! plus JSON payload in the transaction's effects, where off-ledger
//! indexers and viewers pick them up.

use serde::{Deserialize, Serialize};

/// A typed event payload.
pub trait EventType: Serialize {
    /// Type tag under which the event is recorded.
    fn type_tag(&self) -> String;
}

/// An emitted event as recorded in effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Event type tag.
    pub type_tag: String,
    /// Serialized payload.
    pub payload: serde_json::Value,
}

impl Event {
    /// Decode the payload, returning `None` if the tag or shape does not match.
    pub fn decode<E: EventType + serde::de::DeserializeOwned>(&self, type_tag: &str) -> Option<E> {
        if self.type_tag != type_tag {
            return None;
        }
        serde_json::from_value(self.payload.clone()).ok()
    }
}
