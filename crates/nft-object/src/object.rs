//! # Objects and Ownership
//!
//! Every persisted record is an object: a typed value with a unique id and
//! exactly one owner. The store keeps objects as tagged JSON so that the
//! ledger can hold many types in one map and snapshot to disk.
//!
//! ## Ownership
//!
//! ```text
//! AddressOwner(a) ──transfer──▶ AddressOwner(b)
//!        │
//!        └──────freeze──────▶ Immutable (terminal)
//! ```
//!
//! Only the current address owner may take an object out of the store for
//! mutation or hand it to someone else. Immutable objects are readable by
//! everyone and transferable by no one.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use nft_core::{Address, ObjectId};

use crate::error::ExecutionError;
use crate::witness::Module;

// ─── Object Traits ───────────────────────────────────────────────────

/// A value that can live in the object store.
pub trait Object: Serialize + DeserializeOwned {
    /// Fully qualified type tag, e.g. `nft::Asset`.
    fn type_tag() -> String;

    /// The object's unique id.
    fn id(&self) -> &ObjectId;
}

/// An object type declared by a published module.
///
/// Ties the type to the module whose publisher may register metadata for
/// it. `Display::<T>::new` demands a `Publisher<T::Module>`, so presenting
/// another module's publisher does not type-check.
pub trait Declared: Object {
    /// The declaring module.
    type Module: Module;
}

// ─── Owner ───────────────────────────────────────────────────────────

/// Who may use an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "address", rename_all = "snake_case")]
pub enum Owner {
    /// Exclusively owned by one account.
    AddressOwner(Address),
    /// Frozen; readable by all, owned by none.
    Immutable,
}

impl Owner {
    /// The owning address, if any.
    pub fn address(&self) -> Option<&Address> {
        match self {
            Self::AddressOwner(a) => Some(a),
            Self::Immutable => None,
        }
    }

    /// Whether `sender` is the exclusive owner.
    pub fn is_owned_by(&self, sender: &Address) -> bool {
        matches!(self, Self::AddressOwner(a) if a == sender)
    }
}

impl std::fmt::Display for Owner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AddressOwner(a) => write!(f, "address:{a}"),
            Self::Immutable => f.write_str("immutable"),
        }
    }
}

// ─── Stored Object ───────────────────────────────────────────────────

/// An object as held by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredObject {
    /// Unique object id.
    pub id: ObjectId,
    /// Type tag of the contents.
    pub type_tag: String,
    /// Current owner.
    pub owner: Owner,
    /// Incremented on every write after creation.
    pub version: u64,
    /// Serialized object value.
    pub contents: serde_json::Value,
}

impl StoredObject {
    /// Decode the contents as `T`, checking the type tag first.
    pub fn decode<T: Object>(&self) -> Result<T, ExecutionError> {
        let expected = T::type_tag();
        if self.type_tag != expected {
            return Err(ExecutionError::TypeMismatch {
                id: self.id,
                expected,
                found: self.type_tag.clone(),
            });
        }
        Ok(serde_json::from_value(self.contents.clone())?)
    }

    /// Whether this object holds a `T`.
    pub fn is<T: Object>(&self) -> bool {
        self.type_tag == T::type_tag()
    }
}

// ─── Object Store ────────────────────────────────────────────────────

/// All objects, keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectStore {
    objects: BTreeMap<ObjectId, StoredObject>,
}

impl ObjectStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an object by id.
    pub fn get(&self, id: &ObjectId) -> Option<&StoredObject> {
        self.objects.get(id)
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the store holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate over all objects in id order.
    pub fn iter(&self) -> impl Iterator<Item = &StoredObject> {
        self.objects.values()
    }

    /// Objects exclusively owned by `owner`.
    pub fn owned_by(&self, owner: &Address) -> impl Iterator<Item = &StoredObject> {
        let owner = *owner;
        self.objects.values().filter(move |o| o.owner.is_owned_by(&owner))
    }

    /// Objects holding a `T`.
    pub fn of_type<T: Object>(&self) -> impl Iterator<Item = &StoredObject> {
        let tag = T::type_tag();
        self.objects.values().filter(move |o| o.type_tag == tag)
    }

    pub(crate) fn insert(&mut self, object: StoredObject) {
        self.objects.insert(object.id, object);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Ticket {
        id: ObjectId,
        seat: u32,
    }

    impl Object for Ticket {
        fn type_tag() -> String {
            "test::Ticket".to_string()
        }
        fn id(&self) -> &ObjectId {
            &self.id
        }
    }

    fn stored(id: u8, owner: Owner) -> StoredObject {
        let ticket = Ticket { id: ObjectId::from_bytes([id; 32]), seat: 7 };
        StoredObject {
            id: ticket.id,
            type_tag: Ticket::type_tag(),
            owner,
            version: 0,
            contents: serde_json::to_value(&ticket).unwrap(),
        }
    }

    #[test]
    fn test_decode_matching_type() {
        let obj = stored(1, Owner::Immutable);
        let ticket: Ticket = obj.decode().unwrap();
        assert_eq!(ticket.seat, 7);
        assert!(obj.is::<Ticket>());
    }

    #[test]
    fn test_decode_wrong_tag_rejected() {
        let mut obj = stored(1, Owner::Immutable);
        obj.type_tag = "test::Other".to_string();
        match obj.decode::<Ticket>().unwrap_err() {
            ExecutionError::TypeMismatch { expected, found, .. } => {
                assert_eq!(expected, "test::Ticket");
                assert_eq!(found, "test::Other");
            }
            other => panic!("Expected TypeMismatch, got: {other:?}"),
        }
    }

    #[test]
    fn test_owned_by_filters_exclusive_owner() {
        let alice = Address::from_bytes([0xa; 32]);
        let bob = Address::from_bytes([0xb; 32]);
        let mut store = ObjectStore::new();
        store.insert(stored(1, Owner::AddressOwner(alice)));
        store.insert(stored(2, Owner::AddressOwner(bob)));
        store.insert(stored(3, Owner::Immutable));
        assert_eq!(store.len(), 3);
        assert_eq!(store.owned_by(&alice).count(), 1);
        assert_eq!(store.of_type::<Ticket>().count(), 3);
    }

    #[test]
    fn test_owned_by_outlives_owner_borrow() {
        let mut store = ObjectStore::new();
        store.insert(stored(1, Owner::AddressOwner(Address::from_bytes([0xa; 32]))));
        let owned = {
            let owner = Address::from_bytes([0xa; 32]);
            store.owned_by(&owner)
        };
        assert_eq!(owned.count(), 1);
    }

    #[test]
    fn test_owner_display() {
        assert_eq!(Owner::Immutable.to_string(), "immutable");
        let a = Address::from_bytes([0; 32]);
        assert!(Owner::AddressOwner(a).to_string().starts_with("address:0x"));
        assert!(Owner::AddressOwner(a).is_owned_by(&a));
        assert!(!Owner::Immutable.is_owned_by(&a));
    }

    #[test]
    fn test_store_serde_roundtrip() {
        let mut store = ObjectStore::new();
        store.insert(stored(9, Owner::AddressOwner(Address::ZERO)));
        let json = serde_json::to_string(&store).unwrap();
        let back: ObjectStore = serde_json::from_str(&json).unwrap();
        assert_eq!(back, store);
    }
}
