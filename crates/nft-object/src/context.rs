//! # Transaction Context
//!
//! `TxContext` is handed to every piece of module logic. It answers "who is
//! calling" and "give me a fresh id", and it is the only way to write to
//! the object store.
//!
//! ## Atomicity
//!
//! The context works on a staged copy of the ledger's store. The ledger
//! swaps the staged copy in only when the transaction returns `Ok`; on
//! error the context is dropped and nothing it wrote survives.
//!
//! ## Ownership Discipline
//!
//! Objects leave the store by value (`read`, `take`) and return through
//! `transfer`, `freeze`, or `update`. No reference into the store escapes
//! the context, so two holders can never alias the same mutable record.

use std::collections::BTreeSet;

use nft_core::{Address, ObjectId, Timestamp, TransactionDigest};

use crate::effects::{ObjectChange, TransactionEffects};
use crate::error::ExecutionError;
use crate::event::{Event, EventType};
use crate::object::{Object, ObjectStore, Owner, StoredObject};

/// Execution context of a single transaction.
#[derive(Debug)]
pub struct TxContext {
    sender: Address,
    digest: TransactionDigest,
    epoch: u64,
    ids_created: u64,
    store: ObjectStore,
    created: BTreeSet<ObjectId>,
    written: Vec<ObjectId>,
    events: Vec<Event>,
}

impl TxContext {
    pub(crate) fn new(
        sender: Address,
        digest: TransactionDigest,
        epoch: u64,
        store: ObjectStore,
    ) -> Self {
        Self {
            sender,
            digest,
            epoch,
            ids_created: 0,
            store,
            created: BTreeSet::new(),
            written: Vec::new(),
            events: Vec::new(),
        }
    }

    /// The account that sent this transaction.
    pub fn sender(&self) -> Address {
        self.sender
    }

    /// Digest of this transaction.
    pub fn digest(&self) -> &TransactionDigest {
        &self.digest
    }

    /// Current epoch.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Number of ids allocated so far in this transaction.
    pub fn ids_created(&self) -> u64 {
        self.ids_created
    }

    /// Allocate a fresh, globally unique object id.
    pub fn fresh_id(&mut self) -> Result<ObjectId, ExecutionError> {
        let id = ObjectId::derive(&self.digest, self.ids_created)?;
        self.ids_created += 1;
        self.created.insert(id);
        Ok(id)
    }

    // ── Writes ───────────────────────────────────────────────────────

    /// Make `recipient` the exclusive owner of `obj`.
    pub fn transfer<T: Object>(&mut self, obj: T, recipient: Address) -> Result<(), ExecutionError> {
        self.write(&obj, Owner::AddressOwner(recipient))
    }

    /// Freeze `obj`: readable by everyone, owned by no one.
    pub fn freeze<T: Object>(&mut self, obj: T) -> Result<(), ExecutionError> {
        self.write(&obj, Owner::Immutable)
    }

    /// Write back an object previously taken by the sender, keeping its owner.
    pub fn update<T: Object>(&mut self, obj: T) -> Result<(), ExecutionError> {
        let owner = match self.store.get(obj.id()) {
            Some(existing) => {
                self.require_owner(existing)?;
                existing.owner
            }
            None => return Err(ExecutionError::ObjectNotFound { id: *obj.id() }),
        };
        self.write(&obj, owner)
    }

    /// Transfer a stored object by id without knowing its type.
    pub fn transfer_object(&mut self, id: &ObjectId, recipient: Address) -> Result<(), ExecutionError> {
        let mut object = self.stored(id)?.clone();
        self.require_owner(&object)?;
        object.owner = Owner::AddressOwner(recipient);
        object.version += 1;
        self.store.insert(object);
        self.written.push(*id);
        Ok(())
    }

    /// Record an event.
    pub fn emit<E: EventType>(&mut self, event: E) -> Result<(), ExecutionError> {
        self.events.push(Event {
            type_tag: event.type_tag(),
            payload: serde_json::to_value(&event)?,
        });
        Ok(())
    }

    // ── Reads ────────────────────────────────────────────────────────

    /// Read an object owned by the sender or frozen.
    pub fn read<T: Object>(&self, id: &ObjectId) -> Result<T, ExecutionError> {
        let object = self.stored(id)?;
        if object.owner != Owner::Immutable {
            self.require_owner(object)?;
        }
        object.decode()
    }

    /// Take an object owned by the sender for mutation or transfer.
    pub fn take<T: Object>(&self, id: &ObjectId) -> Result<T, ExecutionError> {
        let object = self.stored(id)?;
        self.require_owner(object)?;
        object.decode()
    }

    // ── Internals ────────────────────────────────────────────────────

    fn stored(&self, id: &ObjectId) -> Result<&StoredObject, ExecutionError> {
        self.store
            .get(id)
            .ok_or(ExecutionError::ObjectNotFound { id: *id })
    }

    fn require_owner(&self, object: &StoredObject) -> Result<(), ExecutionError> {
        match object.owner {
            Owner::Immutable => Err(ExecutionError::Immutable { id: object.id }),
            Owner::AddressOwner(owner) if owner == self.sender => Ok(()),
            Owner::AddressOwner(owner) => Err(ExecutionError::NotOwner {
                id: object.id,
                owner: owner.to_string(),
                sender: self.sender,
            }),
        }
    }

    fn write<T: Object>(&mut self, obj: &T, owner: Owner) -> Result<(), ExecutionError> {
        let id = *obj.id();
        let version = match self.store.get(&id) {
            Some(existing) => {
                self.require_owner(existing)?;
                existing.version + 1
            }
            None if self.created.contains(&id) => 0,
            // Ids not allocated by this transaction cannot be conjured.
            None => return Err(ExecutionError::ObjectNotFound { id }),
        };
        self.store.insert(StoredObject {
            id,
            type_tag: T::type_tag(),
            owner,
            version,
            contents: serde_json::to_value(obj)?,
        });
        self.written.push(id);
        Ok(())
    }

    pub(crate) fn finish(self, sequence: u64, timestamp: Timestamp) -> (ObjectStore, TransactionEffects) {
        let mut created = Vec::new();
        let mut mutated = Vec::new();
        let mut seen = BTreeSet::new();
        for id in &self.written {
            if !seen.insert(*id) {
                continue;
            }
            let Some(object) = self.store.get(id) else {
                continue;
            };
            let change = ObjectChange {
                id: *id,
                type_tag: object.type_tag.clone(),
                owner: object.owner,
            };
            if self.created.contains(id) {
                created.push(change);
            } else {
                mutated.push(change);
            }
        }
        let effects = TransactionEffects {
            digest: self.digest,
            sender: self.sender,
            epoch: self.epoch,
            sequence,
            timestamp,
            created,
            mutated,
            events: self.events,
        };
        (self.store, effects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Note {
        id: ObjectId,
        text: String,
    }

    impl Object for Note {
        fn type_tag() -> String {
            "test::Note".to_string()
        }
        fn id(&self) -> &ObjectId {
            &self.id
        }
    }

    fn ctx(sender: u8, sequence: u64) -> TxContext {
        let sender = Address::from_bytes([sender; 32]);
        let digest = TransactionDigest::compute(&sender, 0, sequence).unwrap();
        TxContext::new(sender, digest, 0, ObjectStore::new())
    }

    #[test]
    fn test_created_and_mutated_split() {
        let mut ctx = ctx(1, 0);
        let note = Note {
            id: ctx.fresh_id().unwrap(),
            text: "a".into(),
        };
        let id = note.id;
        ctx.transfer(note, ctx.sender()).unwrap();
        let mut note: Note = ctx.take(&id).unwrap();
        note.text = "b".into();
        ctx.update(note).unwrap();

        let (store, effects) = ctx.finish(0, Timestamp::now());
        assert_eq!(effects.created.len(), 1);
        assert!(effects.mutated.is_empty());
        assert_eq!(store.get(&id).unwrap().version, 1);
    }

    #[test]
    fn test_unused_fresh_id_leaves_no_object() {
        let mut ctx = ctx(1, 0);
        ctx.fresh_id().unwrap();
        assert_eq!(ctx.ids_created(), 1);
        let (store, effects) = ctx.finish(0, Timestamp::now());
        assert!(store.is_empty());
        assert!(effects.created.is_empty());
    }

    #[test]
    fn test_update_of_unknown_object_rejected() {
        let mut ctx = ctx(1, 0);
        let note = Note {
            id: ObjectId::from_bytes([4; 32]),
            text: "x".into(),
        };
        assert!(matches!(
            ctx.update(note),
            Err(ExecutionError::ObjectNotFound { .. })
        ));
    }

    #[test]
    fn test_emit_records_tag_and_payload() {
        #[derive(Serialize)]
        struct Ping {
            n: u32,
        }
        impl EventType for Ping {
            fn type_tag(&self) -> String {
                "test::Ping".into()
            }
        }

        let mut ctx = ctx(1, 0);
        ctx.emit(Ping { n: 3 }).unwrap();
        let (_, effects) = ctx.finish(0, Timestamp::now());
        assert_eq!(effects.events[0].type_tag, "test::Ping");
        assert_eq!(effects.events[0].payload, serde_json::json!({"n": 3}));
    }

    proptest! {
        /// Ids allocated within one transaction never collide.
        #[test]
        fn fresh_ids_unique_within_transaction(count in 1usize..64, sender in any::<u8>()) {
            let mut ctx = ctx(sender, 0);
            let ids: BTreeSet<ObjectId> = (0..count).map(|_| ctx.fresh_id().unwrap()).collect();
            prop_assert_eq!(ids.len(), count);
        }

        /// Different transactions allocate different first ids.
        #[test]
        fn fresh_ids_differ_across_transactions(a in any::<u64>(), b in any::<u64>()) {
            prop_assume!(a != b);
            let first = ctx(1, a).fresh_id().unwrap();
            let second = ctx(1, b).fresh_id().unwrap();
            prop_assert_ne!(first, second);
        }
    }
}
