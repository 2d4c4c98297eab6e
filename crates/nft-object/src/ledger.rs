//! # Ledger
//!
//! In-process execution environment: holds committed objects, the set of
//! published modules, and the history of committed transactions.
//!
//! ## Execution Model
//!
//! ```text
//! execute(sender, f)
//!   ├─ digest = sha256(jcs({sender, epoch, sequence}))
//!   ├─ ctx    = TxContext over a staged copy of the store
//!   ├─ f(&mut ctx)
//!   │    ├─ Ok  ──▶ swap staged store in, sequence += 1, record effects
//!   │    └─ Err ──▶ drop staged store; ledger unchanged
//! ```
//!
//! `execute` takes `&mut self`, so transactions on one ledger are strictly
//! serialized. Share a ledger across threads behind a lock.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use nft_core::{Address, ObjectId, Timestamp, TransactionDigest};

use crate::context::TxContext;
use crate::effects::TransactionEffects;
use crate::error::ExecutionError;
use crate::object::{Object, ObjectStore, StoredObject};
use crate::witness::{Module, OneTimeWitness};

/// Record of a published module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishedModule {
    /// Module name.
    pub name: String,
    /// Account that published it.
    pub publisher: Address,
    /// Digest of the publish transaction.
    pub digest: TransactionDigest,
}

/// Committed ledger state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    epoch: u64,
    sequence: u64,
    store: ObjectStore,
    published: BTreeMap<String, PublishedModule>,
    history: Vec<TransactionEffects>,
}

impl Ledger {
    /// An empty ledger at epoch 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty ledger starting at `epoch`.
    pub fn with_epoch(epoch: u64) -> Self {
        Self {
            epoch,
            ..Self::default()
        }
    }

    /// Current epoch.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Number of committed transactions.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Committed objects.
    pub fn store(&self) -> &ObjectStore {
        &self.store
    }

    /// Effects of every committed transaction, oldest first.
    pub fn history(&self) -> &[TransactionEffects] {
        &self.history
    }

    // ── Execution ────────────────────────────────────────────────────

    /// Run `f` as one atomic transaction sent by `sender`.
    pub fn execute<F>(&mut self, sender: Address, f: F) -> Result<TransactionEffects, ExecutionError>
    where
        F: FnOnce(&mut TxContext) -> Result<(), ExecutionError>,
    {
        let digest = TransactionDigest::compute(&sender, self.epoch, self.sequence)?;
        debug!(%sender, %digest, sequence = self.sequence, "executing transaction");

        let mut ctx = TxContext::new(sender, digest, self.epoch, self.store.clone());
        if let Err(e) = f(&mut ctx) {
            warn!(%sender, %digest, error = %e, "transaction aborted");
            return Err(e);
        }

        let (store, effects) = ctx.finish(self.sequence, Timestamp::now());
        self.store = store;
        self.sequence += 1;
        self.history.push(effects.clone());
        debug!(
            %digest,
            created = effects.created.len(),
            mutated = effects.mutated.len(),
            events = effects.events.len(),
            "transaction committed"
        );
        Ok(effects)
    }

    /// Publish module `M`, running its `init` with a fresh one-time witness.
    ///
    /// # Errors
    ///
    /// `AlreadyPublished` if `M` was published before. If `init` fails the
    /// module stays unpublished.
    pub fn publish<M: Module>(&mut self, deployer: Address) -> Result<TransactionEffects, ExecutionError> {
        if self.published.contains_key(M::NAME) {
            return Err(ExecutionError::AlreadyPublished {
                module: M::NAME.to_string(),
            });
        }
        let effects = self.execute(deployer, |ctx| M::init(OneTimeWitness::<M>::issue(), ctx))?;
        self.published.insert(
            M::NAME.to_string(),
            PublishedModule {
                name: M::NAME.to_string(),
                publisher: deployer,
                digest: effects.digest,
            },
        );
        info!(module = M::NAME, %deployer, digest = %effects.digest, "module published");
        Ok(effects)
    }

    /// Transfer any object owned by `sender` to `recipient`.
    pub fn transfer_object(
        &mut self,
        sender: Address,
        id: ObjectId,
        recipient: Address,
    ) -> Result<TransactionEffects, ExecutionError> {
        self.execute(sender, |ctx| ctx.transfer_object(&id, recipient))
    }

    // ── Observation ──────────────────────────────────────────────────

    /// Whether a module with this name has been published.
    pub fn is_published(&self, name: &str) -> bool {
        self.published.contains_key(name)
    }

    /// Publish record for a module.
    pub fn published_module(&self, name: &str) -> Option<&PublishedModule> {
        self.published.get(name)
    }

    /// Look up a committed object.
    pub fn object(&self, id: &ObjectId) -> Option<&StoredObject> {
        self.store.get(id)
    }

    /// Decode a committed object as `T`.
    pub fn get<T: Object>(&self, id: &ObjectId) -> Result<T, ExecutionError> {
        self.store
            .get(id)
            .ok_or(ExecutionError::ObjectNotFound { id: *id })?
            .decode()
    }

    /// Objects exclusively owned by `owner`.
    pub fn owned_by(&self, owner: &Address) -> Vec<&StoredObject> {
        self.store.owned_by(owner).collect()
    }

    /// Objects of type `T`, in id order.
    pub fn objects_of_type<T: Object>(&self) -> Vec<&StoredObject> {
        self.store.of_type::<T>().collect()
    }
}
