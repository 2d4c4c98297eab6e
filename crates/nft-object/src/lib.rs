//! # nft-object: Object Runtime
//!
//! The execution substrate NFT modules run on: typed objects with a single
//! owner, atomic transactions, one-time witnesses, publisher capabilities,
//! versioned display templates, and events.
//!
//! ## Architecture
//!
//! ```text
//! Ledger ──execute──▶ TxContext (staged ObjectStore)
//!   │                    │
//!   │                    ├── fresh_id / transfer / freeze / update
//!   │                    ├── read / take
//!   │                    └── emit(Event)
//!   │
//!   └──publish::<M>──▶ M::init(OneTimeWitness<M>, ctx)
//!                        └── claim ──▶ Publisher<M> ──▶ Display<T: Declared<Module = M>>
//! ```
//!
//! Module logic only ever sees a `TxContext`. The ledger is the only thing
//! that commits state.

pub mod context;
pub mod display;
pub mod effects;
pub mod error;
pub mod event;
pub mod ledger;
pub mod object;
pub mod publisher;
pub mod witness;

pub use context::TxContext;
pub use display::{Display, DisplayCreated, VersionUpdated};
pub use effects::{ObjectChange, TransactionEffects};
pub use error::ExecutionError;
pub use event::{Event, EventType};
pub use ledger::{Ledger, PublishedModule};
pub use object::{Declared, Object, ObjectStore, Owner, StoredObject};
pub use publisher::{claim, Publisher};
pub use witness::{Module, OneTimeWitness};
