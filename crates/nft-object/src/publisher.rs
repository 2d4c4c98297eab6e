//! # Publisher Capability
//!
//! `Publisher<M>` is the proof-of-authority object for module `M`. It is
//! claimed by consuming the module's one-time witness, so at most one
//! exists per published module.
//!
//! The module marker `M` is a type parameter: operations gated on a
//! publisher ask for `&Publisher<T::Module>` and a publisher of a different
//! module is rejected by the compiler. When a publisher is loaded by id from
//! the store, where types are erased, the same check runs against the type
//! tag and fails with `AuthorityMismatch`.
//!
//! Holding a `Publisher<M>` value is not enough on its own: gated operations
//! re-check it against the store, so only the account that owns the stored
//! capability can use it.

use std::marker::PhantomData;

use serde::{Deserialize, Serialize};
use tracing::info;

use nft_core::ObjectId;

use crate::context::TxContext;
use crate::error::ExecutionError;
use crate::object::Object;
use crate::witness::{Module, OneTimeWitness};

const PUBLISHER_TAG_PREFIX: &str = "package::Publisher<";

/// Authority capability for module `M`.
///
/// Not `Clone`: the capability moves between owners, it is never copied.
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Publisher<M: Module> {
    id: ObjectId,
    module_name: String,
    #[serde(skip)]
    _module: PhantomData<fn() -> M>,
}

impl<M: Module> Publisher<M> {
    /// Name of the module this publisher speaks for.
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// Load the sender's publisher for `M` by id.
    ///
    /// # Errors
    ///
    /// `AuthorityMismatch` if `id` holds a publisher of another module;
    /// `NotOwner`, `Immutable`, `ObjectNotFound`, or `TypeMismatch` as for
    /// any take.
    pub fn load(ctx: &TxContext, id: &ObjectId) -> Result<Self, ExecutionError> {
        ctx.take::<Self>(id).map_err(|e| match e {
            ExecutionError::TypeMismatch {
                id,
                expected,
                found,
            } if found.starts_with(PUBLISHER_TAG_PREFIX) => ExecutionError::AuthorityMismatch {
                id,
                expected,
                found,
            },
            other => other,
        })
    }

    /// Check that this publisher is stored under its id and held by the
    /// sender. A value that never went through `claim` fails here.
    pub(crate) fn verify(&self, ctx: &TxContext) -> Result<(), ExecutionError> {
        let stored = Self::load(ctx, &self.id)?;
        if stored.module_name != self.module_name {
            return Err(ExecutionError::AuthorityMismatch {
                id: self.id,
                expected: Self::type_tag(),
                found: format!("{PUBLISHER_TAG_PREFIX}{}>", self.module_name),
            });
        }
        Ok(())
    }
}

impl<M: Module> Object for Publisher<M> {
    fn type_tag() -> String {
        format!("{PUBLISHER_TAG_PREFIX}{}>", M::NAME)
    }

    fn id(&self) -> &ObjectId {
        &self.id
    }
}

impl<M: Module> std::fmt::Debug for Publisher<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Publisher")
            .field("id", &self.id)
            .field("module_name", &self.module_name)
            .finish()
    }
}

/// Exchange a one-time witness for the module's publisher.
///
/// The witness is consumed; the caller decides who receives the publisher.
pub fn claim<M: Module>(
    witness: OneTimeWitness<M>,
    ctx: &mut TxContext,
) -> Result<Publisher<M>, ExecutionError> {
    let module_name = witness.module_name().to_string();
    let id = ctx.fresh_id()?;
    info!(module = %module_name, publisher = %id, "claimed publisher");
    Ok(Publisher {
        id,
        module_name,
        _module: PhantomData,
    })
}
