//! # Modules and One-Time Witnesses
//!
//! A module is published once. Publishing hands the module's `init` a
//! `OneTimeWitness<M>`: a zero-field token that only this crate can
//! construct and that is neither `Clone` nor `Copy`, so it can be consumed
//! exactly once.
//!
//! The ledger backs this with a registry-wide set of published module
//! names, checked and set inside the publish call. A second publish of the
//! same module fails with `AlreadyPublished` before any witness exists.
//!
//! ```compile_fail
//! use nft_object::{Module, OneTimeWitness};
//! fn forge<M: Module>() -> OneTimeWitness<M> {
//!     // ERROR: `issue` is private to the runtime.
//!     OneTimeWitness::issue()
//! }
//! ```

use std::marker::PhantomData;

use crate::context::TxContext;
use crate::error::ExecutionError;

/// A publishable unit of logic.
pub trait Module: Sized + 'static {
    /// Module name; unique across the ledger.
    const NAME: &'static str;

    /// Runs once, in the publish transaction.
    fn init(witness: OneTimeWitness<Self>, ctx: &mut TxContext) -> Result<(), ExecutionError>;
}

/// Proof that module `M` is being published for the first time.
pub struct OneTimeWitness<M: Module> {
    _module: PhantomData<fn() -> M>,
}

impl<M: Module> OneTimeWitness<M> {
    pub(crate) fn issue() -> Self {
        Self {
            _module: PhantomData,
        }
    }

    /// Name of the module this witness was issued to.
    pub fn module_name(&self) -> &'static str {
        M::NAME
    }
}

impl<M: Module> std::fmt::Debug for OneTimeWitness<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OneTimeWitness<{}>", M::NAME)
    }
}
