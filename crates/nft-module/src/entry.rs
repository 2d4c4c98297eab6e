//! # Entry Points
//!
//! Transaction-level wrappers around the module functions: each call runs
//! one atomic transaction against the ledger and returns its effects.

use nft_core::{Address, ObjectId};
use nft_object::{ExecutionError, Ledger, Publisher, TransactionEffects};

use crate::asset::mint;
use crate::display::create_display;
use crate::init::NftModule;

/// Publish the NFT module; the deployer receives `Publisher<NftModule>`.
pub fn deploy(ledger: &mut Ledger, deployer: Address) -> Result<TransactionEffects, ExecutionError> {
    ledger.publish::<NftModule>(deployer)
}

/// Mint one asset owned by `sender`.
pub fn mint_entry(
    ledger: &mut Ledger,
    sender: Address,
    titulo: &[u8],
    descricao: &[u8],
    imagem_url: &[u8],
) -> Result<TransactionEffects, ExecutionError> {
    ledger.execute(sender, |ctx| mint(titulo, descricao, imagem_url, ctx))
}

/// Register the asset display using the sender's publisher `publisher_id`.
///
/// # Errors
///
/// `AuthorityMismatch` if `publisher_id` is a publisher of another module;
/// `NotOwner` if the sender does not hold it.
pub fn create_display_entry(
    ledger: &mut Ledger,
    sender: Address,
    publisher_id: ObjectId,
) -> Result<TransactionEffects, ExecutionError> {
    ledger.execute(sender, |ctx| {
        let publisher = Publisher::<NftModule>::load(ctx, &publisher_id)?;
        create_display(&publisher, ctx)
    })
}

/// Id of the publisher created by a `deploy` transaction.
pub fn publisher_id(effects: &TransactionEffects) -> Option<ObjectId> {
    effects.created_of::<Publisher<NftModule>>().first().copied()
}
