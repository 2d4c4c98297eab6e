//! # Module Initializer
//!
//! Runs once, in the publish transaction. Consumes the module's one-time
//! witness, claims the `Publisher<NftModule>` capability, and hands it to
//! the deployer.

use tracing::info;

use nft_object::{publisher, ExecutionError, Module, OneTimeWitness, TxContext};

/// Marker type for the NFT module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NftModule;

impl Module for NftModule {
    const NAME: &'static str = "nft";

    fn init(witness: OneTimeWitness<Self>, ctx: &mut TxContext) -> Result<(), ExecutionError> {
        let publisher = publisher::claim(witness, ctx)?;
        let deployer = ctx.sender();
        info!(%deployer, module = Self::NAME, "nft module initialized");
        ctx.transfer(publisher, deployer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nft_core::Address;
    use nft_object::{Ledger, Owner, Publisher};

    #[test]
    fn test_init_hands_publisher_to_deployer() {
        let deployer = Address::from_bytes([0xde; 32]);
        let mut ledger = Ledger::new();
        let effects = ledger.publish::<NftModule>(deployer).unwrap();

        let ids = effects.created_of::<Publisher<NftModule>>();
        assert_eq!(ids.len(), 1);
        assert_eq!(effects.created.len(), 1);

        let stored = ledger.object(&ids[0]).unwrap();
        assert_eq!(stored.owner, Owner::AddressOwner(deployer));
        assert_eq!(stored.type_tag, "package::Publisher<nft>");

        let publisher: Publisher<NftModule> = ledger.get(&ids[0]).unwrap();
        assert_eq!(publisher.module_name(), "nft");
    }

    #[test]
    fn test_init_runs_once() {
        let mut ledger = Ledger::new();
        ledger.publish::<NftModule>(Address::ZERO).unwrap();
        match ledger.publish::<NftModule>(Address::ZERO).unwrap_err() {
            ExecutionError::AlreadyPublished { module } => assert_eq!(module, "nft"),
            other => panic!("Expected AlreadyPublished, got: {other:?}"),
        }
        assert_eq!(ledger.objects_of_type::<Publisher<NftModule>>().len(), 1);
    }
}
