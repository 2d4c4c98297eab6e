//! # Deploy Subcommand
//!
//! Publishes the NFT module into the local ledger. The sender receives the
//! module's publisher, whose id is needed for `display create`.

use anyhow::{Context, Result};
use clap::Args;

use nft_module::{deploy, publisher_id};

use crate::config::NftConfig;
use crate::store::{print_effects, transact};

/// Arguments for the `nft deploy` subcommand.
#[derive(Args, Debug)]
pub struct DeployArgs {}

/// Execute the deploy subcommand.
pub fn run_deploy(_args: &DeployArgs, config: &NftConfig) -> Result<u8> {
    let sender = config.require_sender()?;
    let effects = transact(config, |ledger| deploy(ledger, sender))?;
    let publisher = publisher_id(&effects).context("deploy created no publisher")?;
    println!("OK: published module nft; publisher {publisher} owned by {sender}");
    print_effects(&effects);
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::load_ledger;
    use nft_core::Address;

    fn config(dir: &tempfile::TempDir) -> NftConfig {
        NftConfig {
            state_path: dir.path().join("ledger.json"),
            sender: Some(Address::from_bytes([0xd; 32])),
            epoch: 0,
        }
    }

    #[test]
    fn deploy_once() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(&dir);
        assert_eq!(run_deploy(&DeployArgs {}, &config).unwrap(), 0);

        let ledger = load_ledger(&config.state_path, 0).unwrap();
        assert!(ledger.is_published("nft"));
        assert_eq!(ledger.owned_by(&Address::from_bytes([0xd; 32])).len(), 1);
    }

    #[test]
    fn deploy_twice_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(&dir);
        run_deploy(&DeployArgs {}, &config).unwrap();
        let err = run_deploy(&DeployArgs {}, &config).unwrap_err();
        assert!(format!("{err:#}").contains("already published"));
    }

    #[test]
    fn deploy_without_sender_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = NftConfig {
            sender: None,
            ..config(&dir)
        };
        assert!(run_deploy(&DeployArgs {}, &config).is_err());
        assert!(!config.state_path.exists());
    }
}
