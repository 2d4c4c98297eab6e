//! # Display Subcommand
//!
//! - `create`: register the asset display with the sender's publisher.
//! - `list`: show every registered asset display. More than one is
//!   allowed by the module; `list` flags it so operators notice.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use nft_core::ObjectId;
use nft_module::{create_display_entry, Asset};
use nft_object::{Display, Object};

use crate::config::NftConfig;
use crate::store::{load_ledger, print_effects, transact};

/// Arguments for the `nft display` subcommand.
#[derive(Args, Debug)]
pub struct DisplayArgs {
    #[command(subcommand)]
    pub command: DisplayCommand,
}

/// Display subcommands.
#[derive(Subcommand, Debug)]
pub enum DisplayCommand {
    /// Create and activate the asset display.
    Create {
        /// Id of the sender's `Publisher<nft>` object.
        #[arg(long)]
        publisher: ObjectId,
    },
    /// List registered asset displays.
    List,
}

/// Execute the display subcommand.
pub fn run_display(args: &DisplayArgs, config: &NftConfig) -> Result<u8> {
    match &args.command {
        DisplayCommand::Create { publisher } => cmd_create(config, *publisher),
        DisplayCommand::List => cmd_list(config),
    }
}

fn cmd_create(config: &NftConfig, publisher: ObjectId) -> Result<u8> {
    let sender = config.require_sender()?;
    let effects = transact(config, |ledger| create_display_entry(ledger, sender, publisher))?;
    let id = effects
        .created_of::<Display<Asset>>()
        .first()
        .copied()
        .context("display create produced no display")?;
    println!("OK: registered display {id} for {}", Asset::type_tag());
    print_effects(&effects);
    Ok(0)
}

fn cmd_list(config: &NftConfig) -> Result<u8> {
    let ledger = load_ledger(&config.state_path, config.epoch)?;
    let displays = ledger.objects_of_type::<Display<Asset>>();
    if displays.is_empty() {
        println!("No displays registered for {}.", Asset::type_tag());
        return Ok(0);
    }
    if displays.len() > 1 {
        tracing::warn!(count = displays.len(), "multiple displays registered for the same type");
    }

    println!("Displays for {} ({}):", Asset::type_tag(), displays.len());
    for stored in displays {
        let display: Display<Asset> = stored.decode()?;
        println!("  {} v{} ({})", stored.id, display.version(), stored.owner);
        for (key, template) in display.fields() {
            println!("    {key} = {template}");
        }
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deploy::{run_deploy, DeployArgs};
    use nft_core::Address;
    use nft_object::Publisher;
    use nft_module::NftModule;

    fn config(dir: &tempfile::TempDir, sender: u8) -> NftConfig {
        NftConfig {
            state_path: dir.path().join("ledger.json"),
            sender: Some(Address::from_bytes([sender; 32])),
            epoch: 0,
        }
    }

    fn deployed_publisher(config: &NftConfig) -> ObjectId {
        run_deploy(&DeployArgs {}, config).unwrap();
        let ledger = load_ledger(&config.state_path, 0).unwrap();
        ledger.objects_of_type::<Publisher<NftModule>>()[0].id
    }

    #[test]
    fn create_and_list() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(&dir, 1);
        let publisher = deployed_publisher(&config);

        assert_eq!(cmd_list(&config).unwrap(), 0);
        assert_eq!(cmd_create(&config, publisher).unwrap(), 0);
        assert_eq!(cmd_create(&config, publisher).unwrap(), 0);
        assert_eq!(cmd_list(&config).unwrap(), 0);

        let ledger = load_ledger(&config.state_path, 0).unwrap();
        assert_eq!(ledger.objects_of_type::<Display<Asset>>().len(), 2);
    }

    #[test]
    fn create_by_non_holder_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let publisher = deployed_publisher(&config(&dir, 1));

        let err = cmd_create(&config(&dir, 2), publisher).unwrap_err();
        assert!(format!("{err:#}").contains("not by sender"));
    }

    #[test]
    fn create_with_unknown_publisher_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(&dir, 1);
        deployed_publisher(&config);
        let err = cmd_create(&config, ObjectId::from_bytes([0xee; 32])).unwrap_err();
        assert!(format!("{err:#}").contains("not found"));
    }
}
