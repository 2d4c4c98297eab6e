//! # Object Subcommands
//!
//! Generic object operations that do not depend on the object's type:
//! transfer by the current owner, inspection, and listing.

use anyhow::{Context, Result};
use clap::Args;

use nft_core::{Address, ObjectId};

use crate::config::NftConfig;
use crate::store::{load_ledger, print_effects, transact};

/// Arguments for the `nft transfer` subcommand.
#[derive(Args, Debug)]
pub struct TransferArgs {
    /// Object to transfer.
    #[arg(long)]
    pub object: ObjectId,
    /// New owner.
    #[arg(long)]
    pub recipient: Address,
}

/// Arguments for the `nft show` subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Object id.
    pub id: ObjectId,
}

/// Arguments for the `nft list` subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list objects owned by this address.
    #[arg(long)]
    pub owner: Option<Address>,
}

/// Execute the transfer subcommand.
pub fn run_transfer(args: &TransferArgs, config: &NftConfig) -> Result<u8> {
    let sender = config.require_sender()?;
    let effects = transact(config, |ledger| {
        ledger.transfer_object(sender, args.object, args.recipient)
    })?;
    println!("OK: transferred {} to {}", args.object, args.recipient);
    print_effects(&effects);
    Ok(0)
}

/// Execute the show subcommand.
pub fn run_show(args: &ShowArgs, config: &NftConfig) -> Result<u8> {
    let ledger = load_ledger(&config.state_path, config.epoch)?;
    let object = ledger
        .object(&args.id)
        .with_context(|| format!("object not found: {}", args.id))?;
    println!("Object: {}", object.id);
    println!("  Type: {}", object.type_tag);
    println!("  Owner: {}", object.owner);
    println!("  Version: {}", object.version);
    println!("  Contents: {}", serde_json::to_string_pretty(&object.contents)?);
    Ok(0)
}

/// Execute the list subcommand.
pub fn run_list(args: &ListArgs, config: &NftConfig) -> Result<u8> {
    let ledger = load_ledger(&config.state_path, config.epoch)?;
    let objects: Vec<_> = match &args.owner {
        Some(owner) => ledger.owned_by(owner),
        None => ledger.store().iter().collect(),
    };

    if objects.is_empty() {
        println!("No objects found.");
        return Ok(0);
    }
    println!("Objects ({}):", objects.len());
    for object in objects {
        println!("  {} {} ({})", object.id, object.type_tag, object.owner);
    }
    Ok(0)
}
