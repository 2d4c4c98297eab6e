//! # Account Subcommand
//!
//! Accounts are bare addresses; there are no keys to manage. `account new`
//! prints a fresh random address to pass as `--sender`.

use anyhow::Result;
use clap::{Args, Subcommand};

use nft_core::Address;

use crate::config::NftConfig;

/// Arguments for the `nft account` subcommand.
#[derive(Args, Debug)]
pub struct AccountArgs {
    #[command(subcommand)]
    pub command: AccountCommand,
}

/// Account subcommands.
#[derive(Subcommand, Debug)]
pub enum AccountCommand {
    /// Generate a fresh account address.
    New,
    /// Print the configured sender address.
    Whoami,
}

/// Execute the account subcommand.
pub fn run_account(args: &AccountArgs, config: &NftConfig) -> Result<u8> {
    match &args.command {
        AccountCommand::New => cmd_new(),
        AccountCommand::Whoami => cmd_whoami(config),
    }
}

fn cmd_new() -> Result<u8> {
    let address = Address::generate();
    println!("OK: generated account {address}");
    Ok(0)
}

fn cmd_whoami(config: &NftConfig) -> Result<u8> {
    let sender = config.require_sender()?;
    println!("{sender}");
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_account_succeeds() {
        assert_eq!(cmd_new().unwrap(), 0);
    }

    #[test]
    fn whoami_requires_sender() {
        let err = cmd_whoami(&NftConfig::default()).unwrap_err();
        assert!(err.to_string().contains("no sender configured"));

        let config = NftConfig {
            sender: Some(Address::ZERO),
            ..NftConfig::default()
        };
        assert_eq!(cmd_whoami(&config).unwrap(), 0);
    }
}
