//! # nft-cli: NFT Workspace Command-Line Interface
//!
//! Drives the NFT module against a local ledger snapshot. Every command
//! that changes state runs exactly one transaction; if it aborts, the
//! snapshot on disk is left as it was.
//!
//! ## Subcommands
//!
//! - `nft account new|whoami`: Account addresses.
//! - `nft deploy`: Publish the module; the sender receives the publisher.
//! - `nft mint`: Mint an asset owned by the sender.
//! - `nft display create|list`: Register and inspect the asset display.
//! - `nft transfer`: Hand an owned object to another address.
//! - `nft show` / `nft list`: Inspect stored objects.
//!
//! ```bash
//! export NFT_SENDER=$(nft account new | cut -d' ' -f4)
//! nft deploy
//! nft mint --title "My Art" --description "A painting" --image-url ipfs://abc
//! nft display create --publisher 0x...
//! ```
//!
//! ## Crate Policy
//!
//! - Handlers return `anyhow::Result<u8>` exit codes.
//! - Business rules live in `nft-module` and `nft-object`, never here.

pub mod account;
pub mod asset;
pub mod config;
pub mod deploy;
pub mod display;
pub mod object;
pub mod store;

pub use config::{ConfigError, NftConfig};
