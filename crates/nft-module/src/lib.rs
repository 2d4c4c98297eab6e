//! # nft-module: The NFT Module
//!
//! Three components on top of the `nft-object` runtime:
//!
//! | Component | Function | Runs |
//! |---|---|---|
//! | Module Initializer | [`NftModule::init`](init::NftModule) | once, at deploy |
//! | Asset Minter | [`asset::mint`] | any number of times, by anyone |
//! | Display Registrar | [`display::create_display`] | by the publisher holder |
//!
//! ```text
//! deploy ──▶ init(OneTimeWitness<NftModule>) ──▶ Publisher<NftModule> ──▶ deployer
//!                                                     │ (&)
//! mint(titulo, descricao, imagem_url) ──▶ Asset       ▼
//!                                           create_display ──▶ Display<Asset> v1
//! ```
//!
//! [`entry`] wraps each component in its own ledger transaction.

pub mod asset;
pub mod display;
pub mod entry;
pub mod init;

pub use asset::{mint, Asset};
pub use display::{create_display, DISPLAY_FIELDS};
pub use entry::{create_display_entry, deploy, mint_entry, publisher_id};
pub use init::NftModule;
