//! # nft CLI entry point
//!
//! Parses command-line arguments, resolves configuration, and dispatches
//! to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use nft_cli::account::{run_account, AccountArgs};
use nft_cli::asset::{run_mint, MintArgs};
use nft_cli::deploy::{run_deploy, DeployArgs};
use nft_cli::display::{run_display, DisplayArgs};
use nft_cli::object::{run_list, run_show, run_transfer, ListArgs, ShowArgs, TransferArgs};
use nft_cli::NftConfig;
use nft_core::Address;

/// NFT module CLI.
///
/// Deploys the NFT module, mints assets, registers the asset display, and
/// inspects or transfers objects in a local ledger snapshot.
#[derive(Parser, Debug)]
#[command(name = "nft", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Ledger snapshot file (overrides config and NFT_STATE_PATH).
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    /// Sender address (overrides config and NFT_SENDER).
    #[arg(long, global = true)]
    sender: Option<Address>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Account address utilities.
    Account(AccountArgs),

    /// Publish the NFT module.
    Deploy(DeployArgs),

    /// Mint an asset owned by the sender.
    Mint(MintArgs),

    /// Register or list asset displays.
    Display(DisplayArgs),

    /// Transfer an owned object to another address.
    Transfer(TransferArgs),

    /// Show one stored object.
    Show(ShowArgs),

    /// List stored objects.
    List(ListArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::debug!("nft CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let result = NftConfig::load(cli.config.as_deref())
        .context("failed to load configuration")
        .and_then(|mut config| {
            config.apply_flags(cli.state.clone(), cli.sender);
            tracing::debug!(state = %config.state_path.display(), epoch = config.epoch, "resolved configuration");
            match &cli.command {
                Commands::Account(args) => run_account(args, &config),
                Commands::Deploy(args) => run_deploy(args, &config),
                Commands::Mint(args) => run_mint(args, &config),
                Commands::Display(args) => run_display(args, &config),
                Commands::Transfer(args) => run_transfer(args, &config),
                Commands::Show(args) => run_show(args, &config),
                Commands::List(args) => run_list(args, &config),
            }
        });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
