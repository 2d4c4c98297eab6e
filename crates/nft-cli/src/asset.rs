//! # Mint Subcommand
//!
//! Mints one asset owned by the sender. Field values are taken as text, or
//! as raw hex-encoded bytes with `--hex` so that arbitrary byte input can
//! be submitted as-is.

use anyhow::{bail, Context, Result};
use clap::Args;

use nft_module::{mint_entry, Asset};

use crate::config::NftConfig;
use crate::store::{print_effects, transact};

/// Arguments for the `nft mint` subcommand.
#[derive(Args, Debug)]
pub struct MintArgs {
    /// Asset title.
    #[arg(long)]
    pub title: String,
    /// Asset description.
    #[arg(long)]
    pub description: String,
    /// Image location.
    #[arg(long)]
    pub image_url: String,
    /// Treat the three values as hex-encoded bytes.
    #[arg(long)]
    pub hex: bool,
}

/// Execute the mint subcommand.
pub fn run_mint(args: &MintArgs, config: &NftConfig) -> Result<u8> {
    let sender = config.require_sender()?;
    let (titulo, descricao, imagem_url) = if args.hex {
        (
            parse_hex_bytes(&args.title).context("invalid --title")?,
            parse_hex_bytes(&args.description).context("invalid --description")?,
            parse_hex_bytes(&args.image_url).context("invalid --image-url")?,
        )
    } else {
        (
            args.title.as_bytes().to_vec(),
            args.description.as_bytes().to_vec(),
            args.image_url.as_bytes().to_vec(),
        )
    };

    let effects = transact(config, |ledger| {
        mint_entry(ledger, sender, &titulo, &descricao, &imagem_url)
    })?;
    let id = effects
        .created_of::<Asset>()
        .first()
        .copied()
        .context("mint created no asset")?;
    println!("OK: minted asset {id} owned by {sender}");
    print_effects(&effects);
    Ok(0)
}

/// Decode an even-length hex string (optional `0x` prefix) into bytes.
fn parse_hex_bytes(s: &str) -> Result<Vec<u8>> {
    let hex = s.strip_prefix("0x").unwrap_or(s);
    if hex.len() % 2 != 0 {
        bail!("odd number of hex digits in {s:?}");
    }
    hex.as_bytes()
        .chunks(2)
        .map(|pair| {
            let pair = std::str::from_utf8(pair).context("non-ascii hex input")?;
            u8::from_str_radix(pair, 16).with_context(|| format!("invalid hex digits {pair:?}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::load_ledger;
    use nft_core::Address;

    fn config(dir: &tempfile::TempDir) -> NftConfig {
        NftConfig {
            state_path: dir.path().join("ledger.json"),
            sender: Some(Address::from_bytes([0x5; 32])),
            epoch: 0,
        }
    }

    fn args(title: &str, description: &str, image_url: &str, hex: bool) -> MintArgs {
        MintArgs {
            title: title.into(),
            description: description.into(),
            image_url: image_url.into(),
            hex,
        }
    }

    #[test]
    fn mint_text_fields() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(&dir);
        run_mint(&args("My Art", "A painting", "ipfs://abc", false), &config).unwrap();

        let ledger = load_ledger(&config.state_path, 0).unwrap();
        let assets = ledger.objects_of_type::<Asset>();
        assert_eq!(assets.len(), 1);
        let asset: Asset = assets[0].decode().unwrap();
        assert_eq!(asset.titulo, "My Art");
        assert_eq!(asset.imagem_url, "ipfs://abc");
    }

    #[test]
    fn mint_hex_fields() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(&dir);
        // "Hi", "", "x"
        run_mint(&args("0x4869", "", "78", true), &config).unwrap();
        let ledger = load_ledger(&config.state_path, 0).unwrap();
        let asset: Asset = ledger.objects_of_type::<Asset>()[0].decode().unwrap();
        assert_eq!(asset.titulo, "Hi");
        assert_eq!(asset.descricao, "");
        assert_eq!(asset.imagem_url, "x");
    }

    #[test]
    fn mint_invalid_utf8_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(&dir);
        let err = run_mint(&args("41", "ff", "41", true), &config).unwrap_err();
        assert!(format!("{err:#}").contains("invalid utf-8 in descricao"));
        assert!(!config.state_path.exists());
    }

    #[test]
    fn parse_hex_bytes_cases() {
        assert_eq!(parse_hex_bytes("0x00ff").unwrap(), vec![0x00, 0xff]);
        assert_eq!(parse_hex_bytes("").unwrap(), Vec::<u8>::new());
        assert!(parse_hex_bytes("abc").is_err());
        assert!(parse_hex_bytes("zz").is_err());
    }
}
