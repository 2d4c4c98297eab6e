//! # Ledger Snapshot
//!
//! The CLI keeps the whole ledger as one pretty-printed JSON file. Each
//! command loads it, runs at most one transaction, and writes it back only
//! if the transaction committed.

use std::path::Path;

use anyhow::{Context, Result};

use nft_object::{ExecutionError, Ledger, TransactionEffects};

use crate::config::NftConfig;

/// Load the ledger at `path`, or start an empty one at `epoch` if the file
/// does not exist yet.
pub fn load_ledger(path: &Path, epoch: u64) -> Result<Ledger> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), epoch, "no ledger snapshot; starting empty");
        return Ok(Ledger::with_epoch(epoch));
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read ledger snapshot {}", path.display()))?;
    let ledger: Ledger = serde_json::from_str(&content)
        .with_context(|| format!("corrupt ledger snapshot {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        objects = ledger.store().len(),
        sequence = ledger.sequence(),
        "loaded ledger snapshot"
    );
    Ok(ledger)
}

/// Write the ledger to `path`, creating parent directories as needed.
///
/// Writes to a sibling temp file first and renames it into place, so an
/// interrupted write never leaves a truncated snapshot.
pub fn save_ledger(path: &Path, ledger: &Ledger) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create state directory {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(ledger)?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json).with_context(|| format!("failed to write {}", tmp.display()))?;
    std::fs::rename(&tmp, path)
        .with_context(|| format!("failed to move snapshot into place at {}", path.display()))?;
    Ok(())
}

/// Run one transaction against the configured snapshot and persist the
/// result. A failed transaction leaves the file untouched.
pub fn transact<F>(config: &NftConfig, f: F) -> Result<TransactionEffects>
where
    F: FnOnce(&mut Ledger) -> Result<TransactionEffects, ExecutionError>,
{
    let mut ledger = load_ledger(&config.state_path, config.epoch)?;
    let effects = f(&mut ledger).context("transaction aborted")?;
    save_ledger(&config.state_path, &ledger)?;
    Ok(effects)
}

/// Print the created and mutated objects and emitted events of `effects`.
pub fn print_effects(effects: &TransactionEffects) {
    println!("  digest: {}", effects.digest);
    for change in &effects.created {
        println!("  created: {} {} ({})", change.id, change.type_tag, change.owner);
    }
    for change in &effects.mutated {
        println!("  mutated: {} {} ({})", change.id, change.type_tag, change.owner);
    }
    for event in &effects.events {
        println!("  event: {}", event.type_tag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nft_core::Address;

    #[test]
    fn missing_snapshot_starts_empty_at_epoch() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = load_ledger(&dir.path().join("none.json"), 4).unwrap();
        assert_eq!(ledger.epoch(), 4);
        assert!(ledger.store().is_empty());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("ledger.json");

        let mut ledger = Ledger::new();
        nft_module::deploy(&mut ledger, Address::ZERO).unwrap();
        save_ledger(&path, &ledger).unwrap();
        assert!(!path.with_extension("json.tmp").exists());

        let loaded = load_ledger(&path, 0).unwrap();
        assert_eq!(loaded.store(), ledger.store());
        assert!(loaded.is_published("nft"));
    }

    #[test]
    fn corrupt_snapshot_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = load_ledger(&path, 0).unwrap_err();
        assert!(format!("{err:#}").contains("corrupt ledger snapshot"));
    }

    #[test]
    fn failed_transaction_not_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let config = NftConfig {
            state_path: dir.path().join("ledger.json"),
            ..NftConfig::default()
        };
        transact(&config, |ledger| nft_module::deploy(ledger, Address::ZERO)).unwrap();
        let before = std::fs::read_to_string(&config.state_path).unwrap();

        let err = transact(&config, |ledger| nft_module::deploy(ledger, Address::ZERO)).unwrap_err();
        assert!(format!("{err:#}").contains("already published"));
        assert_eq!(std::fs::read_to_string(&config.state_path).unwrap(), before);
    }
}
