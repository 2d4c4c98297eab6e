//! # CLI Configuration
//!
//! Settings are resolved in three layers, later layers winning:
//!
//! 1. YAML file passed with `--config` (all keys optional).
//! 2. Environment variables `NFT_STATE_PATH`, `NFT_SENDER`, `NFT_EPOCH`.
//! 3. Command-line flags `--state` and `--sender`.
//!
//! ```yaml
//! state_path: ./ledger.json
//! sender: "0x00..."
//! epoch: 0
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use nft_core::Address;

/// Default location of the ledger snapshot.
pub const DEFAULT_STATE_PATH: &str = ".nft/ledger.json";

/// Resolved CLI settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NftConfig {
    /// Ledger snapshot file.
    pub state_path: PathBuf,
    /// Account that signs transactions, if configured.
    pub sender: Option<Address>,
    /// Epoch for a newly created ledger.
    pub epoch: u64,
}

impl Default for NftConfig {
    fn default() -> Self {
        Self {
            state_path: PathBuf::from(DEFAULT_STATE_PATH),
            sender: None,
            epoch: 0,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    state_path: Option<PathBuf>,
    sender: Option<String>,
    epoch: Option<u64>,
}

impl NftConfig {
    /// Load the file layer (if any) and apply the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|var| std::env::var(var).ok())?;
        Ok(config)
    }

    /// Read settings from a YAML file on top of the defaults.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Parse settings from YAML text on top of the defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        // An empty document parses as null, not as an empty map.
        let file: ConfigFile = if content.trim().is_empty() {
            ConfigFile::default()
        } else {
            serde_yaml::from_str(content)?
        };
        let mut config = Self::default();
        if let Some(state_path) = file.state_path {
            config.state_path = state_path;
        }
        if let Some(sender) = file.sender {
            config.sender = Some(parse_sender("sender", &sender)?);
        }
        if let Some(epoch) = file.epoch {
            config.epoch = epoch;
        }
        Ok(config)
    }

    /// Apply environment overrides using `lookup` to read variables.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("NFT_STATE_PATH") {
            self.state_path = PathBuf::from(path);
        }
        if let Some(sender) = lookup("NFT_SENDER") {
            self.sender = Some(parse_sender("NFT_SENDER", &sender)?);
        }
        if let Some(epoch) = lookup("NFT_EPOCH") {
            self.epoch = epoch.trim().parse().map_err(|_| ConfigError::InvalidEpoch(epoch))?;
        }
        Ok(())
    }

    /// Apply command-line overrides.
    pub fn apply_flags(&mut self, state: Option<PathBuf>, sender: Option<Address>) {
        if let Some(state) = state {
            self.state_path = state;
        }
        if let Some(sender) = sender {
            self.sender = Some(sender);
        }
    }

    /// The configured sender, or an error telling the user how to set one.
    pub fn require_sender(&self) -> Result<Address, ConfigError> {
        self.sender.ok_or(ConfigError::MissingSender)
    }
}

fn parse_sender(source: &str, raw: &str) -> Result<Address, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|e: nft_core::CoreError| ConfigError::InvalidSender(source.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {}: {}", .path.display(), .source)]
    Read {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid YAML or has unknown keys.
    #[error("invalid config file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A sender address did not parse. Carries the setting name and the
    /// parse error.
    #[error("invalid sender address in {0}: {1}")]
    InvalidSender(String, String),

    /// `NFT_EPOCH` is not an unsigned integer.
    #[error("invalid NFT_EPOCH value: {0:?}")]
    InvalidEpoch(String),

    /// No sender was configured by any layer.
    #[error("no sender configured; pass --sender or set NFT_SENDER")]
    MissingSender,
}
