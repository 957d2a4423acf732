//! Registry configuration with TOML file support.
//!
//! The shipped registry is compiled in. A TOML file can describe an
//! alternative table (a test deployment or a fork); it goes through exactly
//! the same validation, so the eternal rules still apply.

use crate::constants::{CREATION_TIMESTAMP, PROTOCOL_NAME, PROTOCOL_VERSION};
use crate::error::RegistryError;
use crate::payload::GenesisPayload;
use crate::registry::ConstantRegistry;
use crate::wallet::WalletDefinition;
use psp_types::{DestinationKind, Percentage, Timestamp, WalletId};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a registry.
///
/// Omitted fields fall back to the shipped constants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default = "default_protocol_name")]
    pub protocol_name: String,

    #[serde(default = "default_version")]
    pub version: String,

    /// Unix seconds.
    #[serde(default = "default_creation_timestamp")]
    pub creation_timestamp: u64,

    /// Wallet table in canonical order.
    #[serde(default = "default_wallets")]
    pub wallets: Vec<WalletEntry>,
}

/// One wallet row in a registry config file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletEntry {
    pub id: WalletId,

    /// Decimal percent, e.g. `"26.67"`.
    pub percentage: Percentage,

    /// Defaults to the wallet's shipped destination. Any other value is
    /// rejected when the registry is built.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_kind: Option<DestinationKind>,

    /// Defaults to false for Zeus and Olympus, true otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutable: Option<bool>,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_protocol_name() -> String {
    PROTOCOL_NAME.to_string()
}

fn default_version() -> String {
    PROTOCOL_VERSION.to_string()
}

fn default_creation_timestamp() -> u64 {
    CREATION_TIMESTAMP.as_secs()
}

fn default_wallets() -> Vec<WalletEntry> {
    WalletDefinition::shipped_table()
        .into_iter()
        .map(WalletEntry::from)
        .collect()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl From<WalletDefinition> for WalletEntry {
    fn from(w: WalletDefinition) -> Self {
        Self {
            id: w.id,
            percentage: w.percentage,
            destination_kind: Some(w.destination_kind),
            mutable: Some(w.mutable),
        }
    }
}

impl From<&WalletEntry> for WalletDefinition {
    fn from(entry: &WalletEntry) -> Self {
        let mut wallet = WalletDefinition::new(entry.id, entry.percentage);
        if let Some(kind) = entry.destination_kind {
            wallet.destination_kind = kind;
        }
        if let Some(mutable) = entry.mutable {
            wallet.mutable = mutable;
        }
        wallet
    }
}

impl RegistryConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| RegistryError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, RegistryError> {
        toml::from_str(s).map_err(|e| RegistryError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, RegistryError> {
        toml::to_string_pretty(self).map_err(|e| RegistryError::Config(e.to_string()))
    }

    pub fn to_payload(&self) -> GenesisPayload {
        GenesisPayload::new(
            self.protocol_name.clone(),
            self.version.clone(),
            Timestamp::new(self.creation_timestamp),
            self.wallets.iter().map(WalletDefinition::from).collect(),
        )
    }

    /// Validate and build the registry this configuration describes.
    pub fn into_registry(self) -> Result<ConstantRegistry, RegistryError> {
        ConstantRegistry::new(self.to_payload())
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            protocol_name: default_protocol_name(),
            version: default_version(),
            creation_timestamp: default_creation_timestamp(),
            wallets: default_wallets(),
        }
    }
}

impl From<&ConstantRegistry> for RegistryConfig {
    fn from(registry: &ConstantRegistry) -> Self {
        let payload = registry.payload();
        Self {
            protocol_name: payload.protocol_name().to_string(),
            version: payload.version().to_string(),
            creation_timestamp: payload.creation_timestamp().as_secs(),
            wallets: registry.wallets().iter().copied().map(WalletEntry::from).collect(),
        }
    }
}

impl ConstantRegistry {
    /// Load and validate a registry from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let config = RegistryConfig::from_toml_file(path)?;
        tracing::info!(
            protocol = %config.protocol_name,
            version = %config.version,
            "loading registry from config file"
        );
        config.into_registry()
    }
}
