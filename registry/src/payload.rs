//! The genesis payload: the foundational constants whose digest anchors the protocol.

use crate::constants::{
    CREATION_TIMESTAMP, FOUNDING_PRINCIPLE, GENESIS_BLOCK_NUMBER, GENESIS_MESSAGE, PRINCIPLES,
    PROTOCOL_NAME, PROTOCOL_VERSION, TOTAL_EMISSION,
};
use crate::wallet::WalletDefinition;
use psp_types::{GenesisHash, PspAmount, Timestamp};
use serde::Serialize;

/// Immutable genesis payload.
///
/// Fields are private: once built, a payload can only be read. The wallet
/// table order is part of the canonical encoding and therefore of the hash.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenesisPayload {
    block_number: u64,
    protocol_name: String,
    version: String,
    creation_timestamp: Timestamp,
    previous_hash: GenesisHash,
    total_emission: PspAmount,
    message: String,
    founding_principle: String,
    principles: Vec<String>,
    wallets: Vec<WalletDefinition>,
}

impl GenesisPayload {
    /// Build a payload with the given identity and wallet table.
    ///
    /// Block number, emission, message and principles are protocol constants
    /// and cannot be chosen by the caller.
    pub fn new(
        protocol_name: impl Into<String>,
        version: impl Into<String>,
        creation_timestamp: Timestamp,
        wallets: Vec<WalletDefinition>,
    ) -> Self {
        Self {
            block_number: GENESIS_BLOCK_NUMBER,
            protocol_name: protocol_name.into(),
            version: version.into(),
            creation_timestamp,
            previous_hash: GenesisHash::ZERO,
            total_emission: TOTAL_EMISSION,
            message: GENESIS_MESSAGE.to_string(),
            founding_principle: FOUNDING_PRINCIPLE.to_string(),
            principles: PRINCIPLES.iter().map(|p| p.to_string()).collect(),
            wallets,
        }
    }

    /// The payload shipped with this library.
    pub fn shipped() -> Self {
        Self::new(
            PROTOCOL_NAME,
            PROTOCOL_VERSION,
            CREATION_TIMESTAMP,
            WalletDefinition::shipped_table(),
        )
    }

    pub fn block_number(&self) -> u64 {
        self.block_number
    }

    pub fn protocol_name(&self) -> &str {
        &self.protocol_name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn creation_timestamp(&self) -> Timestamp {
        self.creation_timestamp
    }

    /// Always zero: genesis has no predecessor.
    pub fn previous_hash(&self) -> &GenesisHash {
        &self.previous_hash
    }

    pub fn total_emission(&self) -> PspAmount {
        self.total_emission
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn founding_principle(&self) -> &str {
        &self.founding_principle
    }

    pub fn principles(&self) -> &[String] {
        &self.principles
    }

    pub fn wallets(&self) -> &[WalletDefinition] {
        &self.wallets
    }
}
