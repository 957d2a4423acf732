//! Genesis Verifier: recompute the anchor digest and compare it.

use crate::canonical::canonical_bytes;
use psp_crypto::hash_genesis;
use psp_registry::{ConstantRegistry, GenesisPayload, RegistryError};
use psp_types::{GenesisHash, PspAmount, Timestamp};
use serde::Serialize;

/// The digest shipped with protocol version 1.0.0.
pub const EXPECTED_GENESIS_HASH: GenesisHash = GenesisHash::new([
    0xa5, 0x10, 0x2c, 0x58, 0xcb, 0xa5, 0x51, 0xb9,
    0x13, 0x94, 0x58, 0xd4, 0xf9, 0x8b, 0x78, 0xc6,
    0xb0, 0x69, 0xfd, 0x09, 0x6c, 0x80, 0xe9, 0xa2,
    0x51, 0xd7, 0x86, 0x3a, 0xd8, 0x9c, 0x6a, 0x88,
]);

/// Outcome of a genesis check.
///
/// `valid == false` is the `GenesisMismatch` outcome: a normal result the
/// caller inspects, not an error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenesisVerification {
    pub genesis_hash: GenesisHash,
    pub expected_hash: GenesisHash,
    pub valid: bool,
    pub block_number: u64,
    pub creation_timestamp: Timestamp,
    pub protocol_version: String,
    pub total_emission: PspAmount,
    pub wallet_count: usize,
}

/// The digest the shipped constants must hash to.
pub fn expected_genesis_hash() -> GenesisHash {
    EXPECTED_GENESIS_HASH
}

/// SHA-256 of the payload's canonical encoding.
pub fn compute_genesis_hash(payload: &GenesisPayload) -> GenesisHash {
    hash_genesis(&canonical_bytes(payload))
}

/// Check `registry` against the shipped digest.
pub fn verify_genesis(registry: &ConstantRegistry) -> GenesisVerification {
    verify_against(registry, expected_genesis_hash())
}

/// Check `registry` against a caller-provided digest.
pub fn verify_against(registry: &ConstantRegistry, expected: GenesisHash) -> GenesisVerification {
    let payload = registry.payload();
    let computed = compute_genesis_hash(payload);
    let valid = computed == expected;

    if valid {
        tracing::debug!(hash = %computed, "genesis verified");
    } else {
        tracing::warn!(
            computed = %computed,
            expected = %expected,
            "genesis mismatch: protocol constants differ from the anchor"
        );
    }

    GenesisVerification {
        genesis_hash: computed,
        expected_hash: expected,
        valid,
        block_number: payload.block_number(),
        creation_timestamp: payload.creation_timestamp(),
        protocol_version: payload.version().to_string(),
        total_emission: payload.total_emission(),
        wallet_count: payload.wallets().len(),
    }
}

/// Verify the process-wide shipped registry.
///
/// Errors only if the shipped registry itself fails to build.
pub fn verify_shipped_genesis() -> Result<GenesisVerification, RegistryError> {
    ConstantRegistry::shipped().map(verify_genesis)
}
