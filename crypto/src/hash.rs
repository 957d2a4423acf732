//! SHA-256 hashing for the genesis anchor.

use psp_types::GenesisHash;
use sha2::{Digest, Sha256};

/// Compute a 256-bit SHA-256 hash of arbitrary data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Hash canonical genesis bytes to produce its `GenesisHash`.
pub fn hash_genesis(canonical_bytes: &[u8]) -> GenesisHash {
    GenesisHash::new(sha256(canonical_bytes))
}
