//! Genesis integrity check for the PSP protocol.
//!
//! The genesis payload is encoded into a byte-stable canonical form and
//! hashed with SHA-256. The digest is compared against the value shipped
//! with the protocol; a mismatch means the constants were altered.
//!
//! A mismatch is reported, never raised: deciding whether to halt is the
//! caller's job.

pub mod canonical;
pub mod info;
pub mod verifier;

pub use canonical::canonical_bytes;
pub use info::{genesis_info, GenesisInfo};
pub use verifier::{
    compute_genesis_hash, expected_genesis_hash, verify_against, verify_genesis,
    verify_shipped_genesis, GenesisVerification, EXPECTED_GENESIS_HASH,
};
