//! Cryptographic primitives for the PSP protocol.
//!
//! - **SHA-256** for the genesis anchor digest

pub mod hash;

pub use hash::{hash_genesis, sha256};
