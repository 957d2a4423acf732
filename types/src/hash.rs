//! 256-bit digest type for the genesis anchor.

use crate::error::PspError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A 32-byte genesis digest.
///
/// Serializes as a lowercase hex string.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GenesisHash([u8; 32]);

impl GenesisHash {
    pub const ZERO: Self = Self([0u8; 32]);

    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a 64-character hex digest (either case).
    pub fn from_hex(s: &str) -> Result<Self, PspError> {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s.trim(), &mut bytes)
            .map_err(|e| PspError::InvalidHash(format!("{s:?}: {e}")))?;
        Ok(Self(bytes))
    }
}

impl fmt::Debug for GenesisHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GenesisHash({}\u{2026})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for GenesisHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for GenesisHash {
    type Err = PspError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for GenesisHash {
    type Error = PspError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<GenesisHash> for String {
    fn from(hash: GenesisHash) -> Self {
        hash.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip_accepts_uppercase() {
        let hash = GenesisHash::new([0xAB; 32]);
        let upper = hash.to_hex().to_uppercase();
        assert_eq!(GenesisHash::from_hex(&upper).unwrap(), hash);
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(matches!(
            GenesisHash::from_hex("abcd"),
            Err(PspError::InvalidHash(_))
        ));
        assert!(GenesisHash::from_hex(&"zz".repeat(32)).is_err());
    }

    #[test]
    fn debug_is_abbreviated() {
        let hash = GenesisHash::new([0x01; 32]);
        assert_eq!(format!("{hash:?}"), "GenesisHash(01010101\u{2026})");
    }
}
