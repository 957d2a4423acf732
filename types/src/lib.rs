//! Fundamental types for the PSP protocol.
//!
//! This crate defines the core types shared across every other crate in the workspace:
//! fixed-point amounts, percentages, wallet identities, destination kinds, timestamps
//! and the genesis digest.

mod decimal;

pub mod amount;
pub mod error;
pub mod hash;
pub mod percentage;
pub mod time;
pub mod wallet;

pub use amount::{PspAmount, UsdAmount, PSP_DECIMALS};
pub use error::PspError;
pub use hash::GenesisHash;
pub use percentage::{Percentage, BPS_PER_PERCENT, BPS_WHOLE};
pub use time::Timestamp;
pub use wallet::{DestinationKind, WalletCategory, WalletId};
