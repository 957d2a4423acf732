//! The Constant Registry: PSP's immutable protocol constants.
//!
//! Holds the genesis payload (protocol identity, creation epoch, the
//! eight-wallet distribution table) and enforces the eternal rules when a
//! registry is built:
//!
//! - Zeus and Olympus each receive exactly 1.00%, are immutable, and route to
//!   their own immutable accounts.
//! - The table lists each Greek wallet exactly once.
//! - Fixed-point allocations sum to the 7.500 PSP emission with no residue.
//!
//! A registry that violates any rule never comes into existence.

pub mod config;
pub mod constants;
pub mod error;
pub mod payload;
pub mod registry;
pub mod summary;
pub mod wallet;

pub use config::{RegistryConfig, WalletEntry};
pub use error::RegistryError;
pub use payload::GenesisPayload;
pub use registry::ConstantRegistry;
pub use summary::{EternalRules, RegistrySummary, WalletInfo};
pub use wallet::WalletDefinition;
