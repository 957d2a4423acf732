//! Registry construction errors.

use psp_types::{PspError, WalletId};
use thiserror::Error;

/// Errors raised while building or loading a [`ConstantRegistry`](crate::ConstantRegistry).
///
/// All of these are fatal: a registry that fails to build must never be used
/// to emit tokens.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("immutable rule violated for {wallet}: {reason}")]
    ImmutableRuleViolation { wallet: WalletId, reason: String },

    #[error("configuration invariant violated: {reason}")]
    ConfigurationInvariant { reason: String },

    #[error("registry config error: {0}")]
    Config(String),

    #[error("{0}")]
    Parse(#[from] PspError),
}

impl RegistryError {
    pub(crate) fn invariant(reason: impl Into<String>) -> Self {
        Self::ConfigurationInvariant {
            reason: reason.into(),
        }
    }
}
