//! Top-level error type shared across crates.

use thiserror::Error;

/// Errors raised while parsing or combining the fundamental PSP types.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PspError {
    #[error("invalid decimal {input:?}: {reason}")]
    InvalidDecimal { input: String, reason: &'static str },

    #[error("decimal {input:?} has more than {max} fractional digits")]
    TooManyDecimals { input: String, max: u32 },

    #[error("arithmetic overflow in fixed-point computation")]
    Overflow,

    #[error("unknown wallet: {0}")]
    UnknownWallet(String),

    #[error("unknown destination kind: {0}")]
    UnknownDestinationKind(String),

    #[error("invalid genesis hash: {0}")]
    InvalidHash(String),
}
