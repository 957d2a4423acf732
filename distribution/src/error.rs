//! Distribution errors.

use psp_registry::RegistryError;
use psp_types::PspAmount;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DistributionError {
    /// The wallet table does not split the emission exactly. Fatal: the
    /// protocol constants are corrupt and nothing may be emitted.
    #[error("allocations sum to {actual}, expected {expected}")]
    ConfigurationInvariant {
        expected: PspAmount,
        actual: PspAmount,
    },

    #[error("arithmetic overflow in distribution")]
    Overflow,

    #[error("{0}")]
    Registry(#[from] RegistryError),
}
