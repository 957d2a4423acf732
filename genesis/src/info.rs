//! Public genesis information.

use crate::verifier::compute_genesis_hash;
use psp_registry::ConstantRegistry;
use psp_types::{GenesisHash, PspAmount, Timestamp};
use serde::Serialize;

/// What anyone may learn about the genesis anchor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenesisInfo {
    pub hash: GenesisHash,
    pub block_number: u64,
    pub protocol_name: String,
    pub version: String,
    pub creation_timestamp: Timestamp,
    pub message: String,
    pub principles: Vec<String>,
    pub founding_principle: String,
    pub total_emission: PspAmount,
}

pub fn genesis_info(registry: &ConstantRegistry) -> GenesisInfo {
    let payload = registry.payload();
    GenesisInfo {
        hash: compute_genesis_hash(payload),
        block_number: payload.block_number(),
        protocol_name: payload.protocol_name().to_string(),
        version: payload.version().to_string(),
        creation_timestamp: payload.creation_timestamp(),
        message: payload.message().to_string(),
        principles: payload.principles().to_vec(),
        founding_principle: payload.founding_principle().to_string(),
        total_emission: payload.total_emission(),
    }
}
