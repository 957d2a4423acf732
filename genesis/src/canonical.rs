//! Canonical byte encoding of the genesis payload.
//!
//! Layout (all integers big-endian, strings as `u64` length + UTF-8 bytes):
//!
//! ```text
//! "psp-genesis" | block_number u64 | protocol_name | version
//! | creation_timestamp u64 | previous_hash [32] | total_emission u128
//! | message | founding_principle | n u64 | principle * n
//! | m u64 | (wallet_tag, percentage_bps u32, destination_tag) * m
//! ```
//!
//! Every field has a fixed position and width or an explicit length, so the
//! encoding is injective and identical on every platform.

use psp_registry::GenesisPayload;

/// Domain separation tag prefixed to every encoding.
pub const DOMAIN_TAG: &str = "psp-genesis";

/// Encode `payload` into its canonical byte form.
pub fn canonical_bytes(payload: &GenesisPayload) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(1024);

    put_str(&mut buffer, DOMAIN_TAG);
    buffer.extend_from_slice(&payload.block_number().to_be_bytes());
    put_str(&mut buffer, payload.protocol_name());
    put_str(&mut buffer, payload.version());
    buffer.extend_from_slice(&payload.creation_timestamp().as_secs().to_be_bytes());
    buffer.extend_from_slice(payload.previous_hash().as_bytes());
    buffer.extend_from_slice(&payload.total_emission().raw().to_be_bytes());
    put_str(&mut buffer, payload.message());
    put_str(&mut buffer, payload.founding_principle());

    put_len(&mut buffer, payload.principles().len());
    for principle in payload.principles() {
        put_str(&mut buffer, principle);
    }

    put_len(&mut buffer, payload.wallets().len());
    for wallet in payload.wallets() {
        put_str(&mut buffer, wallet.id.as_str());
        buffer.extend_from_slice(&wallet.percentage.bps().to_be_bytes());
        put_str(&mut buffer, wallet.destination_kind.as_str());
    }

    buffer
}

fn put_len(buffer: &mut Vec<u8>, len: usize) {
    buffer.extend_from_slice(&(len as u64).to_be_bytes());
}

fn put_str(buffer: &mut Vec<u8>, s: &str) {
    put_len(buffer, s.len());
    buffer.extend_from_slice(s.as_bytes());
}
