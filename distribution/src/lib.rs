//! Distribution Engine for the fixed 7.500 PSP emission of one verified service.
//!
//! Every confirmed service emits the same amount, split across the eight
//! Greek wallets by the registry's percentages:
//! `share_i = round_half_up(7_500 × bps_i / 10_000)` milli-PSP.
//!
//! This crate handles:
//! - Computing the split and refusing any table that leaves a residue
//! - Routing per-service shares to the worker, client and property
//! - Flagging results whose confirmations are incomplete

pub mod engine;
pub mod error;
pub mod event;
pub mod result;

pub use engine::{allocate, distribute_for_service, DistributionEngine};
pub use error::DistributionError;
pub use event::{Confirmations, ServiceEvent, DEFAULT_DAPP_ORIGIN};
pub use result::{
    Allocation, ClassicDistribution, ClassicEmission, DistributionResult, PropertyRouting,
};
