//! Distribution records returned to the caller.

use crate::event::Confirmations;
use psp_types::{DestinationKind, Percentage, PspAmount, UsdAmount, WalletId};
use serde::Serialize;
use std::collections::BTreeMap;

/// One wallet's share of an emission and where it goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Allocation {
    pub amount: PspAmount,
    pub percentage: Percentage,
    pub destination_kind: DestinationKind,
    /// Worker, client or property the share is routed to, when the
    /// destination is per-service rather than a protocol account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_id: Option<u64>,
}

/// The authoritative record of one service's emission.
///
/// Contains no timestamps or other ambient data: the same event and
/// confirmations always produce an identical record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DistributionResult {
    pub certificate_id: Option<u64>,
    pub dapp_origin: String,
    pub service_value_usd: UsdAmount,
    pub total_psp: PspAmount,
    pub allocations: BTreeMap<WalletId, Allocation>,
    /// True only if every confirmation holds and the allocations sum to
    /// `total_psp`. Downstream systems must not honour an unverified result.
    pub verified: bool,
    pub confirmations: Confirmations,
}

impl DistributionResult {
    /// The amount allocated to `id`, zero if the wallet is absent.
    pub fn amount_for(&self, id: WalletId) -> PspAmount {
        self.allocations
            .get(&id)
            .map(|a| a.amount)
            .unwrap_or(PspAmount::ZERO)
    }

    /// Sum of all allocations, `None` on overflow.
    pub fn allocated_total(&self) -> Option<PspAmount> {
        PspAmount::checked_sum(self.allocations.values().map(|a| a.amount))
    }

    /// The share that belongs to a property record rather than a user.
    ///
    /// Hand this to the property ledger: the balance accumulates on the
    /// property and follows it when ownership changes.
    pub fn property_routing(&self) -> Option<PropertyRouting> {
        self.allocations
            .values()
            .find(|a| a.destination_kind == DestinationKind::PropertyRecord)
            .map(|a| PropertyRouting {
                property_id: a.destination_id,
                certificate_id: self.certificate_id,
                amount: a.amount,
            })
    }
}

/// Instruction for the external property ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PropertyRouting {
    pub property_id: Option<u64>,
    pub certificate_id: Option<u64>,
    pub amount: PspAmount,
}

/// One row of the plain 7.500 split, independent of any service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClassicEmission {
    pub wallet: WalletId,
    pub name: &'static str,
    pub role: &'static str,
    pub amount: PspAmount,
    pub percentage: Percentage,
    pub destination_kind: DestinationKind,
}

/// The standard split of one emission across every wallet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClassicDistribution {
    pub emissions: Vec<ClassicEmission>,
    pub total_psp: PspAmount,
}
