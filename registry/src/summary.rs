//! Read-only views over the registry for display and reporting.

use psp_types::{DestinationKind, Percentage, PspAmount, WalletCategory, WalletId};
use serde::Serialize;

/// Everything known about one wallet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WalletInfo {
    pub id: WalletId,
    pub name: &'static str,
    pub role: &'static str,
    pub display_role: &'static str,
    pub description: &'static str,
    pub percentage: Percentage,
    pub amount: PspAmount,
    pub destination_kind: DestinationKind,
    pub category: WalletCategory,
    pub mutable: bool,
}

/// Rules no governance process can change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EternalRules {
    pub zeus_share: Percentage,
    pub olympus_share: Percentage,
    pub total_emission_fixed: PspAmount,
    pub audited_from_genesis: bool,
    pub founding_principle: String,
}

/// Overview of the distribution configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegistrySummary {
    pub protocol: String,
    pub protocol_tag: &'static str,
    pub version: String,
    pub total_emission: PspAmount,
    pub wallet_count: usize,
    pub eternal_rules: EternalRules,
    pub wallets: Vec<WalletInfo>,
    pub user_destinations: Vec<WalletId>,
    pub property_destinations: Vec<WalletId>,
    pub system_destinations: Vec<WalletId>,
}
