//! Validated, read-only protocol constants.

use crate::constants::{IMMUTABLE_SHARE, PERCENTAGE_TOLERANCE_BPS, PROTOCOL_TAG};
use crate::error::RegistryError;
use crate::payload::GenesisPayload;
use crate::summary::{EternalRules, RegistrySummary, WalletInfo};
use crate::wallet::WalletDefinition;
use psp_types::{PspAmount, WalletCategory, WalletId, BPS_WHOLE};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

static SHIPPED: OnceLock<Result<ConstantRegistry, RegistryError>> = OnceLock::new();

/// Validated protocol constants.
///
/// A registry can only be obtained through [`ConstantRegistry::new`] (or the
/// shipped instance), so holding one proves the eternal rules hold and the
/// wallet table conserves the emission exactly.
#[derive(Clone, Debug)]
pub struct ConstantRegistry {
    payload: GenesisPayload,
    /// Published per-wallet amounts, computed once at construction.
    allocations: BTreeMap<WalletId, PspAmount>,
}

impl ConstantRegistry {
    /// Validate `payload` and wrap it.
    ///
    /// Fails with [`RegistryError::ImmutableRuleViolation`] if Zeus or Olympus
    /// deviate from their fixed rules, and with
    /// [`RegistryError::ConfigurationInvariant`] if the table is malformed or
    /// does not split the emission exactly.
    pub fn new(payload: GenesisPayload) -> Result<Self, RegistryError> {
        match validate(&payload) {
            Ok(allocations) => {
                tracing::debug!(
                    protocol = payload.protocol_name(),
                    version = payload.version(),
                    wallets = payload.wallets().len(),
                    "constant registry validated"
                );
                Ok(Self {
                    payload,
                    allocations,
                })
            }
            Err(e) => {
                tracing::error!(error = %e, "constant registry rejected");
                Err(e)
            }
        }
    }

    /// Build a registry from a wallet table, keeping every other shipped constant.
    pub fn from_wallets(wallets: Vec<WalletDefinition>) -> Result<Self, RegistryError> {
        let shipped = GenesisPayload::shipped();
        Self::new(GenesisPayload::new(
            shipped.protocol_name(),
            shipped.version(),
            shipped.creation_timestamp(),
            wallets,
        ))
    }

    /// The process-wide registry shipped with this library.
    ///
    /// Built on first use and never mutated afterwards.
    pub fn shipped() -> Result<&'static ConstantRegistry, RegistryError> {
        SHIPPED
            .get_or_init(|| Self::new(GenesisPayload::shipped()))
            .as_ref()
            .map_err(Clone::clone)
    }

    pub fn payload(&self) -> &GenesisPayload {
        &self.payload
    }

    /// Wallet definitions in canonical order.
    pub fn wallets(&self) -> &[WalletDefinition] {
        self.payload.wallets()
    }

    pub fn wallet(&self, id: WalletId) -> Option<&WalletDefinition> {
        self.wallets().iter().find(|w| w.id == id)
    }

    pub fn wallet_by_role(&self, role: &str) -> Option<&WalletDefinition> {
        WalletId::from_role(role).and_then(|id| self.wallet(id))
    }

    pub fn wallets_in(&self, category: WalletCategory) -> impl Iterator<Item = &WalletDefinition> {
        self.wallets()
            .iter()
            .filter(move |w| w.id.category() == category)
    }

    pub fn total_emission(&self) -> PspAmount {
        self.payload.total_emission()
    }

    /// The published amount for a wallet.
    pub fn allocation(&self, id: WalletId) -> Option<PspAmount> {
        self.allocations.get(&id).copied()
    }

    pub fn wallet_info(&self, id: WalletId) -> Option<WalletInfo> {
        let wallet = self.wallet(id)?;
        let amount = self.allocation(id)?;
        Some(WalletInfo {
            id,
            name: id.name(),
            role: id.role(),
            display_role: id.display_role(),
            description: id.description(),
            percentage: wallet.percentage,
            amount,
            destination_kind: wallet.destination_kind,
            category: id.category(),
            mutable: wallet.mutable,
        })
    }

    /// Info for every wallet, in canonical order.
    pub fn all_wallets(&self) -> Vec<WalletInfo> {
        self.wallets()
            .iter()
            .filter_map(|w| self.wallet_info(w.id))
            .collect()
    }

    pub fn summary(&self) -> RegistrySummary {
        let ids_in = |category: WalletCategory| -> Vec<WalletId> {
            self.wallets_in(category).map(|w| w.id).collect()
        };
        RegistrySummary {
            protocol: self.payload.protocol_name().to_string(),
            protocol_tag: PROTOCOL_TAG,
            version: self.payload.version().to_string(),
            total_emission: self.total_emission(),
            wallet_count: self.wallets().len(),
            eternal_rules: EternalRules {
                zeus_share: IMMUTABLE_SHARE,
                olympus_share: IMMUTABLE_SHARE,
                total_emission_fixed: self.total_emission(),
                audited_from_genesis: true,
                founding_principle: self.payload.founding_principle().to_string(),
            },
            wallets: self.all_wallets(),
            user_destinations: ids_in(WalletCategory::User),
            property_destinations: ids_in(WalletCategory::Property),
            system_destinations: ids_in(WalletCategory::System),
        }
    }
}

/// Check every registry rule, returning the per-wallet allocations.
///
/// Immutable rules are checked first so that tampering with Zeus or Olympus
/// is always reported as such, even when it also breaks the totals.
fn validate(payload: &GenesisPayload) -> Result<BTreeMap<WalletId, PspAmount>, RegistryError> {
    let wallets = payload.wallets();

    for wallet in wallets {
        check_wallet_rules(wallet)?;
    }

    if wallets.len() != WalletId::ALL.len() {
        return Err(RegistryError::invariant(format!(
            "expected {} wallets, found {}",
            WalletId::ALL.len(),
            wallets.len()
        )));
    }

    let mut seen = BTreeSet::new();
    for wallet in wallets {
        if !seen.insert(wallet.id) {
            return Err(RegistryError::invariant(format!(
                "wallet {} is listed more than once",
                wallet.id.as_str()
            )));
        }
    }

    let percentage_total: u32 = wallets
        .iter()
        .try_fold(0u32, |acc, w| acc.checked_add(w.percentage.bps()))
        .ok_or_else(|| RegistryError::invariant("percentage total overflows"))?;
    if percentage_total.abs_diff(BPS_WHOLE) > PERCENTAGE_TOLERANCE_BPS {
        return Err(RegistryError::invariant(format!(
            "percentages sum to {percentage_total} bps, expected {BPS_WHOLE}"
        )));
    }

    let total = payload.total_emission();
    let mut allocations = BTreeMap::new();
    for wallet in wallets {
        let amount = wallet.allocation(total).ok_or_else(|| {
            RegistryError::invariant(format!("allocation for {} overflows", wallet.id.as_str()))
        })?;
        allocations.insert(wallet.id, amount);
    }

    let allocated = PspAmount::checked_sum(allocations.values().copied())
        .ok_or_else(|| RegistryError::invariant("allocation total overflows"))?;
    if allocated != total {
        return Err(RegistryError::invariant(format!(
            "allocations sum to {allocated}, expected {total}"
        )));
    }

    Ok(allocations)
}

fn check_wallet_rules(wallet: &WalletDefinition) -> Result<(), RegistryError> {
    let violation = |reason: String| RegistryError::ImmutableRuleViolation {
        wallet: wallet.id,
        reason,
    };

    if wallet.id.is_immutable() {
        if wallet.percentage != IMMUTABLE_SHARE {
            return Err(violation(format!(
                "share is fixed at {IMMUTABLE_SHARE}, found {}",
                wallet.percentage
            )));
        }
        if wallet.mutable {
            return Err(violation("wallet cannot be marked mutable".to_string()));
        }
        if wallet.destination_kind != wallet.id.default_destination() {
            return Err(violation(format!(
                "destination is fixed at {}, found {}",
                wallet.id.default_destination(),
                wallet.destination_kind
            )));
        }
    } else if wallet.destination_kind.is_immutable() {
        return Err(violation(format!(
            "{} is reserved for Zeus and Olympus",
            wallet.destination_kind
        )));
    } else if wallet.destination_kind != wallet.id.default_destination() {
        // Destinations are fixed per wallet; only shares may be rebalanced.
        return Err(RegistryError::invariant(format!(
            "{} routes to {}, found {}",
            wallet.id.as_str(),
            wallet.id.default_destination(),
            wallet.destination_kind
        )));
    }

    Ok(())
}
