//! Core distribution engine.

use crate::error::DistributionError;
use crate::event::{Confirmations, ServiceEvent};
use crate::result::{Allocation, ClassicDistribution, ClassicEmission, DistributionResult};
use psp_registry::{ConstantRegistry, WalletDefinition};
use psp_types::{DestinationKind, PspAmount};
use std::collections::BTreeMap;

/// Split `total` across `wallets` and require the shares to sum exactly.
///
/// `share_i = round_half_up(total × bps_i / 10_000)`, all integer math in
/// milli-PSP. A residue of even one milli-unit is a configuration failure.
pub fn allocate(
    wallets: &[WalletDefinition],
    total: PspAmount,
) -> Result<Vec<(WalletDefinition, PspAmount)>, DistributionError> {
    let mut table = Vec::with_capacity(wallets.len());
    let mut sum = PspAmount::ZERO;
    for wallet in wallets {
        let share = wallet.allocation(total).ok_or(DistributionError::Overflow)?;
        sum = sum.checked_add(share).ok_or(DistributionError::Overflow)?;
        table.push((*wallet, share));
    }

    if sum != total {
        tracing::error!(
            expected = %total,
            actual = %sum,
            "allocation residue: refusing to emit"
        );
        return Err(DistributionError::ConfigurationInvariant {
            expected: total,
            actual: sum,
        });
    }
    Ok(table)
}

/// The per-service destination for wallets that route to a participant.
fn destination_id(kind: DestinationKind, event: &ServiceEvent) -> Option<u64> {
    match kind {
        DestinationKind::WorkerAccount => Some(event.worker_id),
        DestinationKind::ClientAccount => Some(event.client_id),
        DestinationKind::PropertyRecord => event.property_id,
        _ => None,
    }
}

/// The distribution engine: turns a confirmed service into a
/// [`DistributionResult`] over a validated registry.
///
/// Holds no state of its own. Every call is a pure function of the registry
/// and its arguments, so one engine may be shared freely across threads.
#[derive(Clone, Copy, Debug)]
pub struct DistributionEngine<'r> {
    registry: &'r ConstantRegistry,
}

impl<'r> DistributionEngine<'r> {
    pub fn new(registry: &'r ConstantRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r ConstantRegistry {
        self.registry
    }

    /// Every wallet paired with its share of one emission.
    pub fn allocation_table(&self) -> Result<Vec<(WalletDefinition, PspAmount)>, DistributionError> {
        allocate(self.registry.wallets(), self.registry.total_emission())
    }

    /// Distribute one emission for a completed service.
    ///
    /// The emission is always 7.500 PSP regardless of `service_value_usd`.
    /// Missing confirmations do not stop the computation; they clear the
    /// `verified` flag, and the caller must not honour such a result.
    pub fn distribute_for_service(
        &self,
        event: &ServiceEvent,
        confirmations: Confirmations,
    ) -> Result<DistributionResult, DistributionError> {
        let total = self.registry.total_emission();
        let table = self.allocation_table()?;

        let allocations: BTreeMap<_, _> = table
            .into_iter()
            .map(|(wallet, amount)| {
                let allocation = Allocation {
                    amount,
                    percentage: wallet.percentage,
                    destination_kind: wallet.destination_kind,
                    destination_id: destination_id(wallet.destination_kind, event),
                };
                (wallet.id, allocation)
            })
            .collect();

        let allocated = PspAmount::checked_sum(allocations.values().map(|a| a.amount))
            .ok_or(DistributionError::Overflow)?;
        let verified = confirmations.is_complete() && allocated == total;

        if verified {
            tracing::debug!(
                worker = event.worker_id,
                client = event.client_id,
                dapp = %event.dapp_origin,
                total = %total,
                "service distributed"
            );
        } else {
            tracing::warn!(
                worker = event.worker_id,
                client = event.client_id,
                missing = ?confirmations.missing(),
                "distribution computed without full confirmation: not verified"
            );
        }

        Ok(DistributionResult {
            certificate_id: event.certificate_id,
            dapp_origin: event.dapp_origin.clone(),
            service_value_usd: event.service_value_usd,
            total_psp: total,
            allocations,
            verified,
            confirmations,
        })
    }

    /// The plain split of one emission, in registry order.
    pub fn classic_distribution(&self) -> Result<ClassicDistribution, DistributionError> {
        let emissions = self
            .allocation_table()?
            .into_iter()
            .map(|(wallet, amount)| ClassicEmission {
                wallet: wallet.id,
                name: wallet.id.name(),
                role: wallet.id.role(),
                amount,
                percentage: wallet.percentage,
                destination_kind: wallet.destination_kind,
            })
            .collect();
        Ok(ClassicDistribution {
            emissions,
            total_psp: self.registry.total_emission(),
        })
    }
}

impl DistributionEngine<'static> {
    /// An engine over the process-wide shipped registry.
    pub fn shipped() -> Result<Self, DistributionError> {
        Ok(Self::new(ConstantRegistry::shipped()?))
    }
}

/// Distribute against the shipped registry.
pub fn distribute_for_service(
    event: &ServiceEvent,
    confirmations: Confirmations,
) -> Result<DistributionResult, DistributionError> {
    DistributionEngine::shipped()?.distribute_for_service(event, confirmations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use psp_types::{Percentage, UsdAmount, WalletId};

    fn engine() -> DistributionEngine<'static> {
        DistributionEngine::shipped().unwrap()
    }

    fn psp(raw: u128) -> PspAmount {
        PspAmount::new(raw)
    }

    #[test]
    fn fully_confirmed_service() {
        let event = ServiceEvent::new(1001, 2002)
            .with_property(3003)
            .with_certificate(4004)
            .with_service_value(UsdAmount::from_dollars(150));
        let result = engine()
            .distribute_for_service(&event, Confirmations::all())
            .unwrap();

        assert!(result.verified);
        assert_eq!(result.total_psp, psp(7_500));
        assert_eq!(result.amount_for(WalletId::Athena), psp(2_000));
        assert_eq!(result.amount_for(WalletId::Hermes), psp(1_225));
        assert_eq!(result.amount_for(WalletId::Chronos), psp(1_125));
        assert_eq!(result.amount_for(WalletId::Prometheus), psp(1_000));
        assert_eq!(result.amount_for(WalletId::Apollo), psp(1_000));
        assert_eq!(result.amount_for(WalletId::Gaia), psp(1_000));
        assert_eq!(result.amount_for(WalletId::Zeus), psp(75));
        assert_eq!(result.amount_for(WalletId::Olympus), psp(75));
        assert_eq!(result.allocated_total(), Some(psp(7_500)));

        assert_eq!(result.allocations[&WalletId::Prometheus].destination_id, Some(1001));
        assert_eq!(result.allocations[&WalletId::Apollo].destination_id, Some(2002));
        assert_eq!(result.allocations[&WalletId::Gaia].destination_id, Some(3003));
        assert_eq!(result.allocations[&WalletId::Zeus].destination_id, None);
        assert_eq!(result.certificate_id, Some(4004));
        assert_eq!(result.service_value_usd, UsdAmount::from_dollars(150));
    }

    #[test]
    fn service_value_does_not_scale_emission() {
        let small = ServiceEvent::new(1, 2).with_service_value(UsdAmount::from_cents(1));
        let large = ServiceEvent::new(1, 2).with_service_value(UsdAmount::from_dollars(1_000_000));
        let a = engine().distribute_for_service(&small, Confirmations::all()).unwrap();
        let b = engine().distribute_for_service(&large, Confirmations::all()).unwrap();
        assert_eq!(a.allocations, b.allocations);
        assert_eq!(a.total_psp, b.total_psp);
    }

    #[test]
    fn unconfirmed_service_is_not_verified() {
        let event = ServiceEvent::new(1, 2);
        let confirmations = Confirmations {
            bilaterally_confirmed: false,
            ..Confirmations::all()
        };
        let result = engine().distribute_for_service(&event, confirmations).unwrap();
        assert!(!result.verified);
        assert_eq!(result.allocated_total(), Some(psp(7_500)));
        assert_eq!(result.confirmations, confirmations);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let event = ServiceEvent::new(5, 6).with_property(7).with_dapp_origin("handyplan");
        let first = engine().distribute_for_service(&event, Confirmations::all()).unwrap();
        for _ in 0..20 {
            assert_eq!(
                engine().distribute_for_service(&event, Confirmations::all()).unwrap(),
                first
            );
        }
    }

    #[test]
    fn free_function_uses_shipped_registry() {
        let event = ServiceEvent::new(1, 2);
        assert_eq!(
            distribute_for_service(&event, Confirmations::all()).unwrap(),
            engine().distribute_for_service(&event, Confirmations::all()).unwrap()
        );
    }

    #[test]
    fn property_routing_follows_gaia() {
        let event = ServiceEvent::new(1, 2).with_property(99).with_certificate(12);
        let result = engine().distribute_for_service(&event, Confirmations::all()).unwrap();
        let routing = result.property_routing().unwrap();
        assert_eq!(routing.property_id, Some(99));
        assert_eq!(routing.certificate_id, Some(12));
        assert_eq!(routing.amount, psp(1_000));

        let no_property = engine()
            .distribute_for_service(&ServiceEvent::new(1, 2), Confirmations::all())
            .unwrap();
        assert_eq!(no_property.property_routing().unwrap().property_id, None);
    }

    #[test]
    fn classic_split_matches_table() {
        let classic = engine().classic_distribution().unwrap();
        assert_eq!(classic.emissions.len(), 8);
        assert_eq!(classic.total_psp, psp(7_500));
        let athena = &classic.emissions[0];
        assert_eq!(athena.wallet, WalletId::Athena);
        assert_eq!(athena.amount, psp(2_000));
        assert_eq!(athena.percentage, Percentage::from_bps(2_667));
        let sum = PspAmount::checked_sum(classic.emissions.iter().map(|e| e.amount));
        assert_eq!(sum, Some(psp(7_500)));
    }

    #[test]
    fn residue_is_rejected() {
        let mut table = WalletDefinition::shipped_table();
        table[2].percentage = Percentage::from_bps(1_502);
        table[5].percentage = Percentage::from_bps(1_332);
        let err = allocate(&table, psp(7_500)).unwrap_err();
        assert!(matches!(
            err,
            DistributionError::ConfigurationInvariant { expected, actual }
                if expected == psp(7_500) && actual == psp(7_501)
        ));
    }

    #[test]
    fn shipped_table_allocates_exactly() {
        let table = engine().allocation_table().unwrap();
        let sum = PspAmount::checked_sum(table.iter().map(|(_, amount)| *amount));
        assert_eq!(sum, Some(psp(7_500)));
    }

    #[test]
    fn result_serializes_amounts_as_text() {
        let event = ServiceEvent::new(1, 2).with_property(3);
        let result = engine().distribute_for_service(&event, Confirmations::all()).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["total_psp"], "7.500");
        assert_eq!(json["allocations"]["athena"]["amount"], "2.000");
        assert_eq!(json["allocations"]["gaia"]["destination_id"], 3);
        assert!(json["allocations"]["zeus"].get("destination_id").is_none());
        assert_eq!(json["verified"], true);
    }
}
