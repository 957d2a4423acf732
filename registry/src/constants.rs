//! Protocol constants shipped with the library.

use psp_types::{Percentage, PspAmount, Timestamp, WalletId};

pub const PROTOCOL_NAME: &str = "Proof Of Service Protocol";

pub const PROTOCOL_VERSION: &str = "1.0.0";

/// Short protocol identifier, e.g. for log lines and summaries.
pub const PROTOCOL_TAG: &str = "PSP-1.0";

/// 2025-12-01 00:00:00 UTC
pub const CREATION_TIMESTAMP: Timestamp = Timestamp::new(1_764_547_200);

pub const GENESIS_BLOCK_NUMBER: u64 = 0;

/// Tokens created per verified service, regardless of the service's value.
pub const TOTAL_EMISSION: PspAmount = PspAmount::new(7_500);

/// Share Zeus and Olympus each receive, forever.
pub const IMMUTABLE_SHARE: Percentage = Percentage::ONE;

pub const GENESIS_MESSAGE: &str = "SmartWork Always Leads To Greatness";

pub const FOUNDING_PRINCIPLE: &str = "Without verified physical work, there is no emission.";

pub const PRINCIPLES: [&str; 6] = [
    "Radical Trust",
    "Total Transparency",
    "Real Utility",
    "Shared Responsibility",
    "Progressive Inclusion",
    "Respect for Time and Effort",
];

/// Published percentages are the two-decimal rounding of each exact share,
/// so their total may miss 100.00% by up to half a basis point per wallet.
pub const PERCENTAGE_TOLERANCE_BPS: u32 = 4;

/// The shipped wallet table, in canonical order.
pub const SHIPPED_PERCENTAGES: [(WalletId, Percentage); 8] = [
    (WalletId::Athena, Percentage::from_bps(2_667)),
    (WalletId::Hermes, Percentage::from_bps(1_633)),
    (WalletId::Chronos, Percentage::from_bps(1_500)),
    (WalletId::Prometheus, Percentage::from_bps(1_333)),
    (WalletId::Apollo, Percentage::from_bps(1_333)),
    (WalletId::Gaia, Percentage::from_bps(1_333)),
    (WalletId::Zeus, IMMUTABLE_SHARE),
    (WalletId::Olympus, IMMUTABLE_SHARE),
];
