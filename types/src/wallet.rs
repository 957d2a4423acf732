//! The eight Greek wallets and where their shares are routed.

use crate::error::PspError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identity of one of the eight distribution wallets.
///
/// Declaration order is the canonical registry order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletId {
    Athena,
    Hermes,
    Chronos,
    Prometheus,
    Apollo,
    Gaia,
    Zeus,
    Olympus,
}

impl WalletId {
    pub const ALL: [WalletId; 8] = [
        Self::Athena,
        Self::Hermes,
        Self::Chronos,
        Self::Prometheus,
        Self::Apollo,
        Self::Gaia,
        Self::Zeus,
        Self::Olympus,
    ];

    /// Lowercase tag used in canonical encodings and config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Athena => "athena",
            Self::Hermes => "hermes",
            Self::Chronos => "chronos",
            Self::Prometheus => "prometheus",
            Self::Apollo => "apollo",
            Self::Gaia => "gaia",
            Self::Zeus => "zeus",
            Self::Olympus => "olympus",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Athena => "Athena",
            Self::Hermes => "Hermes",
            Self::Chronos => "Chronos",
            Self::Prometheus => "Prometheus",
            Self::Apollo => "Apollo",
            Self::Gaia => "Gaia",
            Self::Zeus => "Zeus",
            Self::Olympus => "Olympus",
        }
    }

    /// Short role tag, e.g. `"foundation"` or `"worker"`.
    pub fn role(&self) -> &'static str {
        match self {
            Self::Athena => "foundation",
            Self::Hermes => "platform",
            Self::Chronos => "development",
            Self::Prometheus => "worker",
            Self::Apollo => "client",
            Self::Gaia => "property",
            Self::Zeus => "dao",
            Self::Olympus => "legal",
        }
    }

    pub fn display_role(&self) -> &'static str {
        match self {
            Self::Athena => "PSP Foundation",
            Self::Hermes => "Platform Operations",
            Self::Chronos => "Development Team",
            Self::Prometheus => "Worker/Technician",
            Self::Apollo => "Client",
            Self::Gaia => "Property NFT",
            Self::Zeus => "DAO/Protocol",
            Self::Olympus => "Legal Operations",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Athena => "Proof Of Service Protocol Foundation - operational expenses",
            Self::Hermes => "Platform operations and services",
            Self::Chronos => "Development team rewards",
            Self::Prometheus => "Worker rewards for completed services",
            Self::Apollo => "Client rewards for confirmed services",
            Self::Gaia => "Property record rewards; the balance belongs to the property and moves with ownership",
            Self::Zeus => "Protocol DAO governance reserve - immutable 1%",
            Self::Olympus => "Community legal operations - immutable 1%",
        }
    }

    /// Where this wallet's share goes in the shipped protocol.
    pub fn default_destination(&self) -> DestinationKind {
        match self {
            Self::Athena => DestinationKind::ProtocolTreasury,
            Self::Hermes => DestinationKind::OperationalAccount,
            Self::Chronos => DestinationKind::DevelopmentAccount,
            Self::Prometheus => DestinationKind::WorkerAccount,
            Self::Apollo => DestinationKind::ClientAccount,
            Self::Gaia => DestinationKind::PropertyRecord,
            Self::Zeus => DestinationKind::ImmutableDaoAccount,
            Self::Olympus => DestinationKind::ImmutableLegalAccount,
        }
    }

    pub fn category(&self) -> WalletCategory {
        match self {
            Self::Prometheus | Self::Apollo => WalletCategory::User,
            Self::Gaia => WalletCategory::Property,
            Self::Athena | Self::Hermes | Self::Chronos | Self::Zeus | Self::Olympus => {
                WalletCategory::System
            }
        }
    }

    /// Zeus and Olympus: fixed at 1% forever.
    pub fn is_immutable(&self) -> bool {
        matches!(self, Self::Zeus | Self::Olympus)
    }

    /// Look up a wallet by its role tag.
    pub fn from_role(role: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.role() == role)
    }
}

impl fmt::Display for WalletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WalletId {
    type Err = PspError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == lower)
            .ok_or_else(|| PspError::UnknownWallet(s.to_string()))
    }
}

/// The kind of target an allocation is routed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationKind {
    ProtocolTreasury,
    OperationalAccount,
    DevelopmentAccount,
    WorkerAccount,
    ClientAccount,
    /// An asset's cumulative history rather than a user account.
    PropertyRecord,
    ImmutableDaoAccount,
    ImmutableLegalAccount,
}

impl DestinationKind {
    pub const ALL: [DestinationKind; 8] = [
        Self::ProtocolTreasury,
        Self::OperationalAccount,
        Self::DevelopmentAccount,
        Self::WorkerAccount,
        Self::ClientAccount,
        Self::PropertyRecord,
        Self::ImmutableDaoAccount,
        Self::ImmutableLegalAccount,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProtocolTreasury => "protocol_treasury",
            Self::OperationalAccount => "operational_account",
            Self::DevelopmentAccount => "development_account",
            Self::WorkerAccount => "worker_account",
            Self::ClientAccount => "client_account",
            Self::PropertyRecord => "property_record",
            Self::ImmutableDaoAccount => "immutable_dao_account",
            Self::ImmutableLegalAccount => "immutable_legal_account",
        }
    }

    pub fn is_immutable(&self) -> bool {
        matches!(self, Self::ImmutableDaoAccount | Self::ImmutableLegalAccount)
    }
}

impl fmt::Display for DestinationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DestinationKind {
    type Err = PspError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lower)
            .ok_or_else(|| PspError::UnknownDestinationKind(s.to_string()))
    }
}

/// Coarse grouping of wallets by who ultimately holds the share.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletCategory {
    /// Paid to a participant of the service (worker or client).
    User,
    /// Accumulated on the property where the service happened.
    Property,
    /// Protocol-level accounts.
    System,
}
