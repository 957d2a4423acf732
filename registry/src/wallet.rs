//! Wallet definitions, one row of the distribution table each.

use crate::constants::SHIPPED_PERCENTAGES;
use psp_types::{DestinationKind, Percentage, PspAmount, WalletId};
use serde::{Deserialize, Serialize};

/// A named destination with its fixed share of every emission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletDefinition {
    pub id: WalletId,
    pub percentage: Percentage,
    pub destination_kind: DestinationKind,
    /// False for Zeus and Olympus.
    pub mutable: bool,
}

impl WalletDefinition {
    /// A definition using the wallet's shipped destination kind and mutability.
    pub fn new(id: WalletId, percentage: Percentage) -> Self {
        Self {
            id,
            percentage,
            destination_kind: id.default_destination(),
            mutable: !id.is_immutable(),
        }
    }

    /// This wallet's share of `total`, rounded to the nearest milli-unit.
    pub fn allocation(&self, total: PspAmount) -> Option<PspAmount> {
        self.percentage.share_of(total)
    }

    /// The shipped eight-wallet table in canonical order.
    pub fn shipped_table() -> Vec<WalletDefinition> {
        SHIPPED_PERCENTAGES
            .iter()
            .map(|&(id, percentage)| Self::new(id, percentage))
            .collect()
    }
}
