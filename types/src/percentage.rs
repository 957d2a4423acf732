//! Percentages with two decimal places, stored as basis points.

use crate::amount::PspAmount;
use crate::decimal::{format_fixed, parse_fixed};
use crate::error::PspError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Basis points in one percent.
pub const BPS_PER_PERCENT: u32 = 100;

/// Basis points in the whole (100.00%).
pub const BPS_WHOLE: u32 = 10_000;

/// A share of an emission, e.g. `26.67%` = 2667 basis points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Percentage(u32);

impl Percentage {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(BPS_PER_PERCENT);
    pub const ONE_HUNDRED: Self = Self(BPS_WHOLE);

    pub const fn from_bps(bps: u32) -> Self {
        Self(bps)
    }

    /// Whole percent, e.g. `from_percent(15)` = 15.00%.
    pub const fn from_percent(percent: u32) -> Self {
        Self(percent * BPS_PER_PERCENT)
    }

    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// This percentage of `total`, rounded half-up to the nearest raw unit.
    ///
    /// `round(total_raw × bps / 10_000)` in integer arithmetic. Returns `None`
    /// on overflow.
    pub fn share_of(&self, total: PspAmount) -> Option<PspAmount> {
        let whole = u128::from(BPS_WHOLE);
        total
            .raw()
            .checked_mul(u128::from(self.0))
            .and_then(|scaled| scaled.checked_add(whole / 2))
            .map(|scaled| PspAmount::new(scaled / whole))
    }

    pub fn to_decimal_string(&self) -> String {
        format_fixed(u128::from(self.0), 2)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.to_decimal_string())
    }
}

/// Accepts `"26.67"`, `"1"` and `"26.67%"`.
impl FromStr for Percentage {
    type Err = PspError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_suffix('%').unwrap_or(trimmed);
        let bps = parse_fixed(digits, 2)?;
        u32::try_from(bps).map(Self).map_err(|_| PspError::Overflow)
    }
}

impl TryFrom<String> for Percentage {
    type Error = PspError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Percentage> for String {
    fn from(p: Percentage) -> Self {
        p.to_decimal_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emission() -> PspAmount {
        PspAmount::new(7_500)
    }

    #[test]
    fn shipped_shares_round_to_published_amounts() {
        let share = |bps| Percentage::from_bps(bps).share_of(emission()).unwrap().raw();
        assert_eq!(share(2667), 2_000);
        assert_eq!(share(1633), 1_225);
        assert_eq!(share(1500), 1_125);
        assert_eq!(share(1333), 1_000);
        assert_eq!(share(100), 75);
    }

    #[test]
    fn ties_round_up() {
        // 2 bps of 7.500 = 1.5 milli
        let share = Percentage::from_bps(2).share_of(emission()).unwrap();
        assert_eq!(share.raw(), 2);
    }

    #[test]
    fn whole_is_the_total() {
        assert_eq!(Percentage::ONE_HUNDRED.share_of(emission()), Some(emission()));
        assert_eq!(Percentage::ZERO.share_of(emission()), Some(PspAmount::ZERO));
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("26.67".parse::<Percentage>().unwrap(), Percentage::from_bps(2667));
        assert_eq!("1%".parse::<Percentage>().unwrap(), Percentage::ONE);
        assert_eq!(Percentage::from_percent(15).to_string(), "15.00%");
        assert!("13.333".parse::<Percentage>().is_err());
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(
            Percentage::from_bps(2).share_of(PspAmount::new(u128::MAX)),
            None
        );
    }
}
