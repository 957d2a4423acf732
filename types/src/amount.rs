//! Token and fiat amount types.
//!
//! Amounts are represented as fixed-point integers (u128) to avoid floating-point errors.
//! PSP is counted in milli-units (1 PSP = 1000 raw), USD in cents.

use crate::decimal::{format_fixed, parse_fixed};
use crate::error::PspError;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fractional digits carried by a PSP amount.
pub const PSP_DECIMALS: u32 = 3;

/// Fractional digits carried by a USD amount.
pub const USD_DECIMALS: u32 = 2;

/// PSP amount: the protocol token emitted for verified service.
///
/// Internally stored as milli-units (u128). Serializes as an exact decimal
/// string such as `"7.500"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PspAmount(u128);

impl PspAmount {
    pub const ZERO: Self = Self(0);

    pub const fn new(raw: u128) -> Self {
        Self(raw)
    }

    pub const fn raw(&self) -> u128 {
        self.0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Sum a sequence of amounts, returning `None` on overflow.
    pub fn checked_sum<I: IntoIterator<Item = Self>>(amounts: I) -> Option<Self> {
        amounts
            .into_iter()
            .try_fold(Self::ZERO, |acc, amount| acc.checked_add(amount))
    }

    /// The amount as a decimal string without unit, e.g. `"1.225"`.
    pub fn to_decimal_string(&self) -> String {
        format_fixed(self.0, PSP_DECIMALS)
    }
}

impl fmt::Display for PspAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} PSP", self.to_decimal_string())
    }
}

impl FromStr for PspAmount {
    type Err = PspError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_fixed(s, PSP_DECIMALS).map(Self)
    }
}

impl TryFrom<String> for PspAmount {
    type Error = PspError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PspAmount> for String {
    fn from(amount: PspAmount) -> Self {
        amount.to_decimal_string()
    }
}

/// USD value of a service, informational only.
///
/// Internally stored as cents (u128). Serializes as an exact decimal string
/// such as `"1000000.00"`. Deserializes from such a string or from an integer
/// count of whole dollars; floating-point numbers are rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "String")]
pub struct UsdAmount(u128);

impl UsdAmount {
    pub const ZERO: Self = Self(0);

    pub const fn from_cents(cents: u128) -> Self {
        Self(cents)
    }

    pub const fn from_dollars(dollars: u128) -> Self {
        Self(dollars * 100)
    }

    pub const fn cents(&self) -> u128 {
        self.0
    }

    pub fn to_decimal_string(&self) -> String {
        format_fixed(self.0, USD_DECIMALS)
    }
}

impl fmt::Display for UsdAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} USD", self.to_decimal_string())
    }
}

impl FromStr for UsdAmount {
    type Err = PspError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_fixed(s, USD_DECIMALS).map(Self)
    }
}

impl<'de> Deserialize<'de> for UsdAmount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct UsdAmountVisitor;

        impl<'de> Visitor<'de> for UsdAmountVisitor {
            type Value = UsdAmount;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a USD amount as a decimal string such as \"150.00\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<UsdAmount, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<UsdAmount, E> {
                Ok(UsdAmount::from_dollars(u128::from(v)))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<UsdAmount, E> {
                Err(E::custom(format!(
                    "USD amount {v} must be a decimal string such as \"{v}\" to stay exact"
                )))
            }
        }

        deserializer.deserialize_any(UsdAmountVisitor)
    }
}

impl From<UsdAmount> for String {
    fn from(amount: UsdAmount) -> Self {
        amount.to_decimal_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn psp_display_uses_three_decimals() {
        assert_eq!(PspAmount::new(7_500).to_string(), "7.500 PSP");
        assert_eq!(PspAmount::new(75).to_string(), "0.075 PSP");
        assert_eq!(PspAmount::new(2_000).to_string(), "2.000 PSP");
    }

    #[test]
    fn psp_parses_exact_decimals() {
        assert_eq!("1.225".parse::<PspAmount>().unwrap(), PspAmount::new(1_225));
        assert_eq!("7.5".parse::<PspAmount>().unwrap(), PspAmount::new(7_500));
        assert!("0.0751".parse::<PspAmount>().is_err());
    }

    #[test]
    fn psp_checked_sum_detects_overflow() {
        let total = PspAmount::checked_sum([PspAmount::new(1), PspAmount::new(2)]);
        assert_eq!(total, Some(PspAmount::new(3)));
        let overflow = PspAmount::checked_sum([PspAmount::new(u128::MAX), PspAmount::new(1)]);
        assert_eq!(overflow, None);
    }

    #[test]
    fn psp_serializes_as_decimal_string() {
        let json = serde_json::to_string(&PspAmount::new(1_125)).unwrap();
        assert_eq!(json, "\"1.125\"");
        let back: PspAmount = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PspAmount::new(1_125));
    }

    #[test]
    fn usd_deserializes_from_text_or_whole_dollars() {
        let text: UsdAmount = serde_json::from_str("\"0.01\"").unwrap();
        assert_eq!(text, UsdAmount::from_cents(1));
        let whole: UsdAmount = serde_json::from_str("150").unwrap();
        assert_eq!(whole, UsdAmount::from_dollars(150));
    }

    #[test]
    fn usd_float_is_rejected_with_guidance() {
        let err = serde_json::from_str::<UsdAmount>("0.01").unwrap_err();
        assert!(err.to_string().contains("must be a decimal string"), "{err}");
        let negative = serde_json::from_str::<UsdAmount>("-5").unwrap_err();
        assert!(negative.to_string().contains("decimal string"), "{negative}");
    }

    #[test]
    fn usd_parses_cents() {
        assert_eq!("0.01".parse::<UsdAmount>().unwrap(), UsdAmount::from_cents(1));
        assert_eq!(
            "1000000".parse::<UsdAmount>().unwrap(),
            UsdAmount::from_dollars(1_000_000)
        );
        assert_eq!(UsdAmount::from_cents(12_345).to_string(), "123.45 USD");
    }
}
