//! Exact decimal text <-> scaled integer conversion.
//!
//! Every fractional quantity in the protocol is an integer count of its
//! smallest unit. These helpers are the only place decimal text is read or
//! written, so no value ever passes through binary floating point.

use crate::error::PspError;

/// Parse `input` as a non-negative decimal with at most `decimals` fractional
/// digits, returning the value scaled by `10^decimals`.
pub(crate) fn parse_fixed(input: &str, decimals: u32) -> Result<u128, PspError> {
    let invalid = |reason| PspError::InvalidDecimal {
        input: input.to_string(),
        reason,
    };

    let s = input.trim();
    if s.is_empty() {
        return Err(invalid("empty input"));
    }

    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => {
            if f.is_empty() {
                return Err(invalid("missing digits after decimal point"));
            }
            (i, f)
        }
        None => (s, ""),
    };

    if int_part.is_empty() {
        return Err(invalid("missing integer part"));
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit()) || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid("only ASCII digits and a single '.' are allowed"));
    }
    if frac_part.len() > decimals as usize {
        return Err(PspError::TooManyDecimals {
            input: input.to_string(),
            max: decimals,
        });
    }

    let scale = 10u128.pow(decimals);
    let int_value: u128 = int_part.parse().map_err(|_| PspError::Overflow)?;
    let frac_value: u128 = if frac_part.is_empty() {
        0
    } else {
        let digits: u128 = frac_part.parse().map_err(|_| PspError::Overflow)?;
        digits * 10u128.pow(decimals - frac_part.len() as u32)
    };

    int_value
        .checked_mul(scale)
        .and_then(|v| v.checked_add(frac_value))
        .ok_or(PspError::Overflow)
}

/// Render a scaled integer with exactly `decimals` fractional digits.
pub(crate) fn format_fixed(value: u128, decimals: u32) -> String {
    if decimals == 0 {
        return value.to_string();
    }
    let scale = 10u128.pow(decimals);
    format!(
        "{}.{:0width$}",
        value / scale,
        value % scale,
        width = decimals as usize
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_and_fraction() {
        assert_eq!(parse_fixed("26.67", 2).unwrap(), 2667);
        assert_eq!(parse_fixed("1", 2).unwrap(), 100);
        assert_eq!(parse_fixed("1.5", 2).unwrap(), 150);
        assert_eq!(parse_fixed("7.500", 3).unwrap(), 7500);
        assert_eq!(parse_fixed(" 0.01 ", 2).unwrap(), 1);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(parse_fixed("", 2), Err(PspError::InvalidDecimal { .. })));
        assert!(matches!(parse_fixed(".5", 2), Err(PspError::InvalidDecimal { .. })));
        assert!(matches!(parse_fixed("5.", 2), Err(PspError::InvalidDecimal { .. })));
        assert!(matches!(parse_fixed("-1", 2), Err(PspError::InvalidDecimal { .. })));
        assert!(matches!(parse_fixed("1.2.3", 2), Err(PspError::InvalidDecimal { .. })));
        assert!(matches!(parse_fixed("1e3", 2), Err(PspError::InvalidDecimal { .. })));
    }

    #[test]
    fn rejects_excess_precision() {
        assert_eq!(
            parse_fixed("13.333", 2),
            Err(PspError::TooManyDecimals {
                input: "13.333".into(),
                max: 2
            })
        );
    }

    #[test]
    fn overflow_is_reported() {
        let huge = "9".repeat(60);
        assert_eq!(parse_fixed(&huge, 2), Err(PspError::Overflow));
    }

    #[test]
    fn formats_with_fixed_width_fraction() {
        assert_eq!(format_fixed(7500, 3), "7.500");
        assert_eq!(format_fixed(75, 3), "0.075");
        assert_eq!(format_fixed(2667, 2), "26.67");
        assert_eq!(format_fixed(100, 2), "1.00");
        assert_eq!(format_fixed(42, 0), "42");
    }
}
