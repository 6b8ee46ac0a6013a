//! Currency display formatting.
//!
//! Formatting is presentational only; nothing here feeds back into a
//! calculation.

use rust_decimal::{Decimal, RoundingStrategy};

/// Symbol used for Malaysian Ringgit in the `en-MY` locale.
pub const CURRENCY_SYMBOL: &str = "RM";

/// Formats an amount as Malaysian Ringgit, e.g. `RM1,234.50`.
///
/// Amounts are shown with exactly two decimals (midpoints rounded away from
/// zero), comma thousands separators, and a leading minus sign for
/// negative amounts.
///
/// # Examples
///
/// ```
/// use statutory_engine::format::format_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_currency(Decimal::from_str("4417.35").unwrap()), "RM4,417.35");
/// assert_eq!(format_currency(Decimal::from_str("-1234.5").unwrap()), "-RM1,234.50");
/// ```
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    // Always two fractional digits, even for whole amounts
    let mut digits = rounded.abs();
    digits.rescale(2);
    let digits = digits.to_string();
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!(
        "{}{}{}.{}",
        sign,
        CURRENCY_SYMBOL,
        group_thousands(whole),
        fraction
    )
}

/// Inserts a comma between every group of three integer digits.
fn group_thousands(whole: &str) -> String {
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_formats_small_amounts() {
        assert_eq!(format_currency(dec("0")), "RM0.00");
        assert_eq!(format_currency(dec("1.9")), "RM1.90");
        assert_eq!(format_currency(dec("24.75")), "RM24.75");
        assert_eq!(format_currency(dec("999.99")), "RM999.99");
    }

    #[test]
    fn test_groups_thousands() {
        assert_eq!(format_currency(dec("1000")), "RM1,000.00");
        assert_eq!(format_currency(dec("123456.7")), "RM123,456.70");
        assert_eq!(format_currency(dec("1234567.891")), "RM1,234,567.89");
    }

    #[test]
    fn test_rounds_midpoint_away_from_zero() {
        assert_eq!(format_currency(dec("2.345")), "RM2.35");
        assert_eq!(format_currency(dec("-2.345")), "-RM2.35");
        assert_eq!(format_currency(dec("999.995")), "RM1,000.00");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_currency(dec("-89")), "-RM89.00");
        assert_eq!(format_currency(dec("-1234.5")), "-RM1,234.50");
    }

    #[test]
    fn test_negative_amount_rounding_to_zero_has_no_sign() {
        assert_eq!(format_currency(dec("-0.001")), "RM0.00");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("12345678"), "12,345,678");
    }
}
