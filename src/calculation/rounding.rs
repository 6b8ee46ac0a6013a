//! Money rounding helpers.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to two decimal places, half-up.
///
/// Midpoints round away from zero by magnitude, so `-2.345` becomes `-2.35`
/// just as `2.345` becomes `2.35`.
///
/// # Examples
///
/// ```
/// use statutory_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("2.345").unwrap()), Decimal::from_str("2.35").unwrap());
/// assert_eq!(round_money(Decimal::from_str("-2.345").unwrap()), Decimal::from_str("-2.35").unwrap());
/// ```
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
