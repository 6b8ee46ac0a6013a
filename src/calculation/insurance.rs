//! Employment insurance (EIS) contribution calculation.
//!
//! Employer and employee each pay the same EIS amount. Wages up to RM1,000
//! pay a flat RM1.90; every RM100 bracket (or part of one) above that adds
//! RM0.20, up to the RM4,000 ceiling.

use rust_decimal::Decimal;

use crate::config::{InsuranceRates, StatutoryRates};

use super::rounding::round_money;

/// Returns the EIS contribution for a monthly wage, using the built-in
/// Malaysian table. The same amount is paid by employer and employee.
///
/// # Examples
///
/// ```
/// use statutory_engine::calculation::insurance_contribution;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(insurance_contribution(Decimal::from(1050)), Decimal::from_str("2.10").unwrap());
/// ```
pub fn insurance_contribution(salary: Decimal) -> Decimal {
    insurance_contribution_with(salary, StatutoryRates::builtin().eis())
}

/// Returns the EIS contribution for a monthly wage using the given table.
pub fn insurance_contribution_with(salary: Decimal, rates: &InsuranceRates) -> Decimal {
    if salary <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let capped = salary.min(rates.ceiling);
    if capped <= rates.floor || rates.step <= Decimal::ZERO {
        return rates.base_contribution;
    }

    // A wage one sen over a bracket boundary already pays for the next bracket.
    let brackets_above_floor = ((capped - rates.floor) / rates.step).ceil();

    round_money(rates.base_contribution + rates.increment * brackets_above_floor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// EI-001: zero and negative wages contribute nothing
    #[test]
    fn test_zero_and_negative_salary_return_zero() {
        assert_eq!(insurance_contribution(Decimal::ZERO), Decimal::ZERO);
        assert_eq!(insurance_contribution(dec("-1")), Decimal::ZERO);
    }

    /// EI-002: flat rate up to the floor
    #[test]
    fn test_flat_rate_up_to_floor() {
        assert_eq!(insurance_contribution(dec("0.01")), dec("1.90"));
        assert_eq!(insurance_contribution(dec("500")), dec("1.90"));
        assert_eq!(insurance_contribution(dec("1000")), dec("1.90"));
    }

    /// EI-003: partial brackets round up
    #[test]
    fn test_partial_bracket_rounds_up() {
        assert_eq!(insurance_contribution(dec("1000.01")), dec("2.10"));
        assert_eq!(insurance_contribution(dec("1001")), dec("2.10"));
        assert_eq!(insurance_contribution(dec("1050")), dec("2.10"));
        assert_eq!(insurance_contribution(dec("1100")), dec("2.10"));
        assert_eq!(insurance_contribution(dec("1100.01")), dec("2.30"));
    }

    /// EI-004: published table rows
    #[test]
    fn test_published_table_rows() {
        assert_eq!(insurance_contribution(dec("2000")), dec("3.90"));
        assert_eq!(insurance_contribution(dec("3000")), dec("5.90"));
        assert_eq!(insurance_contribution(dec("3950")), dec("7.90"));
    }

    /// EI-005: wages above the ceiling pay the ceiling contribution
    #[test]
    fn test_ceiling_applies() {
        assert_eq!(insurance_contribution(dec("4000")), dec("7.90"));
        assert_eq!(
            insurance_contribution(dec("5000")),
            insurance_contribution(dec("4000"))
        );
        assert_eq!(insurance_contribution(dec("25000")), dec("7.90"));
    }

    #[test]
    fn test_monotonic_across_table() {
        let mut previous = Decimal::ZERO;
        let mut salary = Decimal::ZERO;
        while salary <= dec("4200") {
            let current = insurance_contribution(salary);
            assert!(current >= previous, "contribution at {}", salary);
            previous = current;
            salary += dec("7.5");
        }
    }

    #[test]
    fn test_custom_table() {
        let rates = InsuranceRates {
            ceiling: dec("5000"),
            increment: dec("0.25"),
            ..InsuranceRates::default()
        };

        assert_eq!(insurance_contribution_with(dec("1250"), &rates), dec("2.65"));
        assert_eq!(insurance_contribution_with(dec("6000"), &rates), dec("11.90"));
    }
}
