//! Social security (SOCSO) contribution calculation.
//!
//! SOCSO contributions come from a published table of wage brackets. Wages
//! up to RM300 are looked up from seven explicit rows. Above that the table
//! runs in RM100 brackets up to the RM5,000 ceiling, and rather than carry
//! all 47 of those rows, they are rebuilt by stepping up from the last fixed
//! row: the employee share rises by RM0.50 per bracket and the employer
//! share alternates between RM1.80 (odd bracket index) and RM1.70 (even).

use rust_decimal::Decimal;

use crate::config::{SocialSecurityRates, StatutoryRates};
use crate::models::ContributionPair;

use super::rounding::round_money;

/// Returns the SOCSO contribution pair for a monthly wage, using the
/// built-in Malaysian table.
///
/// Wages of zero or less contribute nothing. Wages above the ceiling
/// contribute as if they were exactly at the ceiling.
///
/// # Examples
///
/// ```
/// use statutory_engine::calculation::social_security_contribution;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let pair = social_security_contribution(Decimal::from(400));
/// assert_eq!(pair.employer, Decimal::from_str("6.15").unwrap());
/// assert_eq!(pair.employee, Decimal::from_str("1.75").unwrap());
/// ```
pub fn social_security_contribution(salary: Decimal) -> ContributionPair {
    social_security_contribution_with(salary, StatutoryRates::builtin().socso())
}

/// Returns the SOCSO contribution pair for a monthly wage using the given table.
///
/// The table is assumed to have passed [`StatutoryRates::validate`], which
/// [`ConfigLoader::load`](crate::config::ConfigLoader::load) always runs. A
/// table without any fixed brackets yields a zero contribution.
pub fn social_security_contribution_with(
    salary: Decimal,
    rates: &SocialSecurityRates,
) -> ContributionPair {
    if salary <= Decimal::ZERO {
        return ContributionPair::zero();
    }

    let capped = salary.min(rates.ceiling);

    // Brackets are ascending; the first one the wage does not exceed applies.
    if let Some(bracket) = rates.brackets.iter().find(|b| capped <= b.up_to) {
        return ContributionPair::new(bracket.employer, bracket.employee);
    }

    let Some(last) = rates.brackets.last() else {
        return ContributionPair::zero();
    };

    let mut employer = last.employer;
    let mut employee = last.employee;
    let mut bracket_floor = last.up_to;

    if rates.step > Decimal::ZERO {
        while bracket_floor < capped && bracket_floor < rates.ceiling {
            employee += rates.employee_increment;
            employer += if is_odd_bracket(bracket_floor, rates.step) {
                rates.employer_increment_odd
            } else {
                rates.employer_increment_even
            };
            bracket_floor += rates.step;
        }
    }

    ContributionPair::new(round_money(employer), round_money(employee))
}

/// Whether the bracket starting at `floor` has an odd index (`floor / step`).
fn is_odd_bracket(floor: Decimal, step: Decimal) -> bool {
    (floor / step).trunc() % Decimal::TWO == Decimal::ONE
}
