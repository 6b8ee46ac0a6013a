//! Configuration types for statutory rate tables.
//!
//! This module contains the strongly-typed rate structures that are
//! deserialized from YAML configuration files. Every type also has a
//! built-in default carrying the current Malaysian tables, so calculations
//! never need to touch the filesystem.

use std::sync::LazyLock;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{StatutoryError, StatutoryResult};

/// Metadata about the jurisdiction a rate set applies to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JurisdictionMetadata {
    /// Short jurisdiction code (e.g., "MY").
    pub code: String,
    /// The human-readable name of the rate set.
    pub name: String,
    /// ISO 4217 currency code used for amounts.
    pub currency: String,
    /// Locale used when formatting amounts for display.
    pub locale: String,
    /// The date from which these rates apply.
    pub effective_date: NaiveDate,
    /// URL to the official source of the tables.
    pub source_url: String,
}

impl Default for JurisdictionMetadata {
    fn default() -> Self {
        Self {
            code: "MY".to_string(),
            name: "Malaysia Statutory Contributions".to_string(),
            currency: "MYR".to_string(),
            locale: "en-MY".to_string(),
            effective_date: NaiveDate::from_ymd_opt(2024, 10, 1).unwrap_or_default(),
            source_url: "https://www.perkeso.gov.my/en/rate-of-contributions.html".to_string(),
        }
    }
}

/// Retirement fund (EPF) contribution rates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RetirementFundRates {
    /// Reference to the statutory schedule defining these rates.
    pub reference: String,
    /// Employee contribution rate (e.g., 0.11 for 11%).
    pub employee_rate: Decimal,
    /// Employer rate for wages at or below the threshold.
    pub employer_rate: Decimal,
    /// Employer rate for wages above the threshold.
    pub employer_rate_above_threshold: Decimal,
    /// Wage at which the employer rate drops.
    pub employer_threshold: Decimal,
}

impl Default for RetirementFundRates {
    fn default() -> Self {
        Self {
            reference: "EPF Act 1991, Third Schedule".to_string(),
            employee_rate: Decimal::new(11, 2),
            employer_rate: Decimal::new(13, 2),
            employer_rate_above_threshold: Decimal::new(12, 2),
            employer_threshold: Decimal::from(5000),
        }
    }
}

/// A single fixed row of the social security table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialSecurityBracket {
    /// Inclusive upper bound of wages for this row.
    pub up_to: Decimal,
    /// Employer contribution for this row.
    pub employer: Decimal,
    /// Employee contribution for this row.
    pub employee: Decimal,
}

impl SocialSecurityBracket {
    fn new(up_to: i64, employer: Decimal, employee: Decimal) -> Self {
        Self {
            up_to: Decimal::from(up_to),
            employer,
            employee,
        }
    }
}

/// Social security (SOCSO) contribution table.
///
/// Wages up to the last fixed bracket are looked up directly. Above that, the
/// published table grows by `step` sized brackets, with the employee share
/// rising by a constant and the employer share alternating between two
/// increments depending on whether the bracket index is odd or even.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialSecurityRates {
    /// Reference to the statutory schedule defining this table.
    pub reference: String,
    /// Wage ceiling; higher wages contribute as if they earned this amount.
    pub ceiling: Decimal,
    /// Fixed low-wage rows, ascending by `up_to`.
    pub brackets: Vec<SocialSecurityBracket>,
    /// Width of each bracket above the fixed rows.
    pub step: Decimal,
    /// Employee increment per bracket.
    pub employee_increment: Decimal,
    /// Employer increment when the bracket index is odd.
    pub employer_increment_odd: Decimal,
    /// Employer increment when the bracket index is even.
    pub employer_increment_even: Decimal,
}

impl Default for SocialSecurityRates {
    fn default() -> Self {
        Self {
            reference: "Employees' Social Security Act 1969, Third Schedule (First Category)"
                .to_string(),
            ceiling: Decimal::from(5000),
            brackets: vec![
                SocialSecurityBracket::new(30, Decimal::new(40, 2), Decimal::new(10, 2)),
                SocialSecurityBracket::new(50, Decimal::new(70, 2), Decimal::new(20, 2)),
                SocialSecurityBracket::new(70, Decimal::new(110, 2), Decimal::new(30, 2)),
                SocialSecurityBracket::new(100, Decimal::new(150, 2), Decimal::new(40, 2)),
                SocialSecurityBracket::new(140, Decimal::new(210, 2), Decimal::new(60, 2)),
                SocialSecurityBracket::new(200, Decimal::new(295, 2), Decimal::new(85, 2)),
                SocialSecurityBracket::new(300, Decimal::new(435, 2), Decimal::new(125, 2)),
            ],
            step: Decimal::from(100),
            employee_increment: Decimal::new(50, 2),
            employer_increment_odd: Decimal::new(180, 2),
            employer_increment_even: Decimal::new(170, 2),
        }
    }
}

/// Employment insurance (EIS) contribution table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InsuranceRates {
    /// Reference to the statutory schedule defining this table.
    pub reference: String,
    /// Wage ceiling; higher wages contribute as if they earned this amount.
    pub ceiling: Decimal,
    /// Wages at or below this amount pay the base contribution.
    pub floor: Decimal,
    /// Contribution for wages at or below the floor.
    pub base_contribution: Decimal,
    /// Width of each bracket above the floor.
    pub step: Decimal,
    /// Contribution added per (partial) bracket above the floor.
    pub increment: Decimal,
}

impl Default for InsuranceRates {
    fn default() -> Self {
        Self {
            reference: "Employment Insurance System Act 2017, Second Schedule".to_string(),
            ceiling: Decimal::from(4000),
            floor: Decimal::from(1000),
            base_contribution: Decimal::new(190, 2),
            step: Decimal::from(100),
            increment: Decimal::new(20, 2),
        }
    }
}

static BUILTIN_RATES: LazyLock<StatutoryRates> = LazyLock::new(StatutoryRates::default);

/// The complete set of statutory rates for one jurisdiction.
///
/// Aggregates the tables loaded from the YAML files in a configuration
/// directory, or the built-in tables via [`StatutoryRates::default`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatutoryRates {
    metadata: JurisdictionMetadata,
    epf: RetirementFundRates,
    socso: SocialSecurityRates,
    eis: InsuranceRates,
}

impl StatutoryRates {
    /// Creates a new rate set from its component parts.
    ///
    /// Social security brackets are sorted ascending by their upper bound.
    pub fn new(
        metadata: JurisdictionMetadata,
        epf: RetirementFundRates,
        socso: SocialSecurityRates,
        eis: InsuranceRates,
    ) -> Self {
        let mut socso = socso;
        socso.brackets.sort_by(|a, b| a.up_to.cmp(&b.up_to));
        Self {
            metadata,
            epf,
            socso,
            eis,
        }
    }

    /// Returns the shared built-in Malaysian rate set.
    pub fn builtin() -> &'static StatutoryRates {
        &BUILTIN_RATES
    }

    /// Returns the jurisdiction metadata.
    pub fn metadata(&self) -> &JurisdictionMetadata {
        &self.metadata
    }

    /// Returns the retirement fund rates.
    pub fn epf(&self) -> &RetirementFundRates {
        &self.epf
    }

    /// Returns the social security table.
    pub fn socso(&self) -> &SocialSecurityRates {
        &self.socso
    }

    /// Returns the employment insurance table.
    pub fn eis(&self) -> &InsuranceRates {
        &self.eis
    }

    /// Checks that every table is internally consistent.
    ///
    /// The bracket resolvers assume positive steps and ceilings and at least
    /// one fixed social security row; tables that break those assumptions
    /// are rejected here rather than producing nonsense later.
    pub fn validate(&self) -> StatutoryResult<()> {
        let epf = &self.epf;
        if epf.employee_rate < Decimal::ZERO
            || epf.employer_rate < Decimal::ZERO
            || epf.employer_rate_above_threshold < Decimal::ZERO
        {
            return Err(invalid("epf", "contribution rates must not be negative"));
        }

        let socso = &self.socso;
        if socso.ceiling <= Decimal::ZERO {
            return Err(invalid("socso", "ceiling must be positive"));
        }
        if socso.step <= Decimal::ZERO {
            return Err(invalid("socso", "step must be positive"));
        }
        if socso.brackets.is_empty() {
            return Err(invalid("socso", "at least one fixed bracket is required"));
        }
        if socso
            .brackets
            .windows(2)
            .any(|pair| pair[0].up_to >= pair[1].up_to)
        {
            return Err(invalid(
                "socso",
                "bracket upper bounds must be strictly ascending",
            ));
        }

        let eis = &self.eis;
        if eis.ceiling <= Decimal::ZERO {
            return Err(invalid("eis", "ceiling must be positive"));
        }
        if eis.step <= Decimal::ZERO {
            return Err(invalid("eis", "step must be positive"));
        }
        if eis.floor > eis.ceiling {
            return Err(invalid("eis", "floor must not exceed the ceiling"));
        }

        Ok(())
    }
}

fn invalid(table: &str, message: &str) -> StatutoryError {
    StatutoryError::InvalidRateTable {
        table: table.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_rates_are_valid() {
        assert!(StatutoryRates::default().validate().is_ok());
    }

    #[test]
    fn test_builtin_matches_default() {
        assert_eq!(StatutoryRates::builtin(), &StatutoryRates::default());
    }

    #[test]
    fn test_default_epf_rates() {
        let rates = StatutoryRates::default();
        assert_eq!(rates.epf().employee_rate, dec("0.11"));
        assert_eq!(rates.epf().employer_rate, dec("0.13"));
        assert_eq!(rates.epf().employer_rate_above_threshold, dec("0.12"));
        assert_eq!(rates.epf().employer_threshold, dec("5000"));
    }

    #[test]
    fn test_default_socso_last_bracket() {
        let rates = StatutoryRates::default();
        let last = rates.socso().brackets.last().unwrap();
        assert_eq!(last.up_to, dec("300"));
        assert_eq!(last.employer, dec("4.35"));
        assert_eq!(last.employee, dec("1.25"));
        assert_eq!(rates.socso().brackets.len(), 7);
    }

    #[test]
    fn test_new_sorts_socso_brackets() {
        let mut socso = SocialSecurityRates::default();
        socso.brackets.reverse();

        let rates = StatutoryRates::new(
            JurisdictionMetadata::default(),
            RetirementFundRates::default(),
            socso,
            InsuranceRates::default(),
        );

        assert_eq!(rates.socso().brackets[0].up_to, dec("30"));
        assert!(rates.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_socso_brackets() {
        let mut socso = SocialSecurityRates::default();
        socso.brackets.clear();
        let rates = StatutoryRates::new(
            JurisdictionMetadata::default(),
            RetirementFundRates::default(),
            socso,
            InsuranceRates::default(),
        );

        match rates.validate() {
            Err(StatutoryError::InvalidRateTable { table, .. }) => assert_eq!(table, "socso"),
            other => panic!("Expected InvalidRateTable, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_duplicate_socso_bounds() {
        let mut socso = SocialSecurityRates::default();
        socso.brackets[1].up_to = dec("30");
        let rates = StatutoryRates::new(
            JurisdictionMetadata::default(),
            RetirementFundRates::default(),
            socso,
            InsuranceRates::default(),
        );

        assert!(rates.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_eis_step() {
        let eis = InsuranceRates {
            step: Decimal::ZERO,
            ..InsuranceRates::default()
        };
        let rates = StatutoryRates::new(
            JurisdictionMetadata::default(),
            RetirementFundRates::default(),
            SocialSecurityRates::default(),
            eis,
        );

        match rates.validate() {
            Err(StatutoryError::InvalidRateTable { table, message }) => {
                assert_eq!(table, "eis");
                assert!(message.contains("step"));
            }
            other => panic!("Expected InvalidRateTable, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_negative_epf_rate() {
        let epf = RetirementFundRates {
            employee_rate: dec("-0.11"),
            ..RetirementFundRates::default()
        };
        let rates = StatutoryRates::new(
            JurisdictionMetadata::default(),
            epf,
            SocialSecurityRates::default(),
            InsuranceRates::default(),
        );

        assert!(rates.validate().is_err());
    }
}
