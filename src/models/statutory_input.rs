//! Statutory calculation input model.
//!
//! This module defines [`StatutoryInput`], the set of pay-period figures the
//! calculator works from. No validation is performed here; negative or
//! otherwise unusual values flow through the arithmetic unchanged.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::days_in_month;

/// Days used to prorate unpaid leave when the caller supplies none.
pub const DEFAULT_DAYS_IN_MONTH: u32 = 30;

/// The pay-period figures for one employee.
///
/// # Example
///
/// ```
/// use statutory_engine::models::StatutoryInput;
/// use rust_decimal::Decimal;
///
/// let input = StatutoryInput::new(Decimal::from(3000))
///     .with_allowance(Decimal::from(200))
///     .with_unpaid_leave_days(Decimal::from(2))
///     .for_month(2, 2024);
///
/// assert_eq!(input.days_in_month, 29);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryInput {
    /// Basic monthly salary.
    pub basic: Decimal,
    /// Fixed allowances for the period.
    #[serde(default)]
    pub allowance: Decimal,
    /// Bonus paid in the period.
    #[serde(default)]
    pub bonus: Decimal,
    /// Overtime paid in the period.
    #[serde(default)]
    pub overtime: Decimal,
    /// Days of unpaid leave taken; fractional days are allowed.
    #[serde(default)]
    pub unpaid_leave_days: Decimal,
    /// Non-statutory deductions (loans, advances, ...).
    #[serde(default)]
    pub other_deductions: Decimal,
    /// Monthly tax deduction (PCB), supplied by the caller as-is.
    #[serde(default)]
    pub manual_tax: Decimal,
    /// Calendar days used to prorate unpaid leave.
    #[serde(default = "default_days_in_month")]
    pub days_in_month: u32,
}

fn default_days_in_month() -> u32 {
    DEFAULT_DAYS_IN_MONTH
}

impl Default for StatutoryInput {
    fn default() -> Self {
        Self {
            basic: Decimal::ZERO,
            allowance: Decimal::ZERO,
            bonus: Decimal::ZERO,
            overtime: Decimal::ZERO,
            unpaid_leave_days: Decimal::ZERO,
            other_deductions: Decimal::ZERO,
            manual_tax: Decimal::ZERO,
            days_in_month: DEFAULT_DAYS_IN_MONTH,
        }
    }
}

impl StatutoryInput {
    /// Creates an input with the given basic salary and everything else defaulted.
    pub fn new(basic: Decimal) -> Self {
        Self {
            basic,
            ..Self::default()
        }
    }

    /// Sets the allowance.
    pub fn with_allowance(mut self, allowance: Decimal) -> Self {
        self.allowance = allowance;
        self
    }

    /// Sets the bonus.
    pub fn with_bonus(mut self, bonus: Decimal) -> Self {
        self.bonus = bonus;
        self
    }

    /// Sets the overtime pay.
    pub fn with_overtime(mut self, overtime: Decimal) -> Self {
        self.overtime = overtime;
        self
    }

    /// Sets the number of unpaid leave days.
    pub fn with_unpaid_leave_days(mut self, days: Decimal) -> Self {
        self.unpaid_leave_days = days;
        self
    }

    /// Sets other (non-statutory) deductions.
    pub fn with_other_deductions(mut self, deductions: Decimal) -> Self {
        self.other_deductions = deductions;
        self
    }

    /// Sets the manually supplied tax deduction.
    pub fn with_manual_tax(mut self, tax: Decimal) -> Self {
        self.manual_tax = tax;
        self
    }

    /// Sets the days used for unpaid-leave proration.
    pub fn with_days_in_month(mut self, days: u32) -> Self {
        self.days_in_month = days;
        self
    }

    /// Prorates unpaid leave over the actual length of the given month.
    pub fn for_month(self, month: i32, year: i32) -> Self {
        self.with_days_in_month(days_in_month(month, year))
    }
}
