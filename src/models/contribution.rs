//! Contribution pair model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Employer and employee shares of a single statutory contribution.
///
/// # Example
///
/// ```
/// use statutory_engine::models::ContributionPair;
/// use rust_decimal::Decimal;
///
/// let pair = ContributionPair::new(Decimal::new(40, 2), Decimal::new(10, 2));
/// assert_eq!(pair.total(), Decimal::new(50, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContributionPair {
    /// The employer's share.
    pub employer: Decimal,
    /// The employee's share, deducted from wages.
    pub employee: Decimal,
}

impl ContributionPair {
    /// Creates a new contribution pair.
    pub fn new(employer: Decimal, employee: Decimal) -> Self {
        Self { employer, employee }
    }

    /// A pair with both shares zero.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns the combined contribution.
    pub fn total(&self) -> Decimal {
        self.employer + self.employee
    }
}
