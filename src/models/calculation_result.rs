//! Calculation result models for the Statutory Engine.
//!
//! This module contains the [`StatutoryBreakdown`] produced by the statutory
//! calculator, and the audit types that explain how each figure was reached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The full statutory breakdown for one pay period.
///
/// Gross salary, unpaid-leave deduction and net salary are rounded to two
/// decimal places. EPF contributions are whole currency units. SOCSO and EIS
/// figures come already rounded from their bracket tables.
///
/// # Example
///
/// ```
/// use statutory_engine::calculation::calculate_statutory;
/// use statutory_engine::models::StatutoryInput;
/// use rust_decimal::Decimal;
///
/// let breakdown = calculate_statutory(&StatutoryInput::new(Decimal::from(5000)));
/// assert_eq!(breakdown.epf_employee, Decimal::from(550));
/// assert_eq!(breakdown.epf_employer, Decimal::from(650));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryBreakdown {
    /// Basic + allowance + bonus + overtime - unpaid leave deduction.
    pub gross_salary: Decimal,
    /// Amount deducted from basic salary for unpaid leave.
    pub unpaid_leave_deduction: Decimal,
    /// Employee EPF contribution.
    pub epf_employee: Decimal,
    /// Employer EPF contribution.
    pub epf_employer: Decimal,
    /// Employee SOCSO contribution.
    pub socso_employee: Decimal,
    /// Employer SOCSO contribution.
    pub socso_employer: Decimal,
    /// Employee EIS contribution.
    pub eis_employee: Decimal,
    /// Employer EIS contribution.
    pub eis_employer: Decimal,
    /// Monthly tax deduction (PCB), passed through unchanged.
    pub pcb: Decimal,
    /// Take-home pay after all employee-side deductions.
    pub net_salary: Decimal,
}

impl StatutoryBreakdown {
    /// Sum of the employee-side statutory contributions (EPF, SOCSO, EIS).
    pub fn employee_statutory_total(&self) -> Decimal {
        self.epf_employee + self.socso_employee + self.eis_employee
    }

    /// Sum of the employer-side statutory contributions (EPF, SOCSO, EIS).
    pub fn employer_statutory_total(&self) -> Decimal {
        self.epf_employer + self.socso_employer + self.eis_employer
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the statutory schedule for this rule.
    pub statutory_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate inputs that were handled but may need attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

impl AuditTrace {
    /// Returns the step recorded for a rule, if any.
    pub fn step(&self, rule_id: &str) -> Option<&AuditStep> {
        self.steps.iter().find(|s| s.rule_id == rule_id)
    }
}

/// A breakdown together with the trace explaining it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryCalculation {
    /// The computed breakdown.
    pub breakdown: StatutoryBreakdown,
    /// How each figure in the breakdown was reached.
    pub audit_trace: AuditTrace,
}
