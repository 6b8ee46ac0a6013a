//! Calculation logic for the Statutory Engine.
//!
//! This module contains the calculation functions for statutory payroll
//! deductions: days-in-month resolution for unpaid-leave proration, the
//! SOCSO and EIS bracket tables, money rounding, and the statutory
//! calculator that combines them with the EPF percentage rule.

mod days_in_month;
mod insurance;
mod rounding;
mod social_security;
mod statutory;

pub use days_in_month::days_in_month;
pub use insurance::{insurance_contribution, insurance_contribution_with};
pub use rounding::round_money;
pub use social_security::{social_security_contribution, social_security_contribution_with};
pub use statutory::{
    calculate_statutory, calculate_statutory_with, calculate_statutory_with_audit,
};
