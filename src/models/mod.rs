//! Core data models for the Statutory Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod contribution;
mod statutory_input;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, StatutoryBreakdown, StatutoryCalculation,
};
pub use contribution::ContributionPair;
pub use statutory_input::{DEFAULT_DAYS_IN_MONTH, StatutoryInput};
