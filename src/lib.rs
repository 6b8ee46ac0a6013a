//! Statutory Payroll Engine for Malaysian contributions
//!
//! This crate computes the statutory deductions for a single pay period:
//! EPF (retirement fund), SOCSO (social security), EIS (employment
//! insurance), the caller-supplied PCB tax figure, and the resulting net
//! salary. All calculations are pure functions over `rust_decimal` amounts.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
