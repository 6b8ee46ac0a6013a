//! Configuration loading and management for the Statutory Engine.
//!
//! This module provides the statutory rate tables, their built-in defaults,
//! and functionality to load them from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use statutory_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/malaysia").unwrap();
//! println!("Loaded rates: {}", loader.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    InsuranceRates, JurisdictionMetadata, RetirementFundRates, SocialSecurityBracket,
    SocialSecurityRates, StatutoryRates,
};
