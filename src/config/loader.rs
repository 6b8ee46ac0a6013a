//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading statutory
//! rate tables from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{StatutoryError, StatutoryResult};

use super::types::{
    InsuranceRates, JurisdictionMetadata, RetirementFundRates, SocialSecurityRates,
    StatutoryRates,
};

/// Loads and provides access to a statutory rate set.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/malaysia/
/// ├── jurisdiction.yaml   # Jurisdiction metadata
/// ├── epf.yaml            # Retirement fund rates
/// ├── socso.yaml          # Social security table
/// └── eis.yaml            # Employment insurance table
/// ```
///
/// # Example
///
/// ```no_run
/// use statutory_engine::calculation::calculate_statutory_with;
/// use statutory_engine::config::ConfigLoader;
/// use statutory_engine::models::StatutoryInput;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/malaysia")?;
/// let input = StatutoryInput::new(Decimal::from(3500));
/// let breakdown = calculate_statutory_with(&input, loader.rates());
/// println!("Net salary: {}", breakdown.net_salary);
/// # Ok::<(), statutory_engine::error::StatutoryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rates: StatutoryRates,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - A table fails validation (see [`StatutoryRates::validate`])
    pub fn load<P: AsRef<Path>>(path: P) -> StatutoryResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<JurisdictionMetadata>(&path.join("jurisdiction.yaml"))?;
        let epf = Self::load_yaml::<RetirementFundRates>(&path.join("epf.yaml"))?;
        let socso = Self::load_yaml::<SocialSecurityRates>(&path.join("socso.yaml"))?;
        let eis = Self::load_yaml::<InsuranceRates>(&path.join("eis.yaml"))?;

        let rates = StatutoryRates::new(metadata, epf, socso, eis);
        rates.validate()?;

        info!(
            jurisdiction = %rates.metadata().code,
            effective_date = %rates.metadata().effective_date,
            socso_brackets = rates.socso().brackets.len(),
            "Loaded statutory rate tables"
        );

        Ok(Self { rates })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> StatutoryResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| StatutoryError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| StatutoryError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded rate set.
    pub fn rates(&self) -> &StatutoryRates {
        &self.rates
    }

    /// Returns the jurisdiction metadata.
    pub fn metadata(&self) -> &JurisdictionMetadata {
        self.rates.metadata()
    }

    /// Consumes the loader, returning the rate set.
    pub fn into_rates(self) -> StatutoryRates {
        self.rates
    }
}
