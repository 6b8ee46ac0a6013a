//! Error types for the Statutory Engine.
//!
//! Statutory calculations themselves never fail. The only fallible surface is
//! loading and validating rate tables, which is covered by [`StatutoryError`].

use thiserror::Error;

/// The main error type for the Statutory Engine.
///
/// # Example
///
/// ```
/// use statutory_engine::error::StatutoryError;
///
/// let error = StatutoryError::ConfigNotFound {
///     path: "/missing/epf.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/epf.yaml");
/// ```
#[derive(Debug, Error)]
pub enum StatutoryError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A rate table was parsed but its contents are inconsistent.
    #[error("Invalid {table} rate table: {message}")]
    InvalidRateTable {
        /// The table that failed validation (e.g. "socso").
        table: String,
        /// A description of what made the table invalid.
        message: String,
    },
}

/// A type alias for Results that return StatutoryError.
pub type StatutoryResult<T> = Result<T, StatutoryError>;
