//! Error types for the Prevailing Wage Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Only configuration loading surfaces these to callers; the calculation
//! path degrades to partial results instead of failing.

use thiserror::Error;

/// The main error type for the Prevailing Wage Engine.
///
/// # Example
///
/// ```
/// use prevailing_wage_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/crafts.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/crafts.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// Configuration parsed but is internally inconsistent.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of what made the configuration invalid.
        message: String,
    },

    /// A work item referenced a craft that the rate table does not define.
    #[error("Craft not found: {craft}")]
    CraftNotFound {
        /// The craft name that was not found.
        craft: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
