//! Error types for the earnings accrual engine.
//!
//! Calculation and scheduling never fail; errors only arise at the settings
//! boundary, where a file is read and validated before it reaches the core.

use thiserror::Error;

/// The main error type for the earnings accrual engine.
///
/// # Example
///
/// ```
/// use payticker::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/salary.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/salary.yaml");
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

    /// The configuration file extension is not one the loader understands.
    #[error("Unsupported configuration format: {path}")]
    UnsupportedFormat {
        /// The offending path.
        path: String,
    },

    /// A configuration value is structurally invalid.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A time-of-day string was not of the form `HH:MM`.
    #[error("Invalid time of day: '{value}'")]
    InvalidTimeOfDay {
        /// The rejected input.
        value: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
