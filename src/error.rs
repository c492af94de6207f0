//! Error types for the Pay-Cycle Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading plans and
//! computing pay periods.

use thiserror::Error;

/// The main error type for the Pay-Cycle Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use pay_cycle_engine::error::EngineError;
///
/// let error = EngineError::InvalidPayPlan {
///     field: "period_start_day_of_week".to_string(),
///     message: "required for WEEKLY plans".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid pay plan field 'period_start_day_of_week': required for WEEKLY plans"
/// );
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

    /// A pay plan is incomplete or contains an out-of-range value.
    ///
    /// Surfaced to administrators so the plan settings form can be completed.
    #[error("Invalid pay plan field '{field}': {message}")]
    InvalidPayPlan {
        /// The plan field that was missing or invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A request parameter is out of range.
    #[error("Invalid request parameter '{field}': {message}")]
    InvalidRequest {
        /// The request parameter that was rejected.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// No pay plan with the given id is registered.
    #[error("Pay plan not found: {id}")]
    PlanNotFound {
        /// The plan id that was requested.
        id: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidPayPlan`] error.
    pub fn invalid_plan(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidPayPlan {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
