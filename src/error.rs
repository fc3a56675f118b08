// src/error.rs
use std::fmt;

/// Error types for the checked entry points of the bs-greeks library.
///
/// The greek functions themselves are total and never return these; errors
/// only come from strict validation and from parsing an option side.
#[derive(Debug, Clone, PartialEq)]
pub enum GreeksError {
    /// Invalid parameter values
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid engine configuration
    InvalidConfiguration { field: String, reason: String },

    /// Option side text that is neither "call" nor "put"
    UnrecognizedSide { value: String },
}

impl fmt::Display for GreeksError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GreeksError::InvalidParameters {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            GreeksError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
            GreeksError::UnrecognizedSide { value } => {
                write!(
                    f,
                    "Unrecognized option side '{}': expected \"call\" or \"put\"",
                    value
                )
            }
        }
    }
}

impl std::error::Error for GreeksError {}

/// Result type alias for bs-greeks operations
pub type GreeksResult<T> = Result<T, GreeksError>;

/// Validation utilities
pub mod validation {
    use super::{GreeksError, GreeksResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> GreeksResult<()> {
        // `!(value > 0.0)` also rejects NaN
        if !(value > 0.0) {
            Err(GreeksError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> GreeksResult<()> {
        if !(value >= 0.0) {
            Err(GreeksError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> GreeksResult<()> {
        if !value.is_finite() {
            Err(GreeksError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate a scale divisor for theta or rho
    pub fn validate_scale(field: &str, scale: f64) -> GreeksResult<()> {
        if !scale.is_finite() || scale <= 0.0 {
            Err(GreeksError::InvalidConfiguration {
                field: field.to_string(),
                reason: format!("scale must be a finite positive divisor, got {}", scale),
            })
        } else {
            Ok(())
        }
    }
}
