//! Error types for viscera operations.
//!
//! Provides structured error handling instead of panics. Expected
//! control-flow outcomes (a rejected ingestion, a refused transfer) are
//! booleans, not errors; these types cover genuinely invalid input such
//! as malformed template data.

use std::error::Error;
use std::fmt;

/// Result type for viscera operations.
pub type Result<T> = std::result::Result<T, VisceraError>;

/// Errors that can occur during viscera operations.
#[derive(Debug, Clone)]
pub enum VisceraError {
    /// Configuration errors.
    Config(ConfigError),
    /// Serialization errors.
    Serialization(String),
}

impl fmt::Display for VisceraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisceraError::Config(e) => write!(f, "Config error: {}", e),
            VisceraError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl Error for VisceraError {}

impl From<serde_json::Error> for VisceraError {
    fn from(e: serde_json::Error) -> Self {
        VisceraError::Serialization(e.to_string())
    }
}

/// Configuration errors.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// Invalid value.
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
    /// Value below the allowed minimum.
    NotPositive { field: String, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue {
                field,
                value,
                reason,
            } => {
                write!(f, "Invalid value for {}: {} ({})", field, value, reason)
            }
            ConfigError::NotPositive { field, value } => {
                write!(f, "{} must be positive, got {}", field, value)
            }
        }
    }
}

// Convenience constructors
impl VisceraError {
    pub fn invalid_config(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        VisceraError::Config(ConfigError::InvalidValue {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        })
    }

    pub fn not_positive(field: impl Into<String>, value: f64) -> Self {
        VisceraError::Config(ConfigError::NotPositive {
            field: field.into(),
            value,
        })
    }
}
