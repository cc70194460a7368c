//! Core error types for bedtime-core.
//!
//! This module defines the error hierarchy using thiserror. Everything that
//! can interrupt an estimation collapses into [`CalculationError`] at the
//! boundary; the richer variants stay reachable through `source()`.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for bedtime-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Model artifact or prediction errors
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Model-specific errors.
#[derive(Error, Debug)]
pub enum ModelError {
    /// Failed to read the model artifact
    #[error("Failed to read model artifact at {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the model artifact
    #[error("Failed to parse model artifact: {0}")]
    ParseFailed(String),

    /// Artifact contents failed validation
    #[error("Invalid model artifact field '{field}': {message}")]
    Invalid { field: String, message: String },

    /// Prediction produced an unusable value
    #[error("Prediction failed: {0}")]
    Prediction(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to resolve the data directory
    #[error("Failed to resolve data directory: {0}")]
    DataDir(String),

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Value outside its accepted range
    #[error("Invalid value for '{field}': {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Unparseable value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Boundary error for bedtime estimation.
///
/// Every underlying cause (model loading, prediction, input validation)
/// collapses into this single kind, and the display string never names the
/// cause. The chain stays reachable through [`std::error::Error::source`]
/// for logging.
#[derive(Error, Debug)]
#[error("failed to calculate bedtime")]
pub struct CalculationError {
    #[from]
    source: CoreError,
}

impl CalculationError {
    /// The underlying cause, for diagnostics only.
    pub fn cause(&self) -> &CoreError {
        &self.source
    }
}

impl From<ModelError> for CalculationError {
    fn from(err: ModelError) -> Self {
        CoreError::from(err).into()
    }
}

impl From<ValidationError> for CalculationError {
    fn from(err: ValidationError) -> Self {
        CoreError::from(err).into()
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
