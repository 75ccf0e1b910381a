//! Core error types for dayplan-core.
//!
//! Hard failures are limited to configuration I/O and validation. Recoverable
//! schedule degradation is reported through [`crate::timeline::PlanWarning`]
//! instead, so building a timeline never fails for a validated configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for dayplan-core.
#[derive(Error, Debug)]
pub enum CoreError {
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

/// Configuration-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Dot-path key that does not exist in the configuration
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// The work window has no positive length
    #[error("Work window {start} - {end} is empty")]
    EmptyWorkWindow { start: String, end: String },

    /// Two fixed slots claim the same stretch of the day
    #[error("Fixed slots '{first}' and '{second}' overlap")]
    OverlappingFixedSlots { first: String, second: String },

    /// A fixed slot does not fit inside the work window
    #[error("Fixed slot '{slot}' lies outside the work window")]
    SlotOutsideWindow { slot: String },

    /// Project split ratios out of range
    #[error("Invalid project split: {0}")]
    InvalidSplit(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Interval whose end does not come after its start
    #[error("Malformed interval at index {index}: end must be greater than start")]
    MalformedInterval { index: usize },

    /// Clock time that does not exist
    #[error("Invalid time of day {hour:02}:{minute:02}")]
    InvalidTimeOfDay { hour: u32, minute: u32 },

    /// Project identifier other than p1, p2, p3
    #[error("Unknown project '{0}' (expected p1, p2 or p3)")]
    UnknownProject(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
