//! Error types for the jenks library.
//!
//! This module defines a single error enum covering every failure the
//! library can produce, so callers only ever match on one type.

use thiserror::Error;

/// The main error type for jenks operations.
#[derive(Error, Debug)]
pub enum JenksError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// Too few observations for the requested class count
    #[error("Insufficient observations: {actual} observation(s) cannot fill {required} classes")]
    InsufficientObservations { required: usize, actual: usize },

    /// Palette errors
    #[error("Palette error: {message}")]
    Palette { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with JenksError
pub type Result<T> = std::result::Result<T, JenksError>;
