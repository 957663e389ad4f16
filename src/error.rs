//! Error types for the listing store
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using ListingError
pub type Result<T> = std::result::Result<T, ListingError>;

/// Unified error type for listing store operations
#[derive(Debug, Error)]
pub enum ListingError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    /// Bad user input. The operation is aborted before any side effect.
    #[error("{0}")]
    Validation(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    // -------------------------------------------------------------------------
    // Estimator Errors
    // -------------------------------------------------------------------------
    /// The price model is missing or could not be loaded. Never fatal.
    #[error("Prediction model not available: {0}")]
    EstimatorUnavailable(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ListingError {
    fn from(err: serde_json::Error) -> Self {
        ListingError::Serialization(err.to_string())
    }
}

impl ListingError {
    /// True for errors caused by what the user typed
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ListingError::Validation(_) | ListingError::UnknownField(_)
        )
    }
}
