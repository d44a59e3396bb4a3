//! Error types for finlist

use thiserror::Error;

/// Core error type for finlist operations
#[derive(Error, Debug)]
pub enum FinlistError {
    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Update error: {0}")]
    Update(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Field is not editable: {0}")]
    ImmutableField(&'static str),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for finlist operations
pub type Result<T> = std::result::Result<T, FinlistError>;
