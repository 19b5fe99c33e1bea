//! Error types for gate domain operations

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for gate domain operations
pub type Result<T> = std::result::Result<T, DomainError>;
