use thiserror::Error;

use crate::models::property::PropertyId;

/// Custom error types for the registry
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Property {0} not found")]
    NotFound(PropertyId),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for RegistryError {
    fn from(err: std::io::Error) -> Self {
        RegistryError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        RegistryError::Storage(err.to_string())
    }
}

/// Result type specific to registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

impl RegistryError {
    /// Whether retrying the same command unchanged could ever succeed.
    /// The four taxonomy kinds all require caller correction; only a
    /// storage failure is worth retrying as-is.
    pub fn is_retriable(&self) -> bool {
        matches!(self, RegistryError::Storage(_))
    }
}
