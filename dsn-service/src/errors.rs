use crate::config::ValidationError;
use thiserror::Error;

/// Result type alias for dsn-service operations
pub type Result<T, E = DsnServiceError> = std::result::Result<T, E>;

/// Errors that can occur while running the dsn-service
#[derive(Error, Debug)]
pub enum DsnServiceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(#[from] ValidationError),

    #[error("Response serialization error: {0}")]
    ResponseSerializationError(#[from] serde_json::Error),
}
