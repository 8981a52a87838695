use thiserror::Error;

/// Result type alias for DSN reconstruction
pub type Result<T, E = DsnError> = std::result::Result<T, E>;

/// Reasons a DSN cannot be reconstructed from a request
///
/// Both are terminal: resolving the same request again yields the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DsnError {
    /// Neither the auth header nor the query string carried a public key
    #[error("missing public key")]
    MissingCredential,

    /// The path matches neither the project store endpoint nor the legacy one
    #[error("missing project id, attempted to parse project from: {0}")]
    MissingProjectId(String),
}
