//! Error types for the Rusturk core.

/// Core error type for configuration and credentials.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A required credential was empty or missing.
    #[error("missing credential: {0}")]
    MissingCredential(&'static str),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
