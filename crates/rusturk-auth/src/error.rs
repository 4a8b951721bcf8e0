//! Error types for request signing.

/// Errors that can occur while signing a request.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The operation name is empty or contains characters that would make the
    /// string to sign ambiguous.
    #[error("Invalid operation name: {0:?}")]
    InvalidOperation(String),

    /// The formatted timestamp is not the fixed 20-character width.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// The secret key was rejected by the MAC implementation.
    #[error("Invalid secret key")]
    InvalidSecretKey,
}
