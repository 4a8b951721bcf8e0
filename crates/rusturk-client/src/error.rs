//! Client error taxonomy.

use rusturk_auth::AuthError;
use rusturk_core::CoreError;
use rusturk_model::{ApiError, MTurkOperation};
use rusturk_xml::XmlError;

use crate::transport::TransportError;

/// Errors returned by [`MTurkClient`](crate::MTurkClient) operations.
#[derive(Debug, thiserror::Error)]
pub enum MTurkError {
    /// The client configuration is unusable.
    #[error(transparent)]
    Config(#[from] CoreError),

    /// The request could not be signed.
    #[error("signing failed: {0}")]
    Signing(#[from] AuthError),

    /// The caller tried to set a parameter the signer controls.
    #[error("parameter {0} is set by the request signer and cannot be overridden")]
    ReservedParameter(String),

    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(#[from] TransportError),

    /// A non-success HTTP status without a service error block.
    #[error("{operation} returned HTTP {status}")]
    HttpStatus {
        /// The operation that was called.
        operation: MTurkOperation,
        /// The HTTP status received.
        status: http::StatusCode,
    },

    /// The service rejected the request.
    #[error("{operation} failed: {}", join_errors(.errors))]
    Api {
        /// The operation that was called.
        operation: MTurkOperation,
        /// Every `(code, message)` pair the service reported, in document order.
        errors: Vec<ApiError>,
    },

    /// The response body was not XML or lacked a required element.
    #[error("malformed {operation} response: {source}")]
    MalformedResponse {
        /// The operation that was called.
        operation: MTurkOperation,
        /// What went wrong while reading the document.
        #[source]
        source: XmlError,
    },

    /// A question document could not be rendered.
    #[error("invalid question document: {0}")]
    Question(#[source] XmlError),
}

impl MTurkError {
    /// Service error details, for [`MTurkError::Api`].
    #[must_use]
    pub fn api_errors(&self) -> Option<&[ApiError]> {
        match self {
            Self::Api { errors, .. } => Some(errors.as_slice()),
            _ => None,
        }
    }

    /// Whether the service reported an error with the given code.
    #[must_use]
    pub fn has_api_code(&self, code: &str) -> bool {
        self.api_errors()
            .is_some_and(|errors| errors.iter().any(|e| e.code == code))
    }
}

fn join_errors(errors: &[ApiError]) -> String {
    if errors.is_empty() {
        return "empty error list".to_owned();
    }
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convenience result type for client operations.
pub type MTurkResult<T> = Result<T, MTurkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_format_api_errors() {
        let err = MTurkError::Api {
            operation: MTurkOperation::GetHIT,
            errors: vec![
                ApiError::new("AWS.MechanicalTurk.HITDoesNotExist", "Hit not found"),
                ApiError::new("X", "Y"),
            ],
        };
        assert_eq!(
            err.to_string(),
            "GetHIT failed: AWS.MechanicalTurk.HITDoesNotExist: Hit not found; X: Y"
        );
        assert!(err.has_api_code("X"));
        assert!(!err.has_api_code("Z"));
    }

    #[test]
    fn test_should_not_expose_api_errors_for_other_variants() {
        let err = MTurkError::ReservedParameter("Signature".to_owned());
        assert!(err.api_errors().is_none());
        assert!(err.to_string().contains("Signature"));
    }
}
