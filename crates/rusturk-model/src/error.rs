//! Service-reported error details.
//!
//! The service reports failures inside the response document as an `Errors`
//! container holding one or more `Error` elements, each with a `Code` and a
//! `Message`.

use std::fmt;

use serde::Serialize;

/// One `(code, message)` pair from an `Errors` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    /// Machine-readable error code, e.g. `AWS.MechanicalTurk.HITDoesNotExist`.
    pub code: String,
    /// Human-readable description.
    pub message: String,
}

impl ApiError {
    /// Create an error detail.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}
