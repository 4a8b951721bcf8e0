//! Requester API signature computation.
//!
//! The string to sign is the plain concatenation
//!
//! ```text
//! StringToSign = "AWSMechanicalTurkRequester" + Operation + Timestamp
//! ```
//!
//! Operations are restricted to ASCII alphanumerics and the timestamp is always
//! exactly [`TIMESTAMP_LEN`] characters, so the concatenation splits back into
//! its parts in exactly one way.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Utc};
use hmac::{Hmac, KeyInit, Mac};
use sha1::Sha1;
use tracing::debug;

use rusturk_core::{Credentials, SERVICE_NAME};

use crate::error::AuthError;

type HmacSha1 = Hmac<Sha1>;

/// Length of a formatted timestamp (`YYYY-MM-DDTHH:MM:SSZ`).
pub const TIMESTAMP_LEN: usize = 20;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// The authentication values for one outgoing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    /// The operation the signature covers.
    pub operation: String,
    /// The timestamp the signature covers, as transmitted.
    pub timestamp: String,
    /// Base64 HMAC-SHA1 signature.
    pub signature: String,
}

/// Signs requests with a fixed credential pair.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credentials: Credentials,
}

impl RequestSigner {
    /// Create a signer for the given credentials.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// The access key id sent alongside every signature.
    #[must_use]
    pub fn access_key_id(&self) -> &str {
        self.credentials.access_key_id()
    }

    /// Sign `operation` at time `now`.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if the operation name is invalid.
    pub fn sign(&self, operation: &str, now: DateTime<Utc>) -> Result<SignedRequest, AuthError> {
        let timestamp = format_timestamp(now)?;
        let signature = compute_signature(self.credentials.secret_access_key(), operation, now)?;

        debug!(operation = %operation, timestamp = %timestamp, "signed request");

        Ok(SignedRequest {
            operation: operation.to_owned(),
            timestamp,
            signature,
        })
    }
}

/// Format a UTC time as `YYYY-MM-DDTHH:MM:SSZ`.
///
/// # Errors
///
/// Fails for years outside `0000..=9999`, which would break the fixed width.
pub fn format_timestamp(now: DateTime<Utc>) -> Result<String, AuthError> {
    let timestamp = now.format(TIMESTAMP_FORMAT).to_string();
    if timestamp.len() == TIMESTAMP_LEN {
        Ok(timestamp)
    } else {
        Err(AuthError::InvalidTimestamp(timestamp))
    }
}

/// Build the string to sign for `operation` at time `now`.
pub fn string_to_sign(operation: &str, now: DateTime<Utc>) -> Result<String, AuthError> {
    validate_operation(operation)?;
    let timestamp = format_timestamp(now)?;
    Ok(format!("{SERVICE_NAME}{operation}{timestamp}"))
}

/// Compute the request signature: `Base64(HMAC-SHA1(secret, string_to_sign))`.
pub fn compute_signature(
    secret_key: &str,
    operation: &str,
    now: DateTime<Utc>,
) -> Result<String, AuthError> {
    let data = string_to_sign(operation, now)?;
    hmac_sha1_base64(secret_key, &data)
}

fn hmac_sha1_base64(secret_key: &str, data: &str) -> Result<String, AuthError> {
    let mut mac = HmacSha1::new_from_slice(secret_key.as_bytes())
        .map_err(|_| AuthError::InvalidSecretKey)?;
    mac.update(data.as_bytes());
    let digest = mac.finalize().into_bytes();
    Ok(BASE64.encode(digest).trim_end().to_owned())
}

fn validate_operation(operation: &str) -> Result<(), AuthError> {
    if operation.is_empty() || !operation.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(AuthError::InvalidOperation(operation.to_owned()));
    }
    Ok(())
}
