//! Service identity, credentials and endpoint definitions.

use std::fmt;

/// Service name sent as `Service` and used as the signing prefix.
pub const SERVICE_NAME: &str = "AWSMechanicalTurkRequester";

/// Protocol version sent as `Version`.
pub const SERVICE_VERSION: &str = "2008-08-02";

/// Requester access key pair.
///
/// The `Debug` implementation never prints the secret key.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    access_key_id: String,
    secret_access_key: String,
}

impl Credentials {
    /// Create a credential pair.
    #[must_use]
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
        }
    }

    /// The public access key id.
    #[must_use]
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    /// The secret access key used for signing.
    #[must_use]
    pub fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"[REDACTED]")
            .finish()
    }
}

/// The remote environment a client sends requests to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Live marketplace, real payments.
    Production,
    /// Isolated test marketplace, no real payments.
    Sandbox,
    /// Any other base URL (local stubs, proxies).
    Custom(String),
}

impl Endpoint {
    /// Production base URL.
    pub const PRODUCTION_URL: &str = "https://mechanicalturk.amazonaws.com/";
    /// Sandbox base URL.
    pub const SANDBOX_URL: &str = "https://mechanicalturk.sandbox.amazonaws.com/";

    /// Pick the production or sandbox endpoint.
    #[must_use]
    pub fn from_sandbox_flag(sandbox: bool) -> Self {
        if sandbox { Self::Sandbox } else { Self::Production }
    }

    /// The base URL requests are posted to.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Production => Self::PRODUCTION_URL,
            Self::Sandbox => Self::SANDBOX_URL,
            Self::Custom(url) => url,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_redact_secret_in_debug() {
        let creds = Credentials::new("AKIDEXAMPLE", "super-secret");
        let debug = format!("{creds:?}");
        assert!(debug.contains("AKIDEXAMPLE"));
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_should_select_endpoint_from_sandbox_flag() {
        assert_eq!(Endpoint::from_sandbox_flag(true), Endpoint::Sandbox);
        assert_eq!(Endpoint::from_sandbox_flag(false), Endpoint::Production);
        assert_eq!(
            Endpoint::Sandbox.url(),
            "https://mechanicalturk.sandbox.amazonaws.com/"
        );
        assert_eq!(
            Endpoint::Production.url(),
            "https://mechanicalturk.amazonaws.com/"
        );
    }

    #[test]
    fn test_should_use_custom_url() {
        let endpoint = Endpoint::Custom("http://127.0.0.1:8080/".to_owned());
        assert_eq!(endpoint.url(), "http://127.0.0.1:8080/");
        assert_eq!(endpoint.to_string(), "http://127.0.0.1:8080/");
    }
}
