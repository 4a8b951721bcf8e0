//! Client configuration.
//!
//! Provides [`MTurkConfig`], the explicit configuration value a client is built
//! from. Values can be assembled with the typed builder or loaded from
//! environment variables via [`MTurkConfig::from_env`].

use std::time::Duration;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::error::{CoreError, CoreResult};
use crate::types::{Credentials, Endpoint};

/// Requester client configuration.
///
/// The secret key is never serialized.
///
/// # Examples
///
/// ```
/// use rusturk_core::MTurkConfig;
///
/// let config = MTurkConfig::builder()
///     .access_key_id("AKIDEXAMPLE")
///     .secret_access_key("secret")
///     .sandbox(true)
///     .build();
/// assert_eq!(config.endpoint().url(), "https://mechanicalturk.sandbox.amazonaws.com/");
/// ```
#[derive(Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct MTurkConfig {
    /// Public access key id.
    #[builder(setter(into))]
    pub access_key_id: String,

    /// Secret access key used to sign requests.
    #[serde(skip_serializing, default)]
    #[builder(setter(into))]
    pub secret_access_key: String,

    /// Send requests to the sandbox instead of production.
    #[builder(default = false)]
    pub sandbox: bool,

    /// Base URL that replaces both fixed endpoints when set.
    #[builder(default, setter(strip_option, into))]
    pub endpoint_override: Option<String>,

    /// Upper bound for a whole request/response exchange, in seconds.
    #[builder(default = 30)]
    pub timeout_secs: u64,

    /// Log level filter string (e.g. `"info"`, `"debug"`).
    #[builder(default = String::from("info"))]
    pub log_level: String,
}

impl Default for MTurkConfig {
    fn default() -> Self {
        Self {
            access_key_id: String::new(),
            secret_access_key: String::new(),
            sandbox: false,
            endpoint_override: None,
            timeout_secs: 30,
            log_level: String::from("info"),
        }
    }
}

impl std::fmt::Debug for MTurkConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MTurkConfig")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"[REDACTED]")
            .field("sandbox", &self.sandbox)
            .field("endpoint_override", &self.endpoint_override)
            .field("timeout_secs", &self.timeout_secs)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl MTurkConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Fallback | Default |
    /// |----------|----------|---------|
    /// | `MTURK_ACCESS_KEY_ID` | `AWS_ACCESS_KEY_ID` | *(empty)* |
    /// | `MTURK_SECRET_ACCESS_KEY` | `AWS_SECRET_ACCESS_KEY` | *(empty)* |
    /// | `MTURK_SANDBOX` | | `false` |
    /// | `MTURK_ENDPOINT` | | *(unset)* |
    /// | `MTURK_TIMEOUT_SECS` | | `30` |
    /// | `LOG_LEVEL` | | `info` |
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(v) = env_with_fallback("MTURK_ACCESS_KEY_ID", "AWS_ACCESS_KEY_ID") {
            config.access_key_id = v;
        }
        if let Some(v) = env_with_fallback("MTURK_SECRET_ACCESS_KEY", "AWS_SECRET_ACCESS_KEY") {
            config.secret_access_key = v;
        }
        if let Ok(v) = std::env::var("MTURK_SANDBOX") {
            config.sandbox = parse_bool(&v);
        }
        if let Ok(v) = std::env::var("MTURK_ENDPOINT") {
            if !v.trim().is_empty() {
                config.endpoint_override = Some(v);
            }
        }
        if let Ok(v) = std::env::var("MTURK_TIMEOUT_SECS") {
            match v.parse::<u64>() {
                Ok(n) => config.timeout_secs = n,
                Err(e) => tracing::warn!(value = %v, error = %e, "ignoring invalid MTURK_TIMEOUT_SECS"),
            }
        }
        if let Ok(v) = std::env::var("LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }

    /// Check that the configuration can sign and send requests.
    pub fn validate(&self) -> CoreResult<()> {
        if self.access_key_id.trim().is_empty() {
            return Err(CoreError::MissingCredential("access key id"));
        }
        if self.secret_access_key.is_empty() {
            return Err(CoreError::MissingCredential("secret access key"));
        }
        if self.timeout_secs == 0 {
            return Err(CoreError::Config(
                "timeout must be at least one second".to_owned(),
            ));
        }
        Ok(())
    }

    /// The credential pair held by this configuration.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.access_key_id.clone(), self.secret_access_key.clone())
    }

    /// The endpoint selected by the override or the sandbox flag.
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        match &self.endpoint_override {
            Some(url) => Endpoint::Custom(url.clone()),
            None => Endpoint::from_sandbox_flag(self.sandbox),
        }
    }

    /// The request timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn env_with_fallback(primary: &str, fallback: &str) -> Option<String> {
    std::env::var(primary)
        .or_else(|_| std::env::var(fallback))
        .ok()
}

/// Parse a string as a boolean, accepting `"1"` and `"true"` (case-insensitive).
fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_create_default_config() {
        let config = MTurkConfig::default();
        assert!(config.access_key_id.is_empty());
        assert!(!config.sandbox);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.endpoint(), Endpoint::Production);
    }

    #[test]
    fn test_should_build_with_typed_builder() {
        let config = MTurkConfig::builder()
            .access_key_id("AKID")
            .secret_access_key("secret")
            .sandbox(true)
            .timeout_secs(5)
            .log_level("debug".into())
            .build();

        assert_eq!(config.access_key_id, "AKID");
        assert_eq!(config.secret_access_key, "secret");
        assert_eq!(config.endpoint(), Endpoint::Sandbox);
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.log_level, "debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_should_prefer_endpoint_override() {
        let config = MTurkConfig::builder()
            .access_key_id("AKID")
            .secret_access_key("secret")
            .sandbox(true)
            .endpoint_override("http://127.0.0.1:9000/")
            .build();
        assert_eq!(
            config.endpoint(),
            Endpoint::Custom("http://127.0.0.1:9000/".to_owned())
        );
    }

    #[test]
    fn test_should_reject_missing_credentials() {
        let config = MTurkConfig::default();
        assert!(matches!(
            config.validate(),
            Err(CoreError::MissingCredential("access key id"))
        ));

        let config = MTurkConfig::builder()
            .access_key_id("AKID")
            .secret_access_key("")
            .build();
        assert!(matches!(
            config.validate(),
            Err(CoreError::MissingCredential("secret access key"))
        ));
    }

    #[test]
    fn test_should_reject_zero_timeout() {
        let config = MTurkConfig::builder()
            .access_key_id("AKID")
            .secret_access_key("secret")
            .timeout_secs(0)
            .build();
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_should_not_serialize_secret() {
        let config = MTurkConfig::builder()
            .access_key_id("AKID")
            .secret_access_key("do-not-leak")
            .build();
        let json = serde_json::to_string(&config).expect("test serialization");
        assert!(json.contains("accessKeyId"));
        assert!(json.contains("timeoutSecs"));
        assert!(!json.contains("do-not-leak"));
        assert!(!format!("{config:?}").contains("do-not-leak"));
    }

    #[test]
    fn test_should_load_from_env() {
        let config = MTurkConfig::from_env();
        assert!(!config.log_level.is_empty());
    }

    #[test]
    fn test_should_parse_bool_values() {
        assert!(parse_bool("1"));
        assert!(parse_bool("true"));
        assert!(parse_bool("TRUE"));
        assert!(!parse_bool("0"));
        assert!(!parse_bool("no"));
        assert!(!parse_bool(""));
    }
}
