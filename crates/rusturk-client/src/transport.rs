//! Pluggable HTTP transport.
//!
//! The gateway hands a fully signed, form-encoded request to an
//! [`HttpTransport`] and gets back the raw status and body. The default
//! implementation is [`ReqwestTransport`]; tests substitute their own.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use bytes::Bytes;
use http::StatusCode;

/// Content type of every request body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// One outgoing POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    /// Target URL.
    pub url: String,
    /// `application/x-www-form-urlencoded` body.
    pub body: String,
}

/// The raw reply to a [`TransportRequest`].
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Response body.
    pub body: Bytes,
}

/// Failure to obtain any response.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Connection, TLS, timeout or body read failure in the HTTP client.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure reported by a custom transport.
    #[error("{0}")]
    Other(String),
}

/// Future returned by [`HttpTransport::send`].
pub type TransportFuture<'a> =
    Pin<Box<dyn Future<Output = Result<TransportResponse, TransportError>> + Send + 'a>>;

/// Sends a single request and returns its reply.
///
/// Boxed futures keep the trait usable as `Arc<dyn HttpTransport>`.
pub trait HttpTransport: Send + Sync + 'static {
    /// POST `request` and wait for the full response.
    fn send(&self, request: TransportRequest) -> TransportFuture<'_>;
}

/// [`HttpTransport`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport whose requests fail after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Http`] if the underlying client cannot be
    /// constructed (for example when no TLS backend is available).
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Wrap an existing client.
    #[must_use]
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: TransportRequest) -> TransportFuture<'_> {
        Box::pin(async move {
            let response = self
                .client
                .post(&request.url)
                .header(reqwest::header::CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(request.body)
                .send()
                .await?;
            let status = response.status();
            let body = response.bytes().await?;
            Ok(TransportResponse { status, body })
        })
    }
}
