//! End-to-end tests for the rusturk requester client.
//!
//! The loopback tests run the real reqwest transport against a one-shot hyper
//! server on `127.0.0.1` and need no network. The sandbox tests talk to the
//! requester sandbox and are marked `#[ignore]`.
//!
//! Run the sandbox tests with credentials in the environment:
//! ```text
//! MTURK_ACCESS_KEY_ID=... MTURK_SECRET_ACCESS_KEY=... \
//!   cargo test -p rusturk-integration -- --ignored
//! ```

use std::collections::HashMap;
use std::sync::Once;

use anyhow::Context;
use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::header::{CONTENT_TYPE, HeaderMap};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use rusturk_client::{MTurkClient, MTurkConfig};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

mod test_loopback;
mod test_sandbox;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Create a client for the requester sandbox from the environment.
#[must_use]
pub fn sandbox_client() -> MTurkClient {
    init_tracing();

    let mut config = MTurkConfig::from_env();
    config.sandbox = true;
    config.endpoint_override = None;
    MTurkClient::new(&config)
        .unwrap_or_else(|e| panic!("sandbox tests need MTURK_* credentials: {e}"))
}

/// Create a client whose endpoint is the given loopback URL.
#[must_use]
pub fn loopback_client(url: &str) -> MTurkClient {
    init_tracing();

    let config = MTurkConfig::builder()
        .access_key_id("AKIDLOOPBACK")
        .secret_access_key("secret")
        .endpoint_override(url)
        .timeout_secs(5)
        .build();
    MTurkClient::new(&config).unwrap_or_else(|e| panic!("failed to build client: {e}"))
}

/// A request as the loopback server received it.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// Request method.
    pub method: Method,
    /// Request target, e.g. `/`.
    pub uri: String,
    /// Request headers.
    pub headers: HeaderMap,
    /// Raw body.
    pub body: String,
}

impl CapturedRequest {
    /// Value of the header `name`, if present and printable.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Decoded form parameters.
    #[must_use]
    pub fn params(&self) -> HashMap<String, String> {
        form_urlencoded::parse(self.body.as_bytes())
            .into_owned()
            .collect()
    }
}

/// A server that answers one connection with a canned reply.
#[derive(Debug)]
pub struct CannedServer {
    /// Base URL to point the client at.
    pub url: String,
    handle: JoinHandle<anyhow::Result<()>>,
    requests: mpsc::UnboundedReceiver<CapturedRequest>,
}

impl CannedServer {
    /// Bind an ephemeral port and serve `body` with `status` to the first caller.
    pub async fn start(status: u16, body: &str) -> anyhow::Result<Self> {
        let status = StatusCode::from_u16(status).context("invalid status code")?;
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .context("failed to bind loopback listener")?;
        let url = format!("http://{}/", listener.local_addr()?);
        let reply = Bytes::from(body.to_owned());
        let (tx, requests) = mpsc::unbounded_channel();

        let handle = tokio::spawn(async move {
            let (stream, _) = listener.accept().await?;
            let service = service_fn(move |request: Request<Incoming>| {
                let tx = tx.clone();
                let reply = reply.clone();
                async move {
                    let (parts, body) = request.into_parts();
                    let body = body.collect().await?.to_bytes();
                    // Fails only when the test has already dropped the server.
                    let _ = tx.send(CapturedRequest {
                        method: parts.method,
                        uri: parts.uri.to_string(),
                        headers: parts.headers,
                        body: String::from_utf8_lossy(&body).into_owned(),
                    });
                    let response = Response::builder()
                        .status(status)
                        .header(CONTENT_TYPE, "text/xml")
                        .body(Full::new(reply))?;
                    Ok::<_, anyhow::Error>(response)
                }
            });

            http1::Builder::new()
                .keep_alive(false)
                .serve_connection(TokioIo::new(stream), service)
                .await
                .context("loopback connection failed")?;
            anyhow::Ok(())
        });

        Ok(Self {
            url,
            handle,
            requests,
        })
    }

    /// Wait for the exchange to finish and return what the client sent.
    pub async fn captured(mut self) -> anyhow::Result<CapturedRequest> {
        self.handle.await.context("server task panicked")??;
        self.requests
            .recv()
            .await
            .context("server closed without receiving a request")
    }
}
