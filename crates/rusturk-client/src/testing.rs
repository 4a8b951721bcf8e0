//! In-memory transports for unit tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use bytes::Bytes;
use http::StatusCode;

use crate::transport::{
    HttpTransport, TransportError, TransportFuture, TransportRequest, TransportResponse,
};

/// Replies with a canned body and records every request.
#[derive(Debug)]
pub(crate) struct StubTransport {
    status: StatusCode,
    body: Bytes,
    requests: Mutex<Vec<TransportRequest>>,
}

impl StubTransport {
    pub(crate) fn ok(body: &str) -> Arc<Self> {
        Self::with_status(StatusCode::OK, body)
    }

    pub(crate) fn with_status(status: StatusCode, body: &str) -> Arc<Self> {
        Arc::new(Self {
            status,
            body: Bytes::from(body.to_owned()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub(crate) fn last_request(&self) -> Option<TransportRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    /// Decoded form parameters of the last request.
    pub(crate) fn last_params(&self) -> HashMap<String, String> {
        self.last_request()
            .map(|request| {
                form_urlencoded::parse(request.body.as_bytes())
                    .into_owned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl HttpTransport for StubTransport {
    fn send(&self, request: TransportRequest) -> TransportFuture<'_> {
        self.requests.lock().unwrap().push(request);
        let response = TransportResponse {
            status: self.status,
            body: self.body.clone(),
        };
        Box::pin(async move { Ok(response) })
    }
}

/// Fails every request as if the network were down.
#[derive(Debug)]
pub(crate) struct FailingTransport;

impl HttpTransport for FailingTransport {
    fn send(&self, _request: TransportRequest) -> TransportFuture<'_> {
        Box::pin(async { Err(TransportError::Other("connection refused".to_owned())) })
    }
}
