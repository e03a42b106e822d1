//! HTTP transport
//!
//! The seam between the session and the wire. [`HttpTransport`] is the
//! reqwest-backed implementation; tests substitute their own.

use std::time::Duration;

use bytes::Bytes;

use crate::error::Result;

/// HTTP methods the firmware's web interface uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A single outgoing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,

    /// Absolute URL
    pub url: String,

    /// Header name/value pairs, sent as given
    pub headers: Vec<(String, String)>,

    /// Request body (POST only)
    pub body: Option<String>,
}

/// Status and body of a completed exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Performs one HTTP round trip
///
/// Any status code is a successful exchange at this level; only failures to
/// complete the exchange are errors.
pub trait Transport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse>;
}

/// Blocking reqwest client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Build a client with the given request timeout (0 disables it)
    pub fn new(timeout_ms: u64) -> Result<Self> {
        let mut builder = reqwest::blocking::Client::builder();
        if timeout_ms > 0 {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let client = builder.build()?;
        Ok(Self { client })
    }

    /// Wrap a preconfigured client (proxies, TLS, custom headers)
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self
                .client
                .post(&request.url)
                .body(request.body.clone().unwrap_or_default()),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?;

        tracing::trace!("{:?} {} -> {} ({} bytes)", request.method, request.url, status, body.len());

        Ok(HttpResponse { status, body })
    }
}
