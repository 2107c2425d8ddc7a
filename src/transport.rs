//! HTTP transport seam.
//!
//! Recognition never talks to the network directly. The host (or a test)
//! injects an [`HttpTransport`]; [`ReqwestTransport`] is the stock
//! implementation. Timeouts and cancellation belong to the transport.

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::debug;

use crate::error::Result;

/// Request handed to a transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: HttpBody,
}

/// Request body, serialized as `{"type": "Json", "payload": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload")]
pub enum HttpBody {
    Json(Value),
}

/// Response produced by a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    /// `true` for 2xx statuses.
    pub ok: bool,
    pub status: u16,
    /// Parsed JSON body. Bodies that are not JSON are kept as a JSON string.
    pub data: Value,
}

/// Performs one HTTP exchange.
///
/// Errors returned here reach the caller of
/// [`recognize`](crate::recognizer::recognize) unchanged.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn fetch(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// [`HttpTransport`] backed by `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: Client,
    timeout: Option<Duration>,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom `reqwest::Client` (for connection pooling, proxies, TLS).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    /// Apply a per-request timeout. No timeout is set by default.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn fetch(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = self.http.request(request.method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let HttpBody::Json(payload) = &request.body;
        builder = builder.body(serde_json::to_vec(payload)?);

        let resp = builder.send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        debug!(status = status.as_u16(), bytes = text.len(), "received response");

        Ok(HttpResponse {
            ok: status.is_success(),
            status: status.as_u16(),
            data: parse_body(&text),
        })
    }
}

fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
