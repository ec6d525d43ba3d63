//! Network seam between the client and the outside world.
//!
//! # Design
//! A `Transport` turns an `HttpRequest` into an `HttpResponse`. It reports
//! `Err(Transport)` only when no response was received; status
//! interpretation belongs to `ListClient`. Tests substitute canned
//! transports, production uses `UreqTransport`.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::http::{HttpRequest, HttpResponse};

#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, FetchError>;
}

/// Largest success body read into memory.
pub const DEFAULT_BODY_LIMIT: u64 = 16 * 1024 * 1024;

/// Blocking ureq agent driven from tokio's blocking pool.
///
/// ureq's status-code-as-error behavior is disabled so 4xx/5xx responses come
/// back as data. Their bodies are not read.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
    body_limit: u64,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self {
            agent,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }

    /// A success body larger than `limit` bytes fails to decode.
    pub fn with_body_limit(mut self, limit: u64) -> Self {
        self.body_limit = limit;
        self
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(Duration::from_secs(10))
    }
}

#[async_trait]
impl Transport for UreqTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, FetchError> {
        let agent = self.agent.clone();
        let body_limit = self.body_limit;
        tokio::task::spawn_blocking(move || call(&agent, &request, body_limit))
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?
    }
}

fn call(agent: &ureq::Agent, request: &HttpRequest, body_limit: u64) -> Result<HttpResponse, FetchError> {
    let mut builder = agent.get(&request.url);
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    let mut response = builder
        .call()
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();
    if !(200..=299).contains(&status) {
        return Ok(HttpResponse {
            status,
            headers,
            body: Vec::new(),
        });
    }

    let body = response
        .body_mut()
        .with_config()
        .limit(body_limit)
        .read_to_vec()
        .map_err(|e| match e {
            ureq::Error::BodyExceedsLimit(limit) => {
                FetchError::Decode(format!("response body exceeds {limit} bytes"))
            }
            other => FetchError::Transport(other.to_string()),
        })?;

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}
