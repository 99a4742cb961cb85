//! The network seam between `Client` and the backend.
//!
//! # Design
//! A `Transport` executes one `HttpRequest` and hands back the response as
//! data. Every status code, 4xx and 5xx included, is a successful exchange
//! from the transport's point of view; only failures to complete the
//! exchange are errors. Session cookies are the transport's business.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        (**self).send(request).await
    }
}

/// Default transport backed by a `ureq` agent.
///
/// The agent keeps a cookie jar, so a login performed through one
/// `UreqTransport` (or any of its clones) is visible to later calls.
/// Blocking I/O is moved off the async executor with `spawn_blocking`,
/// which requires a Tokio runtime.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UreqTransport").finish_non_exhaustive()
    }
}

#[async_trait]
impl Transport for UreqTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        let agent = self.agent.clone();
        let method = request.method;
        let path = request.path.clone();
        debug!(%method, %path, "sending request");

        let result = tokio::task::spawn_blocking(move || execute(&agent, request))
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?
            .map_err(|e| ClientError::Transport(e.to_string()));

        match &result {
            Ok(response) => debug!(%method, %path, status = response.status, "response received"),
            Err(err) => warn!(%method, %path, error = %err, "transport failure"),
        }
        result
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

fn execute(agent: &ureq::Agent, request: HttpRequest) -> Result<HttpResponse, ureq::Error> {
    let HttpRequest {
        method,
        path,
        headers,
        body,
    } = request;

    let mut response = match (method, body) {
        (HttpMethod::Get, _) => with_headers(agent.get(&path), &headers).call(),
        (HttpMethod::Post, Some(body)) => {
            with_headers(agent.post(&path), &headers).send(body.as_bytes())
        }
        (HttpMethod::Post, None) => with_headers(agent.post(&path), &headers).send_empty(),
        (HttpMethod::Delete, Some(body)) => with_headers(agent.delete(&path), &headers)
            .force_send_body()
            .send(body.as_bytes()),
        (HttpMethod::Delete, None) => with_headers(agent.delete(&path), &headers).call(),
    }?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    let body = response.body_mut().read_to_string()?;

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}
