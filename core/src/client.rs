//! Stateless request builder and response interpreter for the Mars API.
//!
//! # Design
//! `MarsClient` holds only a `base_url` and carries no mutable state between
//! calls. Each endpoint is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The transport executes the round-trip in between.
//!
//! Three interpretation policies exist:
//! - session text (`user`, `login`): the body text is returned whatever the
//!   status;
//! - logout: the response is discarded;
//! - JSON: a non-2xx status yields `Outcome::Absent`, otherwise the body is
//!   decoded and a malformed body is a `ClientError::Decode`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::outcome::Outcome;
use crate::types::{
    About, CancelEnvelope, EventBrief, EventFull, Item, ItemToSend, Roadster, RocketBrief,
    RocketFull, SendEnvelope,
};

/// Synchronous, stateless codec for the Mars API.
///
/// An empty base URL produces root-relative paths such as `/api/user/`,
/// which is what a same-origin front end sends.
#[derive(Debug, Clone, Default)]
pub struct MarsClient {
    base_url: String,
}

impl MarsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // -- session --------------------------------------------------------

    pub fn build_get_user(&self) -> HttpRequest {
        self.get("/api/user/")
    }

    pub fn build_login_user(&self, username: &str) -> HttpRequest {
        let path = format!("/api/login/?username={}", urlencoding::encode(username));
        self.bodiless(HttpMethod::Post, &path)
    }

    pub fn build_logout_user(&self) -> HttpRequest {
        self.bodiless(HttpMethod::Post, "/api/logout/")
    }

    pub fn parse_get_user(&self, response: HttpResponse) -> String {
        response.body
    }

    pub fn parse_login_user(&self, response: HttpResponse) -> String {
        response.body
    }

    pub fn parse_logout_user(&self, _response: HttpResponse) {}

    // -- read-only resources --------------------------------------------

    pub fn build_get_info(&self) -> HttpRequest {
        self.get("/api/info/")
    }

    pub fn build_get_history(&self) -> HttpRequest {
        self.get("/api/history/")
    }

    pub fn build_get_history_event(&self, id: u64) -> HttpRequest {
        self.get(&format!("/api/history/event/?id={id}"))
    }

    pub fn build_get_rockets(&self) -> HttpRequest {
        self.get("/api/rockets/")
    }

    pub fn build_get_rocket(&self, id: &str) -> HttpRequest {
        self.get(&format!("/api/rocket/?id={}", urlencoding::encode(id)))
    }

    pub fn build_get_roadster(&self) -> HttpRequest {
        self.get("/api/roadster/")
    }

    pub fn parse_get_info(&self, response: HttpResponse) -> Result<Outcome<About>, ClientError> {
        decode_if_success(response)
    }

    pub fn parse_get_history(
        &self,
        response: HttpResponse,
    ) -> Result<Outcome<Vec<EventBrief>>, ClientError> {
        decode_if_success(response)
    }

    pub fn parse_get_history_event(
        &self,
        response: HttpResponse,
    ) -> Result<Outcome<EventFull>, ClientError> {
        decode_if_success(response)
    }

    pub fn parse_get_rockets(
        &self,
        response: HttpResponse,
    ) -> Result<Outcome<Vec<RocketBrief>>, ClientError> {
        decode_if_success(response)
    }

    pub fn parse_get_rocket(
        &self,
        response: HttpResponse,
    ) -> Result<Outcome<RocketFull>, ClientError> {
        decode_if_success(response)
    }

    pub fn parse_get_roadster(
        &self,
        response: HttpResponse,
    ) -> Result<Outcome<Roadster>, ClientError> {
        decode_if_success(response)
    }

    // -- dispatch -------------------------------------------------------

    pub fn build_get_sent_to_mars(&self) -> HttpRequest {
        self.get("/api/dispatch/")
    }

    pub fn build_send_to_mars(&self, item: &ItemToSend) -> Result<HttpRequest, ClientError> {
        self.with_json(HttpMethod::Post, "/api/dispatch/send/", &SendEnvelope { item })
    }

    /// Only `item.id` is transmitted; the backend looks the item up by id.
    pub fn build_cancel_sending_to_mars(&self, item: &Item) -> Result<HttpRequest, ClientError> {
        self.with_json(
            HttpMethod::Delete,
            "/api/dispatch/cancel/",
            &CancelEnvelope { id: &item.id },
        )
    }

    /// The returned list is the complete dispatch queue, not a delta.
    pub fn parse_get_sent_to_mars(
        &self,
        response: HttpResponse,
    ) -> Result<Outcome<Vec<Item>>, ClientError> {
        decode_if_success(response)
    }

    pub fn parse_send_to_mars(
        &self,
        response: HttpResponse,
    ) -> Result<Outcome<Vec<Item>>, ClientError> {
        decode_if_success(response)
    }

    pub fn parse_cancel_sending_to_mars(
        &self,
        response: HttpResponse,
    ) -> Result<Outcome<Vec<Item>>, ClientError> {
        decode_if_success(response)
    }

    // -- helpers --------------------------------------------------------

    fn get(&self, path: &str) -> HttpRequest {
        self.bodiless(HttpMethod::Get, path)
    }

    fn bodiless(&self, method: HttpMethod, path: &str) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json<B: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        payload: &B,
    ) -> Result<HttpRequest, ClientError> {
        let body = serde_json::to_string(payload)
            .map_err(|e| ClientError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: vec![
                ("Accept".to_string(), "application/json".to_string()),
                ("Content-Type".to_string(), "application/json".to_string()),
            ],
            body: Some(body),
        })
    }
}

/// Decode the body only when the status signals success.
fn decode_if_success<T: DeserializeOwned>(
    response: HttpResponse,
) -> Result<Outcome<T>, ClientError> {
    if !response.is_success() {
        return Ok(Outcome::Absent);
    }
    serde_json::from_str(&response.body)
        .map(Outcome::Success)
        .map_err(|e| ClientError::Decode(e.to_string()))
}
