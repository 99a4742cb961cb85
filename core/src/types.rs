//! Domain DTOs for the Mars API.
//!
//! # Design
//! These types mirror the backend's JSON schema and are defined
//! independently from the mock-server crate; the integration tests catch
//! schema drift. Brief projections carry a strict subset of the fields of
//! their full counterparts. Nested rocket measurements belong to the
//! upstream data source and stay opaque `serde_json::Value`s.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// The session user as reported by `/api/user/` or `/api/login/`.
///
/// Those endpoints answer with plain text; an empty body or a `null`-like
/// literal means nobody is logged in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: Option<String>,
}

impl User {
    pub fn from_session_text(text: &str) -> Self {
        let trimmed = text.trim();
        let username = match trimmed {
            "" | "null" | "undefined" => None,
            name => Some(name.to_string()),
        };
        Self { username }
    }

    pub fn is_logged_in(&self) -> bool {
        self.username.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Headquarters {
    pub address: String,
    pub city: String,
    pub state: String,
}

/// Company profile served by `/api/info/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct About {
    pub founder: String,
    pub founded: String,
    pub employees: u64,
    pub ceo: String,
    pub coo: String,
    pub cto: String,
    pub valuation: f64,
    pub headquarters: Headquarters,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventBrief {
    pub id: u64,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventFull {
    pub id: u64,
    pub title: String,
    pub event_date_utc: String,
    pub details: String,
    pub links: BTreeMap<String, Option<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RocketBrief {
    pub rocket_id: u64,
    pub rocket_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RocketFull {
    pub rocket_id: u64,
    pub rocket_name: String,
    pub first_flight: String,
    pub description: String,
    pub wikipedia: String,
    pub flickr_images: Vec<String>,
    pub height: Value,
    pub diameter: Value,
    pub mass: Value,
    pub engines: Value,
    pub first_stage: Value,
    pub second_stage: Value,
}

/// The roadster in orbit; a singleton resource without an id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Roadster {
    pub name: String,
    pub launch_date_utc: String,
    pub details: String,
    pub earth_distance_km: f64,
    pub mars_distance_km: f64,
    pub wikipedia: String,
}

/// An item in the dispatch queue. `id` is assigned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub important: Option<bool>,
}

/// Payload for sending an item to Mars. Same as `Item` minus the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemToSend {
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub important: Option<bool>,
}

impl ItemToSend {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            weight: None,
            color: None,
            important: None,
        }
    }

    pub fn with_weight(mut self, weight: impl Into<Number>) -> Self {
        self.weight = Some(weight.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_important(mut self, important: bool) -> Self {
        self.important = Some(important);
        self
    }
}

/// Wire envelope for `POST /api/dispatch/send/`.
#[derive(Debug, Serialize)]
pub(crate) struct SendEnvelope<'a> {
    pub item: &'a ItemToSend,
}

/// Wire envelope for `DELETE /api/dispatch/cancel/`. Only the id travels.
#[derive(Debug, Serialize)]
pub(crate) struct CancelEnvelope<'a> {
    pub id: &'a str,
}
