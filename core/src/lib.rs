//! Client-side access layer for the Mars API.
//!
//! # Overview
//! One operation per backend capability: session (`get_user`, `login_user`,
//! `logout_user`), company and catalog reads (`get_info`, `get_history`,
//! `get_history_event`, `get_rockets`, `get_rocket`, `get_roadster`) and
//! the dispatch queue (`get_sent_to_mars`, `send_to_mars`,
//! `cancel_sending_to_mars`).
//!
//! # Design
//! - `MarsClient` is a stateless codec: `build_*` produces an `HttpRequest`,
//!   `parse_*` interprets an `HttpResponse`. No I/O.
//! - `Client` pairs the codec with a `Transport` and exposes the async
//!   operations. `UreqTransport` is the default transport and owns the
//!   session cookie jar.
//! - JSON operations resolve to `Outcome::Absent` on non-2xx statuses; the
//!   two session text operations always resolve to the body.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod outcome;
pub mod transport;
pub mod types;

pub use api::Client;
pub use client::MarsClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use outcome::Outcome;
pub use transport::{Transport, UreqTransport};
pub use types::{
    About, EventBrief, EventFull, Headquarters, Item, ItemToSend, Roadster, RocketBrief,
    RocketFull, User,
};
