//! In-memory stand-in for the Mars API backend.
//!
//! Serves the same-origin `/api/...` routes with fixed catalog data, a
//! cookie-based session and a mutable dispatch queue.

mod config;
mod seed;

use std::{collections::BTreeMap, collections::HashMap, sync::Arc};

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

pub use config::ServerConfig;
pub use seed::Catalog;

pub const SESSION_COOKIE: &str = "session";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Headquarters {
    pub address: String,
    pub city: String,
    pub state: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
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

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EventBrief {
    pub id: u64,
    pub title: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EventFull {
    pub id: u64,
    pub title: String,
    pub event_date_utc: String,
    pub details: String,
    pub links: BTreeMap<String, Option<String>>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RocketBrief {
    pub rocket_id: u64,
    pub rocket_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
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

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Roadster {
    pub name: String,
    pub launch_date_utc: String,
    pub details: String,
    pub earth_distance_km: f64,
    pub mars_distance_km: f64,
    pub wikipedia: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub important: Option<bool>,
}

#[derive(Deserialize)]
pub struct NewItem {
    pub name: String,
    pub phone: String,
    pub weight: Option<Number>,
    pub color: Option<String>,
    pub important: Option<bool>,
}

#[derive(Deserialize)]
pub struct SendRequest {
    pub item: NewItem,
}

#[derive(Deserialize)]
pub struct CancelRequest {
    pub id: String,
}

#[derive(Deserialize)]
pub struct LoginParams {
    pub username: String,
}

#[derive(Deserialize)]
pub struct EventParams {
    pub id: u64,
}

#[derive(Deserialize)]
pub struct RocketParams {
    pub id: String,
}

#[derive(Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
    sessions: Arc<RwLock<HashMap<String, String>>>,
    dispatch: Arc<RwLock<Vec<Item>>>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            sessions: Arc::default(),
            dispatch: Arc::default(),
        }
    }
}

pub fn app() -> Router {
    router(AppState::new(Catalog::seeded()))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/user/", get(get_user))
        .route("/api/login/", post(login_user))
        .route("/api/logout/", post(logout_user))
        .route("/api/info/", get(get_info))
        .route("/api/history/", get(get_history))
        .route("/api/history/event/", get(get_history_event))
        .route("/api/rockets/", get(get_rockets))
        .route("/api/rocket/", get(get_rocket))
        .route("/api/roadster/", get(get_roadster))
        .route("/api/dispatch/", get(list_dispatch))
        .route("/api/dispatch/send/", post(send_item))
        .route("/api/dispatch/cancel/", delete(cancel_item))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
}

// --- session ---

/// Username of the caller's session, or an empty body when there is none.
async fn get_user(State(state): State<AppState>, headers: HeaderMap) -> String {
    let Some(token) = session_token(&headers) else {
        return String::new();
    };
    state
        .sessions
        .read()
        .await
        .get(&token)
        .cloned()
        .unwrap_or_default()
}

/// Starts a new session. A session cookie already held by the caller is
/// retired so its token no longer resolves.
async fn login_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<LoginParams>,
) -> impl IntoResponse {
    let token = Uuid::new_v4().to_string();
    let mut sessions = state.sessions.write().await;
    if let Some(previous) = session_token(&headers) {
        sessions.remove(&previous);
    }
    sessions.insert(token.clone(), params.username.clone());
    drop(sessions);
    info!(username = %params.username, "user logged in");
    (
        [(
            header::SET_COOKIE,
            format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly"),
        )],
        params.username,
    )
}

async fn logout_user(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(token) = session_token(&headers) {
        if let Some(username) = state.sessions.write().await.remove(&token) {
            info!(%username, "user logged out");
        }
    }
    [(
        header::SET_COOKIE,
        format!("{SESSION_COOKIE}=; Path=/; Max-Age=0"),
    )]
}

// --- catalog ---

async fn get_info(State(state): State<AppState>) -> Json<About> {
    Json(state.catalog.about.clone())
}

async fn get_history(State(state): State<AppState>) -> Json<Vec<EventBrief>> {
    let events = state
        .catalog
        .events
        .iter()
        .map(|event| EventBrief {
            id: event.id,
            title: event.title.clone(),
        })
        .collect();
    Json(events)
}

async fn get_history_event(
    State(state): State<AppState>,
    Query(params): Query<EventParams>,
) -> Result<Json<EventFull>, StatusCode> {
    state
        .catalog
        .events
        .iter()
        .find(|event| event.id == params.id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn get_rockets(State(state): State<AppState>) -> Json<Vec<RocketBrief>> {
    let rockets = state
        .catalog
        .rockets
        .iter()
        .map(|rocket| RocketBrief {
            rocket_id: rocket.rocket_id,
            rocket_name: rocket.rocket_name.clone(),
        })
        .collect();
    Json(rockets)
}

async fn get_rocket(
    State(state): State<AppState>,
    Query(params): Query<RocketParams>,
) -> Result<Json<RocketFull>, StatusCode> {
    state
        .catalog
        .rockets
        .iter()
        .find(|rocket| rocket.rocket_id.to_string() == params.id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn get_roadster(State(state): State<AppState>) -> Json<Roadster> {
    Json(state.catalog.roadster.clone())
}

// --- dispatch ---

async fn list_dispatch(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.dispatch.read().await.clone())
}

async fn send_item(
    State(state): State<AppState>,
    Json(input): Json<SendRequest>,
) -> Json<Vec<Item>> {
    let NewItem {
        name,
        phone,
        weight,
        color,
        important,
    } = input.item;
    let item = Item {
        id: Uuid::new_v4().to_string(),
        name,
        phone,
        weight,
        color,
        important,
    };
    info!(id = %item.id, name = %item.name, "item dispatched");
    let mut dispatch = state.dispatch.write().await;
    dispatch.push(item);
    Json(dispatch.clone())
}

async fn cancel_item(
    State(state): State<AppState>,
    Json(input): Json<CancelRequest>,
) -> Result<Json<Vec<Item>>, StatusCode> {
    let mut dispatch = state.dispatch.write().await;
    let index = dispatch
        .iter()
        .position(|item| item.id == input.id)
        .ok_or(StatusCode::NOT_FOUND)?;
    dispatch.remove(index);
    info!(id = %input.id, "dispatch cancelled");
    Ok(Json(dispatch.clone()))
}
