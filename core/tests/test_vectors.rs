//! Verify every `Client` operation against JSON test vectors stored in
//! `test-vectors/`.
//!
//! Each vector file describes the operation input, the request the client
//! must issue, a simulated response and the expected outcome. A recording
//! transport replays the simulated response and captures the request.
//! Bodies and results are compared as parsed JSON or typed values, never as
//! raw strings, to avoid false negatives from field ordering.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use mars_client::{
    Client, ClientError, HttpMethod, HttpRequest, HttpResponse, Item, ItemToSend, Outcome,
    Transport,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Replays one canned response and records every request it receives.
struct RecordingTransport {
    status: u16,
    body: String,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingTransport {
    fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        self.requests.lock().unwrap().push(request);
        Ok(HttpResponse {
            status: self.status,
            headers: Vec::new(),
            body: self.body.clone(),
        })
    }
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn check_outcome<T>(name: &str, outcome: Outcome<T>, case: &Value)
where
    T: DeserializeOwned + PartialEq + Debug,
{
    if case["expected_absent"].as_bool().unwrap_or(false) {
        assert!(outcome.is_absent(), "{name}: expected absence, got {outcome:?}");
        return;
    }
    let expected: T = serde_json::from_value(case["expected_result"].clone()).unwrap();
    assert_eq!(outcome, Outcome::Success(expected), "{name}: parsed result");
}

fn check_request(name: &str, requests: &[HttpRequest], case: &Value) {
    assert_eq!(requests.len(), 1, "{name}: exactly one exchange");
    let req = &requests[0];
    let expected_req = &case["expected_request"];

    assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.path, expected_req["path"].as_str().unwrap(), "{name}: path");

    let expected_headers: Vec<(String, String)> = expected_req["headers"]
        .as_array()
        .map(|headers| {
            headers
                .iter()
                .map(|h| {
                    let arr = h.as_array().unwrap();
                    (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
                })
                .collect()
        })
        .unwrap_or_default();
    assert_eq!(req.headers, expected_headers, "{name}: headers");

    if expected_req["body"].is_null() {
        assert!(req.body.is_none(), "{name}: body should be None");
    } else {
        let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, expected_req["body"], "{name}: body");
    }
}

async fn run_case(case: &Value) {
    let name = case["name"].as_str().unwrap();
    let sim = &case["simulated_response"];
    let transport = Arc::new(RecordingTransport::new(
        sim["status"].as_u64().unwrap() as u16,
        sim["body"].as_str().unwrap(),
    ));
    // Empty base URL: the same-origin, root-relative form.
    let client = Client::new("", transport.clone());
    let input = &case["input"];

    match case["operation"].as_str().unwrap() {
        "get_user" => {
            let text = client.get_user().await.unwrap();
            assert_eq!(text, case["expected_result"].as_str().unwrap(), "{name}: text");
        }
        "login_user" => {
            let text = client.login_user(input.as_str().unwrap()).await.unwrap();
            assert_eq!(text, case["expected_result"].as_str().unwrap(), "{name}: text");
        }
        "logout_user" => client.logout_user().await.unwrap(),
        "get_info" => check_outcome(name, client.get_info().await.unwrap(), case),
        "get_history" => check_outcome(name, client.get_history().await.unwrap(), case),
        "get_history_event" => {
            let outcome = client.get_history_event(input.as_u64().unwrap()).await.unwrap();
            check_outcome(name, outcome, case);
        }
        "get_rockets" => check_outcome(name, client.get_rockets().await.unwrap(), case),
        "get_rocket" => {
            let outcome = client.get_rocket(input.as_str().unwrap()).await.unwrap();
            check_outcome(name, outcome, case);
        }
        "get_roadster" => check_outcome(name, client.get_roadster().await.unwrap(), case),
        "get_sent_to_mars" => check_outcome(name, client.get_sent_to_mars().await.unwrap(), case),
        "send_to_mars" => {
            let item: ItemToSend = serde_json::from_value(input.clone()).unwrap();
            check_outcome(name, client.send_to_mars(&item).await.unwrap(), case);
        }
        "cancel_sending_to_mars" => {
            let item: Item = serde_json::from_value(input.clone()).unwrap();
            check_outcome(name, client.cancel_sending_to_mars(&item).await.unwrap(), case);
        }
        other => panic!("{name}: unknown operation: {other}"),
    }

    check_request(name, &transport.requests(), case);
}

async fn run_file(raw: &str) {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    for case in vectors["cases"].as_array().unwrap() {
        run_case(case).await;
    }
}

// ---------------------------------------------------------------------------
// Vector files
// ---------------------------------------------------------------------------

#[tokio::test]
async fn session_test_vectors() {
    run_file(include_str!("../../test-vectors/session.json")).await;
}

#[tokio::test]
async fn catalog_test_vectors() {
    run_file(include_str!("../../test-vectors/catalog.json")).await;
}

#[tokio::test]
async fn dispatch_test_vectors() {
    run_file(include_str!("../../test-vectors/dispatch.json")).await;
}

// ---------------------------------------------------------------------------
// Decode failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_success_body_is_decode_error() {
    let client = Client::new("", RecordingTransport::new(200, "{\"founder\":"));
    let err = client.get_info().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn wrong_shape_success_body_is_decode_error() {
    let client = Client::new("", RecordingTransport::new(200, r#"{"id":1}"#));
    let err = client.get_sent_to_mars().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

/// Answers by path, after a per-path delay, so completion order can be
/// forced to differ from issue order.
struct RoutedTransport {
    routes: HashMap<String, (Duration, String)>,
}

#[async_trait]
impl Transport for RoutedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        let (delay, body) = self
            .routes
            .get(&request.path)
            .cloned()
            .ok_or_else(|| ClientError::Transport(format!("no route for {}", request.path)))?;
        tokio::time::sleep(delay).await;
        Ok(HttpResponse {
            status: 200,
            headers: Vec::new(),
            body,
        })
    }
}

#[tokio::test]
async fn concurrent_calls_resolve_independently() {
    let info = r#"{"founder":"Elon Musk","founded":"2002","employees":7000,"ceo":"a","coo":"b","cto":"c","valuation":1,"headquarters":{"address":"x","city":"y","state":"z"},"summary":"s"}"#;
    let rockets = r#"[{"rocket_id":1,"rocket_name":"Falcon 1"},{"rocket_id":2,"rocket_name":"Falcon 9"}]"#;

    let routes = HashMap::from([
        // Rockets is issued first but finishes last.
        ("/api/rockets/".to_string(), (Duration::from_millis(50), rockets.to_string())),
        ("/api/info/".to_string(), (Duration::from_millis(5), info.to_string())),
    ]);
    let client = Client::new("", RoutedTransport { routes });

    let (rockets, info) = tokio::join!(client.get_rockets(), client.get_info());

    let rockets = rockets.unwrap().into_option().unwrap();
    assert_eq!(rockets.len(), 2);
    assert_eq!(rockets[1].rocket_name, "Falcon 9");

    let info = info.unwrap().into_option().unwrap();
    assert_eq!(info.founder, "Elon Musk");
    assert_eq!(info.headquarters.city, "y");
}
