//! Common test utilities for integration tests.
//!
//! Fixtures for the three mount-time endpoints, an `App` wired to a
//! `MockHttpClient`, and a helper that feeds settlements back into the app
//! the way the event loop does.

#![allow(dead_code)]

use std::sync::Arc;

use devdash::adapters::mock::{MockHttpClient, MockResponse};
use devdash::api::DashboardApi;
use devdash::app::{App, AppMessage};
use serde_json::{json, Value};
use tokio::sync::mpsc::UnboundedReceiver;

pub const BASE: &str = "http://dash.test";

pub fn url(path: &str) -> String {
    format!("{}{}", BASE, path)
}

pub fn health_body() -> Value {
    json!({"redis": "connected", "uptime": 125.7})
}

pub fn users_body() -> Value {
    json!({"data": [{"id": 1, "name": "Ana", "email": "a@x.com"}]})
}

pub fn counter_body(value: u64) -> Value {
    json!({"counter": value})
}

/// Mock client answering the three mount-time GETs with the standard
/// fixtures.
pub fn healthy_client() -> MockHttpClient {
    let client = MockHttpClient::new();
    client.set_response(&url("/health"), MockResponse::json(200, health_body()));
    client.set_response(&url("/users"), MockResponse::json(200, users_body()));
    client.set_response(&url("/counter"), MockResponse::json(200, counter_body(3)));
    client
}

/// Mock client refusing every request.
pub fn unreachable_client() -> MockHttpClient {
    let client = MockHttpClient::new();
    client.set_default_response(MockResponse::refused());
    client
}

/// App bound to `client`, with its message receiver taken out.
pub fn app_with(client: &MockHttpClient) -> (App, UnboundedReceiver<AppMessage>) {
    let mut app = App::new(Arc::new(DashboardApi::new(BASE, Arc::new(client.clone()))));
    let rx = app
        .message_rx
        .take()
        .expect("fresh app owns its receiver");
    (app, rx)
}

/// Wait for `n` settlements and apply them in arrival order.
pub async fn settle(app: &mut App, rx: &mut UnboundedReceiver<AppMessage>, n: usize) {
    for _ in 0..n {
        let msg = rx.recv().await.expect("request task settles");
        app.handle_message(msg);
    }
}
