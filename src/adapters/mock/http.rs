//! Mock HTTP client for testing.
//!
//! Responses are matched on the exact URL, optionally narrowed to one method
//! (`GET /users` and `POST /users` share a URL). Every request is recorded.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::traits::{Headers, HttpClient, HttpError, Method, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Headers,
    /// Request body (POST only)
    pub body: Option<String>,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response (any status)
    Success(Response),
    /// Fail at the transport level
    Error(HttpError),
}

impl MockResponse {
    /// A JSON response with the given status.
    pub fn json(status: u16, value: serde_json::Value) -> Self {
        MockResponse::Success(Response::from_json(status, &value))
    }

    /// A 200 response whose body is not JSON.
    pub fn text(body: &str) -> Self {
        MockResponse::Success(Response::new(200, body.to_string()))
    }

    /// A refused connection.
    pub fn refused() -> Self {
        MockResponse::Error(HttpError::ConnectionFailed("connection refused".to_string()))
    }
}

type RouteKey = (Option<Method>, String);

/// Mock HTTP client for testing.
///
/// Clones share configuration and the request log.
///
/// ```ignore
/// let client = MockHttpClient::new();
/// client.set_response(
///     "http://dash.test/counter",
///     MockResponse::json(200, serde_json::json!({"counter": 3})),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    responses: Arc<Mutex<HashMap<RouteKey, MockResponse>>>,
    default_response: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for a URL regardless of method.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        lock(&self.responses).insert((None, url.to_string()), response);
    }

    /// Set a response for one method on a URL. Takes priority over
    /// [`MockHttpClient::set_response`].
    pub fn set_method_response(&self, method: Method, url: &str, response: MockResponse) {
        lock(&self.responses).insert((Some(method), url.to_string()), response);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        *lock(&self.default_response) = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    /// Requests that hit `url` with `method`.
    pub fn requests_to(&self, method: Method, url: &str) -> Vec<RecordedRequest> {
        lock(&self.requests)
            .iter()
            .filter(|r| r.method == method && r.url == url)
            .cloned()
            .collect()
    }

    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    pub fn clear_requests(&self) {
        lock(&self.requests).clear();
    }

    pub fn clear_responses(&self) {
        lock(&self.responses).clear();
    }

    fn record_request(&self, method: Method, url: &str, headers: &Headers, body: Option<String>) {
        lock(&self.requests).push(RecordedRequest {
            method,
            url: url.to_string(),
            headers: headers.clone(),
            body,
        });
    }

    fn find_response(&self, method: Method, url: &str) -> Option<MockResponse> {
        let responses = lock(&self.responses);
        responses
            .get(&(Some(method), url.to_string()))
            .or_else(|| responses.get(&(None, url.to_string())))
            .cloned()
            .or_else(|| lock(&self.default_response).clone())
    }

    fn respond(&self, method: Method, url: &str) -> Result<Response, HttpError> {
        match self.find_response(method, url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!(
                "No mock response for {} {}",
                method, url
            ))),
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request(Method::Get, url, headers, None);
        self.respond(Method::Get, url)
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request(Method::Post, url, headers, Some(body.to_string()));
        self.respond(Method::Post, url)
    }
}
