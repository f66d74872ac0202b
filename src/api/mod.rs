//! Typed client for the dashboard backend.
//!
//! Each method issues exactly one request and returns a typed result. The
//! methods do not touch UI state; [`crate::app::App`] decides what a result
//! means for the store.

pub mod payloads;

use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::adapters::ReqwestHttpClient;
use crate::error::ApiError;
use crate::models::{HealthSnapshot, User};
use crate::state::DraftUser;
use crate::traits::{Headers, HttpClient, Response};

use payloads::{CounterResponse, CreateUserResponse, HealthResponse, UsersResponse};

pub const HEALTH_PATH: &str = "/health";
pub const USERS_PATH: &str = "/users";
pub const COUNTER_PATH: &str = "/counter";
pub const INCREMENT_PATH: &str = "/counter/increment";

/// Backend client bound to one base URL.
#[derive(Clone)]
pub struct DashboardApi {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for DashboardApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardApi")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl DashboardApi {
    /// `base_url` must already be normalized (no trailing slash).
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    /// Client backed by reqwest.
    pub fn with_reqwest(base_url: impl Into<String>) -> Self {
        Self::new(base_url, Arc::new(ReqwestHttpClient::new()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// The status code does not decide success: an error status with a
    /// readable body is decoded like any other reply.
    fn decode<T: DeserializeOwned>(path: &str, response: &Response) -> Result<T, ApiError> {
        if !response.is_success() {
            warn!(path, status = response.status, "backend answered with an error status");
        }
        response.json().map_err(|e| ApiError::Decode {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.http.get(&self.url(path), &Headers::new()).await?;
        debug!(path, status = response.status, "GET settled");
        Self::decode(path, &response)
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &str,
        headers: &Headers,
    ) -> Result<T, ApiError> {
        let response = self.http.post(&self.url(path), body, headers).await?;
        debug!(path, status = response.status, "POST settled");
        Self::decode(path, &response)
    }

    /// `GET /health`. Any decodable body counts as connected.
    pub async fn health(&self) -> Result<HealthSnapshot, ApiError> {
        let response: HealthResponse = self.get_json(HEALTH_PATH).await?;
        Ok(response.into())
    }

    /// `GET /users`. A missing `data` field is an empty list.
    pub async fn users(&self) -> Result<Vec<User>, ApiError> {
        let response: UsersResponse = self.get_json(USERS_PATH).await?;
        Ok(response.data.unwrap_or_default())
    }

    /// `GET /counter`. A missing `counter` field reads as 0.
    pub async fn counter(&self) -> Result<u64, ApiError> {
        let response: CounterResponse = self.get_json(COUNTER_PATH).await?;
        Ok(response.counter.unwrap_or(0))
    }

    /// `POST /counter/increment` with no body. `Ok(None)` when the response
    /// carries no counter.
    pub async fn increment_counter(&self) -> Result<Option<u64>, ApiError> {
        let response: CounterResponse = self
            .post_json(INCREMENT_PATH, "", &Headers::new())
            .await?;
        Ok(response.counter)
    }

    /// `POST /users` with the draft as JSON. A falsy `success` or a missing
    /// record is an error.
    pub async fn create_user(&self, draft: &DraftUser) -> Result<User, ApiError> {
        let body = serde_json::to_string(draft).map_err(|e| ApiError::Encode {
            path: USERS_PATH.to_string(),
            message: e.to_string(),
        })?;
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        let response: CreateUserResponse = self.post_json(USERS_PATH, &body, &headers).await?;
        if !response.succeeded() {
            return Err(ApiError::Rejected);
        }
        response.data.ok_or_else(|| ApiError::MissingRecord {
            path: USERS_PATH.to_string(),
        })
    }
}
