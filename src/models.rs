//! Domain records shared by the API client, the state store and the view.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque user identifier. The backend may use numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(n) => write!(f, "{}", n),
            UserId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for UserId {
    fn from(n: i64) -> Self {
        UserId::Number(n)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        UserId::Text(s.to_string())
    }
}

/// A user record as returned by the backend. Never mutated once received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl User {
    pub fn new(id: impl Into<UserId>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Result of the last successful health probe. Its presence is what
/// "connected" means.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthSnapshot {
    /// Status string of the backend's store (the `redis` field)
    pub backing_store: String,
    /// Backend uptime in seconds, fractional
    pub uptime_secs: f64,
}

impl HealthSnapshot {
    pub fn new(backing_store: impl Into<String>, uptime_secs: f64) -> Self {
        Self {
            backing_store: backing_store.into(),
            uptime_secs,
        }
    }

    /// Uptime rounded to the nearest whole second.
    pub fn rounded_uptime(&self) -> i64 {
        self.uptime_secs.round() as i64
    }

    /// Uptime as shown in the status panel, e.g. `126s`.
    pub fn uptime_display(&self) -> String {
        format!("{}s", self.rounded_uptime())
    }
}
