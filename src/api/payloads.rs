//! Wire shapes of the backend responses.
//!
//! Fields are optional wherever the dashboard has a fallback, so a missing
//! field is not a decode failure.

use serde::Deserialize;
use serde_json::Value;

use crate::models::{HealthSnapshot, User};

/// Backing-store label used when `/health` omits `redis`.
pub const UNKNOWN_STORE_STATUS: &str = "unknown";

/// `GET /health`
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub redis: Option<String>,
    #[serde(default)]
    pub uptime: f64,
}

impl From<HealthResponse> for HealthSnapshot {
    fn from(response: HealthResponse) -> Self {
        HealthSnapshot {
            backing_store: response
                .redis
                .unwrap_or_else(|| UNKNOWN_STORE_STATUS.to_string()),
            uptime_secs: response.uptime,
        }
    }
}

/// `GET /users`
#[derive(Debug, Clone, Deserialize)]
pub struct UsersResponse {
    pub data: Option<Vec<User>>,
}

/// `GET /counter` and `POST /counter/increment`
#[derive(Debug, Clone, Deserialize)]
pub struct CounterResponse {
    pub counter: Option<u64>,
}

/// `POST /users`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserResponse {
    pub success: Option<Value>,
    pub data: Option<User>,
}

impl CreateUserResponse {
    /// `success` is read loosely: `1` or `"yes"` count, `0`, `""` and `null`
    /// do not.
    pub fn succeeded(&self) -> bool {
        self.success.as_ref().is_some_and(is_truthy)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_defaults() {
        let response: HealthResponse = serde_json::from_str("{}").unwrap();
        let snapshot = HealthSnapshot::from(response);
        assert_eq!(snapshot.backing_store, "unknown");
        assert_eq!(snapshot.uptime_secs, 0.0);
    }

    #[test]
    fn test_users_null_data() {
        let response: UsersResponse = serde_json::from_str(r#"{"data":null}"#).unwrap();
        assert!(response.data.is_none());
    }

    #[test]
    fn test_negative_counter_is_rejected() {
        assert!(serde_json::from_str::<CounterResponse>(r#"{"counter":-1}"#).is_err());
    }

    #[test]
    fn test_create_user_success_flag() {
        let ok: CreateUserResponse = serde_json::from_str(
            r#"{"success":true,"data":{"id":9,"name":"Bo","email":"b@x.com"}}"#,
        )
        .unwrap();
        assert!(ok.succeeded());

        let missing: CreateUserResponse = serde_json::from_str(r#"{"data":null}"#).unwrap();
        assert!(!missing.succeeded());
    }

    #[test]
    fn test_success_flag_truthiness() {
        let cases = [
            ("1", true),
            ("\"true\"", true),
            ("{}", true),
            ("[]", true),
            ("-0.5", true),
            ("0", false),
            ("\"\"", false),
            ("null", false),
            ("false", false),
        ];
        for (raw, expected) in cases {
            let body = format!(r#"{{"success":{}}}"#, raw);
            let response: CreateUserResponse = serde_json::from_str(&body).unwrap();
            assert_eq!(response.succeeded(), expected, "success = {}", raw);
        }
    }
}
