//! HTTP contract tests using wiremock.
//!
//! These tests verify that `DashboardApi` over the real reqwest adapter
//! issues the expected requests and maps responses and failures.

use devdash::api::DashboardApi;
use devdash::error::ApiError;
use devdash::models::{HealthSnapshot, User};
use devdash::state::DraftUser;
use wiremock::matchers::{body_json, body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn api_for(server: &MockServer) -> DashboardApi {
    DashboardApi::with_reqwest(server.uri())
}

#[tokio::test]
async fn test_health_success() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"redis": "connected", "uptime": 125.7})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let snapshot = api_for(&mock_server).await.health().await.unwrap();

    assert_eq!(snapshot, HealthSnapshot::new("connected", 125.7));
    assert_eq!(snapshot.uptime_display(), "126s");
}

#[tokio::test]
async fn test_users_list() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                {"id": 1, "name": "Ana", "email": "a@x.com"},
                {"id": "u-2", "name": "Bo", "email": "b@x.com"}
            ]
        })))
        .mount(&mock_server)
        .await;

    let users = api_for(&mock_server).await.users().await.unwrap();

    assert_eq!(
        users,
        vec![User::new(1, "Ana", "a@x.com"), User::new("u-2", "Bo", "b@x.com")]
    );
}

#[tokio::test]
async fn test_counter_and_increment() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/counter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"counter": 3})))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/counter/increment"))
        .and(body_string(""))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"counter": 4})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server).await;
    assert_eq!(api.counter().await.unwrap(), 3);
    assert_eq!(api.increment_counter().await.unwrap(), Some(4));
}

#[tokio::test]
async fn test_create_user_posts_json() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(serde_json::json!({"name": "Bo", "email": "b@x.com"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "success": true,
            "data": {"id": 2, "name": "Bo", "email": "b@x.com"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let user = api_for(&mock_server)
        .await
        .create_user(&DraftUser::new("Bo", "b@x.com"))
        .await
        .unwrap();

    assert_eq!(user, User::new(2, "Bo", "b@x.com"));
}

#[tokio::test]
async fn test_create_user_rejected() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"success": false, "error": "Email exists"})),
        )
        .mount(&mock_server)
        .await;

    let err = api_for(&mock_server)
        .await
        .create_user(&DraftUser::new("Bo", "b@x.com"))
        .await
        .unwrap_err();

    assert_eq!(err, ApiError::Rejected);
}

#[tokio::test]
async fn test_server_error_status_still_decodes_body() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(serde_json::json!({"error": "db down"})),
        )
        .mount(&mock_server)
        .await;

    let users = api_for(&mock_server).await.users().await.unwrap();

    assert!(users.is_empty());
}

#[tokio::test]
async fn test_degraded_health_with_503() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(503)
                .set_body_json(serde_json::json!({"redis": "disconnected", "uptime": 12.0})),
        )
        .mount(&mock_server)
        .await;

    let snapshot = api_for(&mock_server).await.health().await.unwrap();

    assert_eq!(snapshot, HealthSnapshot::new("disconnected", 12.0));
}

#[tokio::test]
async fn test_non_json_body() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
        .mount(&mock_server)
        .await;

    let err = api_for(&mock_server).await.health().await.unwrap_err();

    assert!(matches!(err, ApiError::Decode { .. }), "got {:?}", err);
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Start and drop a server so the port is known to be closed
    let uri = {
        let mock_server = MockServer::start().await;
        mock_server.uri()
    };

    let err = DashboardApi::with_reqwest(uri).counter().await.unwrap_err();

    assert!(err.is_transport(), "got {:?}", err);
}
