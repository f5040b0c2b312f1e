//! HTTP-level tests for the authorization gateway

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use storekeep_client::{ClientError, Gateway, SessionStore, UserService};

const TIMEOUT: Duration = Duration::from_secs(5);

async fn gateway_for(server: &MockServer) -> (Gateway, SessionStore, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let session = SessionStore::new(dir.path());
    let gateway = Gateway::new(server.uri(), TIMEOUT, session.clone()).unwrap();
    (gateway, session, dir)
}

#[tokio::test]
async fn bearer_header_is_attached_when_authenticated() {
    let server = MockServer::start().await;
    let (gateway, session, _dir) = gateway_for(&server).await;
    session.set_token("tok123").await.unwrap();

    Mock::given(method("GET"))
        .and(path("/Users"))
        .and(header("Authorization", "Bearer tok123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [],
            "message": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let envelope = UserService::new(gateway).list().await.unwrap();
    assert!(envelope.success);
}

#[tokio::test]
async fn requests_without_token_carry_no_authorization_header() {
    let server = MockServer::start().await;
    let (gateway, _session, _dir) = gateway_for(&server).await;

    Mock::given(method("GET"))
        .and(path("/Users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [],
            "message": null
        })))
        .mount(&server)
        .await;

    UserService::new(gateway).list().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn unauthorized_response_expires_session_and_fails_the_call() {
    let server = MockServer::start().await;
    let (gateway, session, _dir) = gateway_for(&server).await;
    session.set_token("tok123").await.unwrap();

    // The 401 body parses fine as an envelope; the caller must never see it
    Mock::given(method("GET"))
        .and(path("/Users"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "data": null,
            "message": "token expired"
        })))
        .mount(&server)
        .await;

    let result = UserService::new(gateway).list().await;

    assert!(matches!(result, Err(ClientError::SessionExpired)));
    assert!(session.token().is_none());
    assert!(session.login_required());
}

#[tokio::test]
async fn forbidden_response_expires_session_and_fails_the_call() {
    let server = MockServer::start().await;
    let (gateway, session, _dir) = gateway_for(&server).await;
    session.set_token("tok123").await.unwrap();

    Mock::given(method("GET"))
        .and(path("/Users"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&server)
        .await;

    let result = UserService::new(gateway).list().await;

    assert!(matches!(result, Err(ClientError::SessionExpired)));
    assert!(session.token().is_none());
    assert!(session.login_required());
}

#[tokio::test]
async fn non_auth_failure_leaves_session_untouched_and_returns_raw_response() {
    let server = MockServer::start().await;
    let (gateway, session, _dir) = gateway_for(&server).await;
    session.set_token("tok123").await.unwrap();

    Mock::given(method("GET"))
        .and(path("/Users"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let response = gateway.get("/Users").await.unwrap();

    assert_eq!(response.status().as_u16(), 500);
    assert_eq!(response.text().await.unwrap(), "boom");
    assert_eq!(session.token().as_deref(), Some("tok123"));
    assert!(!session.login_required());
}
