//! CLI integration tests against a mock Auth API.
//!
//! Each test runs the built binary with an isolated data directory so the
//! stored session never touches the real user profile.

mod common;

use common::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_url(server: &MockServer) -> String {
    format!("{}/api/auth", server.uri())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_profile_without_session_asks_for_login() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    let output = run_cli(&["profile"], home.path(), &api_url(&server)).await;

    assert!(output.status.success());
    assert!(stderr(&output).contains("Please login first"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_login_saves_session() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();
    let api = api_url(&server);

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({
            "email": "alice@example.com",
            "password": "secret123"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "user": {}, "accessToken": "A1", "refreshToken": "R1" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli(
        &["login", "--email", "alice@example.com", "--password", "secret123"],
        home.path(),
        &api,
    )
    .await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Login successful"));

    let stored = read_session(home.path()).expect("session file written");
    assert_eq!(stored["access_token"], "A1");
    assert_eq!(stored["refresh_token"], "R1");
    assert_eq!(stored["api"], api);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_login_failure_shows_server_message() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "message": "Invalid credentials"
        })))
        .mount(&server)
        .await;

    let output = run_cli(
        &["login", "--email", "alice@example.com", "--password", "nope"],
        home.path(),
        &api_url(&server),
    )
    .await;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid credentials"));
    assert!(read_session(home.path()).is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_profile_refreshes_and_persists_rotated_tokens() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();
    let api = api_url(&server);
    write_session(home.path(), &api, "old", "R1");

    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .and(header("authorization", "Bearer old"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh-token"))
        .and(body_json(json!({ "refreshToken": "R1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "accessToken": "new", "refreshToken": "R2" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .and(header("authorization", "Bearer new"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "user": { "email": "alice@example.com" } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli(&["profile"], home.path(), &api).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let user: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(user["email"], "alice@example.com");

    let stored = read_session(home.path()).unwrap();
    assert_eq!(stored["access_token"], "new");
    assert_eq!(stored["refresh_token"], "R2");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_admin_forced_logout_removes_session() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();
    let api = api_url(&server);
    write_session(home.path(), &api, "old", "expired");

    Mock::given(method("GET"))
        .and(path("/api/auth/admin/login-attempts"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh-token"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli(&["admin"], home.path(), &api).await;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("session expired"));
    assert!(!session_file(home.path()).exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_admin_json_report() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();
    let api = api_url(&server);
    write_session(home.path(), &api, "A1", "R1");

    Mock::given(method("GET"))
        .and(path("/api/auth/admin/login-attempts"))
        .and(header("authorization", "Bearer A1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [
                { "email": "a@example.com", "success": true, "createdAt": "2024-03-01T10:00:00Z" },
                { "email": "b@example.com", "success": false, "createdAt": "2024-03-01T12:00:00Z" }
            ]
        })))
        .mount(&server)
        .await;

    let output = run_cli(&["admin", "--json"], home.path(), &api).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["attempts"].as_array().unwrap().len(), 2);
    assert_eq!(report["daily"][0]["date"], "2024-03-01");
    assert_eq!(report["daily"][0]["total"], 2);
    assert_eq!(report["daily"][0]["failed"], 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_logout_removes_session_file() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();
    let api = api_url(&server);
    write_session(home.path(), &api, "A1", "R1");

    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .and(body_json(json!({ "refreshToken": "R1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli(&["logout"], home.path(), &api).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Logged out successfully"));
    assert!(!session_file(home.path()).exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_session_for_other_api_is_ignored() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();
    write_session(home.path(), "https://auth.example.com/api/auth", "A1", "R1");

    let output = run_cli(&["profile"], home.path(), &api_url(&server)).await;

    assert!(output.status.success());
    assert!(stderr(&output).contains("Please login first"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_forgot_password_always_acknowledges() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/auth/forgot-password"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli(
        &["forgot-password", "--email", "nobody@example.com"],
        home.path(),
        &api_url(&server),
    )
    .await;

    assert!(output.status.success());
    assert!(stdout(&output).contains("If this email exists"));
}
