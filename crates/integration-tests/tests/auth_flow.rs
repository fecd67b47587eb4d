//! Login and registration over HTTP.

use reqwest::StatusCode;
use serde_json::{Value, json};
use trufa_integration_tests::TestServer;

async fn login(server: &TestServer, name: &str, password: &str) -> (StatusCode, Value) {
    let resp = server
        .client()
        .post(server.url("/login"))
        .json(&json!({"name": name, "password": password}))
        .send()
        .await
        .expect("Failed to send login");
    let status = resp.status();
    (status, resp.json().await.expect("Login body is not JSON"))
}

#[tokio::test]
async fn test_seeded_accounts_can_log_in() {
    let server = TestServer::start().await;

    let (status, body) = login(&server, "admin", "123456").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["role"], "admin");

    let (status, body) = login(&server, "user", "123456").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 2);
    assert_eq!(body["role"], "user");
    assert_eq!(body["email"], "user@email.com");
}

#[tokio::test]
async fn test_bad_credentials_are_rejected() {
    let server = TestServer::start().await;

    let (status, body) = login(&server, "admin", "654321").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Usuário ou senha incorretos!");

    let (status, _) = login(&server, "ghost", "123456").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_registration_round_trip() {
    let server = TestServer::start().await;
    let payload = json!({
        "name": "joana",
        "password": "trufas",
        "email": "joana@email.com",
        "fullName": "Joana Lima",
        "telephone": "21977776666"
    });

    let resp = server
        .client()
        .post(server.url("/register"))
        .json(&payload)
        .send()
        .await
        .expect("Failed to register");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = server
        .client()
        .post(server.url("/register"))
        .json(&payload)
        .send()
        .await
        .expect("Failed to register twice");
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let (status, body) = login(&server, "joana", "trufas").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 3);
    assert_eq!(body["telephone"], "21977776666");
}

#[tokio::test]
async fn test_registration_requires_all_fields() {
    let server = TestServer::start().await;

    let resp = server
        .client()
        .post(server.url("/register"))
        .json(&json!({"name": "", "password": "x", "email": "x@email.com"}))
        .send()
        .await
        .expect("Failed to register");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Body is not JSON");
    assert_eq!(body["message"], "Preencha todos os campos obrigatórios!");
}
