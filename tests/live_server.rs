//! Smoke tests against a running server and persistence service.
//!
//! Run with: cargo test --test live_server -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

fn base_url() -> String {
    std::env::var("LOGIC_BASE_URL").unwrap_or_else(|_| "http://localhost:8080/api".into())
}

async fn get_auth_token(client: &Client, username: &str, password: &str) -> String {
    let response = client
        .post(format!("{}/auth/login", base_url()))
        .json(&json!({ "username": username, "password": password }))
        .send()
        .await
        .expect("Failed to send login request");

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["token"].as_str().expect("No token in response").to_string()
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", base_url()))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_ready_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", base_url()))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_list_books() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books", base_url()))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_register_login_and_me() {
    let client = Client::new();
    let username = format!("smoke{}", chrono::Utc::now().timestamp());

    let response = client
        .post(format!("{}/auth/register", base_url()))
        .json(&json!({
            "fullName": "Smoke Test",
            "email": format!("{}@example.dk", username),
            "phoneNumber": "12345678",
            "username": username,
            "password": "Password1",
            "confirmPassword": "Password1"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);

    let token = get_auth_token(&client, &username, "Password1").await;

    let response = client
        .get(format!("{}/auth/me", base_url()))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["username"], username.as_str());
}
