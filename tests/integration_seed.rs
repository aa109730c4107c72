// utm-tools: UTM developer tools
//
// SPDX-FileCopyrightText: 2026 UTM Marketplace Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the seeding flow using wiremock.
//!
//! Covers:
//! - signup / signin / me / findall request shapes
//! - bearer tokens on authenticated calls
//! - which HTTP failures are logged and which abort the run

use serde_json::json;
use std::time::Duration;
use utm_tools::api::ApiClient;
use utm_tools::config::types::{AccountType, SeedConfig, SeedUser};
use utm_tools::error::UtmError;
use utm_tools::seed::Seeder;
use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn alice() -> SeedUser {
    SeedUser::new(
        "Alice Buyer",
        "alice@example.com",
        "Passw0rd!",
        AccountType::Buyer,
    )
}

fn bob() -> SeedUser {
    SeedUser::new(
        "Bob Seller",
        "bob@example.com",
        "Passw0rd!",
        AccountType::Seller,
    )
}

fn seeder(server: &MockServer, users: Vec<SeedUser>) -> Seeder {
    Seeder::builder()
        .client(ApiClient::new(server.uri()))
        .users(users)
        .settle_delay(Duration::ZERO)
        .build()
}

async fn mount_signup(server: &MockServer, status: u16) {
    Mock::given(method("POST"))
        .and(path("/api/auth/signup"))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({ "id": 1 })))
        .mount(server)
        .await;
}

async fn mount_signin(server: &MockServer, email: &str, token: &str) {
    Mock::given(method("POST"))
        .and(path("/api/auth/signin"))
        .and(body_partial_json(json!({ "email": email })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "accessToken": token })))
        .mount(server)
        .await;
}

async fn mount_me(server: &MockServer, token: &str, id: i64, name: &str) {
    Mock::given(method("GET"))
        .and(path("/api/users/me"))
        .and(header("authorization", format!("Bearer {token}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": id, "name": name })))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_findall(server: &MockServer, status: u16, count: usize) {
    let users: Vec<_> = (0..count).map(|i| json!({ "id": i })).collect();
    Mock::given(method("GET"))
        .and(path("/api/users/findall"))
        .respond_with(ResponseTemplate::new(status).set_body_json(users))
        .expect(1)
        .mount(server)
        .await;
}

// =============================================================================
// Happy path
// =============================================================================

#[tokio::test]
async fn test_seed_all_users() {
    let server = MockServer::start().await;
    mount_signup(&server, 201).await;
    mount_signin(&server, "alice@example.com", "tok-alice").await;
    mount_signin(&server, "bob@example.com", "tok-bob").await;
    mount_me(&server, "tok-alice", 1, "Alice Buyer").await;
    mount_me(&server, "tok-bob", 2, "Bob Seller").await;
    mount_findall(&server, 200, 5).await;

    let report = seeder(&server, vec![alice(), bob()]).run().await.unwrap();

    assert_eq!(report.signed_in(), 2);
    assert_eq!(report.total_users, Some(5));
    assert!(report.users.iter().all(|u| u.signed_up));
    let me = report.users[1].me.as_ref().unwrap();
    assert_eq!(me.id, Some(2));
    assert_eq!(me.name.as_deref(), Some("Bob Seller"));
}

#[tokio::test]
async fn test_signup_body_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/signup"))
        .and(body_json(json!({
            "name": "Bob Seller",
            "email": "bob@example.com",
            "password": "Passw0rd!",
            "accountType": "SELLER"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/signin"))
        .and(body_json(json!({
            "email": "bob@example.com",
            "password": "Passw0rd!"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "accessToken": "t" })))
        .expect(1)
        .mount(&server)
        .await;
    mount_me(&server, "t", 7, "Bob Seller").await;
    mount_findall(&server, 200, 1).await;

    let report = seeder(&server, vec![bob()]).run().await.unwrap();
    assert!(report.users[0].signed_up);
}

#[tokio::test]
async fn test_findall_uses_first_token() {
    let server = MockServer::start().await;
    mount_signup(&server, 201).await;
    mount_signin(&server, "alice@example.com", "tok-alice").await;
    mount_signin(&server, "bob@example.com", "tok-bob").await;
    mount_me(&server, "tok-alice", 1, "Alice Buyer").await;
    mount_me(&server, "tok-bob", 2, "Bob Seller").await;
    Mock::given(method("GET"))
        .and(path("/api/users/findall"))
        .and(header("authorization", "Bearer tok-alice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let report = seeder(&server, vec![alice(), bob()]).run().await.unwrap();
    assert_eq!(report.total_users, Some(0));
}

// =============================================================================
// Tolerated failures
// =============================================================================

#[tokio::test]
async fn test_existing_user_still_signs_in() {
    let server = MockServer::start().await;
    mount_signup(&server, 409).await;
    mount_signin(&server, "alice@example.com", "tok-alice").await;
    mount_me(&server, "tok-alice", 1, "Alice Buyer").await;
    mount_findall(&server, 200, 1).await;

    let report = seeder(&server, vec![alice()]).run().await.unwrap();

    let outcome = &report.users[0];
    assert!(!outcome.signed_up);
    assert!(outcome.signed_in);
    assert!(outcome.me.is_some());
}

#[tokio::test]
async fn test_signin_failure_skips_user() {
    let server = MockServer::start().await;
    mount_signup(&server, 201).await;
    mount_signin(&server, "alice@example.com", "tok-alice").await;
    Mock::given(method("POST"))
        .and(path("/api/auth/signin"))
        .and(body_partial_json(json!({ "email": "bob@example.com" })))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad credentials"))
        .mount(&server)
        .await;
    mount_me(&server, "tok-alice", 1, "Alice Buyer").await;
    mount_findall(&server, 200, 2).await;

    let report = seeder(&server, vec![alice(), bob()]).run().await.unwrap();

    assert_eq!(report.signed_in(), 1);
    assert_eq!(report.users.len(), 2);
    assert!(!report.users[1].signed_in);
    assert!(report.users[1].me.is_none());
}

#[tokio::test]
async fn test_findall_without_token() {
    let server = MockServer::start().await;
    mount_signup(&server, 201).await;
    Mock::given(method("POST"))
        .and(path("/api/auth/signin"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;
    mount_findall(&server, 200, 0).await;

    let report = seeder(&server, vec![alice()]).run().await.unwrap();
    assert_eq!(report.signed_in(), 0);

    let requests = server.received_requests().await.unwrap();
    let findall = requests
        .iter()
        .find(|r| r.url.path() == "/api/users/findall")
        .unwrap();
    assert!(!findall.headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_findall_failure_is_not_fatal() {
    let server = MockServer::start().await;
    mount_signup(&server, 201).await;
    mount_signin(&server, "alice@example.com", "tok-alice").await;
    mount_me(&server, "tok-alice", 1, "Alice Buyer").await;
    mount_findall(&server, 500, 0).await;

    let report = seeder(&server, vec![alice()]).run().await.unwrap();
    assert_eq!(report.signed_in(), 1);
    assert_eq!(report.total_users, None);
}

// =============================================================================
// Fatal failures
// =============================================================================

#[tokio::test]
async fn test_me_failure_aborts() {
    let server = MockServer::start().await;
    mount_signup(&server, 201).await;
    mount_signin(&server, "alice@example.com", "tok-alice").await;
    Mock::given(method("GET"))
        .and(path("/api/users/me"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = seeder(&server, vec![alice()]).run().await.unwrap_err();
    match err {
        UtmError::Network(e) => assert_eq!(e.status(), Some(500)),
        other => panic!("expected network error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_server_aborts() {
    // Nothing listens on port 1.
    let seeder = Seeder::from_config(
        ApiClient::new("http://127.0.0.1:1"),
        &SeedConfig {
            settle_delay_ms: 0,
            users: vec![alice()],
            ..SeedConfig::default()
        },
    );
    let err = seeder.run().await.unwrap_err();
    assert!(matches!(err, UtmError::Network(_)));
}

#[test]
fn test_api_client_trims_trailing_slash() {
    let client = ApiClient::new("http://localhost:8080/");
    assert_eq!(client.base_url(), "http://localhost:8080");
}
