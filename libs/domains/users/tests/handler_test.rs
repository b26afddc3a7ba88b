//! Handler tests for Users domain
//!
//! Drives the users router with an in-memory repository and a real token issuer.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_helpers::{JwtConfig, TokenIssuer};
use domain_users::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn issuer() -> TokenIssuer {
    TokenIssuer::new(&JwtConfig::new(
        "test-secret-that-is-long-enough-for-hs256",
        300,
    ))
}

fn app(tokens: TokenIssuer) -> Router {
    handlers::router(UserService::new(InMemoryUserRepository::new(), tokens))
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn post_json(app: &Router, uri: &str, payload: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, json_body(response.into_body()).await)
}

#[tokio::test]
async fn test_john_obtains_token() {
    let tokens = issuer();
    let app = app(tokens.clone());

    let (status, user) = post_json(
        &app,
        "/",
        json!({"name": "John", "email": "j@j.com", "password": "123456"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(user["name"], "John");
    assert_eq!(user["email"], "j@j.com");
    assert!(user.get("password").is_none());

    let (status, body) = post_json(
        &app,
        "/generate_token",
        json!({"email": "j@j.com", "password": "123456"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["access_token"].as_str().unwrap();
    assert!(!token.is_empty());
    assert_eq!(tokens.verify(token).unwrap(), user["id"].as_str().unwrap());

    let (status, body) = post_json(
        &app,
        "/generate_token",
        json!({"email": "j@j.com", "password": "wrong"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_token_for_unknown_email_is_not_found() {
    let (status, body) = post_json(
        &app(issuer()),
        "/generate_token",
        json!({"email": "nobody@example.com", "password": "123456"}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_create_user_rejects_bad_bodies() {
    let app = app(issuer());

    for payload in [
        json!({"name": "", "email": "j@j.com", "password": "123456"}),
        json!({"name": "John", "email": "", "password": "123456"}),
        json!({"name": "John", "email": "j@j.com"}),
        json!({"name": 42, "email": "j@j.com", "password": "123456"}),
    ] {
        let (status, body) = post_json(&app, "/", payload.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload {}", payload);
        assert!(body["message"].is_string());
    }
}

#[tokio::test]
async fn test_generate_token_rejects_bad_body() {
    let (status, _) = post_json(&app(issuer()), "/generate_token", json!({"email": "j@j.com"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_duplicate_email_is_internal_error() {
    let app = app(issuer());
    let payload = json!({"name": "John", "email": "j@j.com", "password": "123456"});

    let (status, _) = post_json(&app, "/", payload.clone()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post_json(&app, "/", payload).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    // Storage details stay out of the response
    assert!(!body["message"].as_str().unwrap().contains("j@j.com"));
}
