//! Shared helpers for route tests.
//!
//! Routes are exercised through `tower::ServiceExt::oneshot` against a
//! router backed by a `MockDatabase`, so no live Postgres is needed.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use finbook_api::{AppState, create_router};
use finbook_shared::jwt::{JwtConfig, JwtService};

pub const TEST_SECRET: &str = "test-secret-key-for-testing";

pub fn jwt_service() -> JwtService {
    JwtService::new(JwtConfig {
        secret: TEST_SECRET.to_string(),
        token_expires_hours: 24,
    })
}

pub fn test_router(db: DatabaseConnection) -> Router {
    create_router(AppState {
        db: Arc::new(db),
        jwt_service: Arc::new(jwt_service()),
    })
}

pub fn token_for(user_id: Uuid) -> String {
    jwt_service()
        .generate_token(user_id)
        .expect("Failed to generate test token")
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

pub fn authed_request(method: &str, uri: &str, token: &str, body: Option<&Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json");

    let body = body.map_or_else(Body::empty, |b| Body::from(b.to_string()));
    builder.body(body).expect("Failed to build request")
}

pub fn bare_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}

/// Sends a request and returns (status, parsed JSON body).
pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.expect("Request failed");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Body was not JSON")
    };
    (status, body)
}
