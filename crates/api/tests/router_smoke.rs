//! Router-level tests that run without a database.
//!
//! The app is built over a lazy pool pointing at a closed port (see
//! `common::build_test_app`), so these tests exercise routing, the
//! middleware stack, authentication extractors, and handler-side validation
//! -- everything that rejects a request before the store is reached -- plus
//! the transport-error path for a handler that does reach it.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use gladiator_api::auth::jwt::generate_access_token;
use http_body_util::BodyExt;
use tower::ServiceExt;

use common::{build_test_app, test_config};

/// Issue a request against a fresh app instance and return status + JSON body.
async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let app = build_test_app();
    let response = app.oneshot(request).await.expect("request should complete");
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };
    (status, json)
}

/// Bearer token for a user of the given type, signed with the test secret.
fn token_for(user_id: i64, user_type: &str) -> String {
    let config = test_config();
    generate_access_token(user_id, user_type, &config.jwt).expect("token generation")
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_reports_degraded_without_database() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let (status, json) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
}

// ---------------------------------------------------------------------------
// Authentication extractor
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_token_is_rejected() {
    let request = Request::builder()
        .uri("/api/v1/messages")
        .body(Body::empty())
        .unwrap();

    let (status, json) = send(request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn malformed_authorization_header_is_rejected() {
    let request = Request::builder()
        .uri("/api/v1/messages")
        .header("Authorization", "Token not-a-bearer")
        .body(Body::empty())
        .unwrap();

    let (status, json) = send(request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    let request = Request::builder()
        .uri("/api/v1/messages")
        .header("Authorization", "Bearer not.a.jwt")
        .body(Body::empty())
        .unwrap();

    let (status, json) = send(request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
}

// ---------------------------------------------------------------------------
// Role enforcement
// ---------------------------------------------------------------------------

#[tokio::test]
async fn professionals_cannot_submit_reviews() {
    let token = token_for(7, "professional");
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/reviews")
        .header("Authorization", format!("Bearer {token}"))
        .header("Content-Type", "application/json")
        .body(Body::from(
            r#"{"professional_id": 1, "rating": 5, "comment": null}"#,
        ))
        .unwrap();

    let (status, json) = send(request).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["code"], "FORBIDDEN");
}

#[tokio::test]
async fn clients_cannot_create_portfolio_items() {
    let token = token_for(7, "client");
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/portfolio")
        .header("Authorization", format!("Bearer {token}"))
        .header("Content-Type", "application/json")
        .body(Body::from(r#"{"title": "My project"}"#))
        .unwrap();

    let (status, json) = send(request).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["code"], "FORBIDDEN");
}

// ---------------------------------------------------------------------------
// Handler-side validation (runs before any store access)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn zero_rating_is_rejected_before_the_store() {
    let token = token_for(7, "client");
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/reviews")
        .header("Authorization", format!("Bearer {token}"))
        .header("Content-Type", "application/json")
        .body(Body::from(r#"{"professional_id": 1, "rating": 0}"#))
        .unwrap();

    let (status, json) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn non_positive_payment_amount_is_rejected() {
    let token = token_for(7, "client");
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/transactions")
        .header("Authorization", format!("Bearer {token}"))
        .header("Content-Type", "application/json")
        .body(Body::from(r#"{"professional_id": 1, "amount": -10.0}"#))
        .unwrap();

    let (status, json) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn unknown_feedback_kind_is_rejected() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/feedback")
        .header("Content-Type", "application/json")
        .body(Body::from(
            r#"{"kind": "praise", "title": "t", "description": "d"}"#,
        ))
        .unwrap();

    let (status, json) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn empty_message_body_is_rejected() {
    let token = token_for(7, "client");
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/messages")
        .header("Authorization", format!("Bearer {token}"))
        .header("Content-Type", "application/json")
        .body(Body::from(r#"{"recipient_id": 2, "body": "   "}"#))
        .unwrap();

    let (status, json) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Transport failure surfaces as 503, not a crash
// ---------------------------------------------------------------------------

#[tokio::test]
async fn directory_search_reports_transport_error_when_store_unreachable() {
    let request = Request::builder()
        .uri("/api/v1/professionals?category=all&sort_by=newest")
        .body(Body::empty())
        .unwrap();

    let (status, json) = send(request).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["code"], "TRANSPORT_ERROR");
}

// ---------------------------------------------------------------------------
// Unknown routes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let request = Request::builder()
        .uri("/api/v1/does-not-exist")
        .body(Body::empty())
        .unwrap();

    let (status, _) = send(request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
