//! Boundary tests for the watchlist surface: payload validation and no-op
//! updates must settle before anything reaches the store, so every test
//! here runs against a store nothing can reach (or none at all).

use axum::http::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

mod common;
use common::{build_gateway, dead_store};

#[tokio::test]
async fn create_with_out_of_range_rating_is_rejected_before_the_store() {
    let server = build_gateway(None, Some(dead_store()));

    let response = server
        .post("/api/watchlist")
        .json(&json!({
            "user_id": "u1",
            "tmdb_id": 550,
            "title": "Fight Club",
            "rating": 11
        }))
        .await;

    // The rating constraint fails at deserialization; the dead store is
    // never dialed, so anything but a 4xx means validation leaked through.
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_with_unknown_status_is_rejected() {
    let server = build_gateway(None, Some(dead_store()));

    let response = server
        .post("/api/watchlist")
        .json(&json!({
            "user_id": "u1",
            "tmdb_id": 550,
            "title": "Fight Club",
            "status": "paused"
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn empty_patch_is_a_noop_and_never_touches_the_store() {
    let server = build_gateway(None, Some(dead_store()));

    let response = server
        .patch(&format!("/api/watchlist/{}", Uuid::new_v4()))
        .json(&json!({}))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "no-op");
}

#[tokio::test]
async fn patch_with_out_of_range_rating_is_rejected() {
    let server = build_gateway(None, Some(dead_store()));

    let response = server
        .patch(&format!("/api/watchlist/{}", Uuid::new_v4()))
        .json(&json!({ "rating": 10.5 }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn patch_with_malformed_id_is_rejected() {
    let server = build_gateway(None, Some(dead_store()));

    let response = server
        .patch("/api/watchlist/not-a-uuid")
        .json(&json!({ "liked": true }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_requires_a_user_id() {
    let server = build_gateway(None, Some(dead_store()));

    let response = server.get("/api/watchlist").await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_database_is_a_configuration_error() {
    let server = build_gateway(None, None);

    let response = server
        .get("/api/watchlist")
        .add_query_param("user_id", "u1")
        .await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json();
    assert_eq!(body["error"]["message"], "database is not configured");
}

#[tokio::test]
async fn unreachable_store_surfaces_as_an_error_not_a_hang() {
    let server = build_gateway(None, Some(dead_store()));

    let response = server
        .get("/api/watchlist")
        .add_query_param("user_id", "u1")
        .await;

    // Connection refused from the lazy pool: either classified as
    // unavailable (503) or a generic storage failure (500), never a 2xx.
    assert!(response.status_code().is_server_error());
}
