use axum::{extract::State, response::Json};
use serde_json::{json, Value};
use tracing::warn;

use crate::AppState;

pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "cinegate gateway is running" }))
}

pub async fn hello_handler() -> Json<Value> {
    Json(json!({ "message": "hello from the cinegate api" }))
}

/// Liveness/readiness probe. Unlike the watchlist surface, a missing or
/// unreachable store degrades to a report here instead of an error.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let database = match &state.store {
        None => json!({ "configured": false, "connected": false }),
        Some(store) => match store.ping().await {
            Ok(()) => json!({ "configured": true, "connected": true }),
            Err(err) => {
                warn!("health probe could not reach the store: {err}");
                json!({ "configured": true, "connected": false })
            }
        },
    };

    Json(json!({
        "service": "cinegate",
        "version": env!("CARGO_PKG_VERSION"),
        "upstream_configured": state.tmdb.is_some(),
        "database": database,
    }))
}
