use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use cinegate_model::{
    UpdateOutcome, WatchStatus, WatchlistCreate, WatchlistUpdate,
};

use crate::errors::AppResult;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct WatchlistQuery {
    user_id: String,
    #[serde(default)]
    status: Option<WatchStatus>,
}

pub async fn get_watchlist_handler(
    State(state): State<AppState>,
    Query(query): Query<WatchlistQuery>,
) -> AppResult<Json<Value>> {
    let items = state
        .store()?
        .list(&query.user_id, query.status)
        .await?;
    Ok(Json(json!({ "results": items })))
}

pub async fn add_watchlist_item_handler(
    State(state): State<AppState>,
    Json(payload): Json<WatchlistCreate>,
) -> AppResult<Json<Value>> {
    // Enum and rating constraints were already enforced while
    // deserializing the payload; nothing invalid reaches the store.
    let id = state.store()?.create(payload).await?;
    Ok(Json(json!({ "id": id, "status": "ok" })))
}

pub async fn update_watchlist_item_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<WatchlistUpdate>,
) -> AppResult<Json<Value>> {
    match state.store()?.update(id, payload).await? {
        UpdateOutcome::Updated => Ok(Json(json!({ "status": "ok" }))),
        // An empty payload is trivially successful and touches nothing.
        UpdateOutcome::NoOp => Ok(Json(json!({ "status": "no-op" }))),
    }
}

pub async fn delete_watchlist_item_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Value>> {
    state.store()?.delete(id).await?;
    info!("deleted watchlist item {id}");
    Ok(Json(json!({ "status": "ok" })))
}
