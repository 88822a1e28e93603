use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use cinegate_core::normalize::{normalize_detail, normalize_list_item};
use cinegate_core::providers::tmdb::RawListRecord;
use cinegate_core::GatewayError;
use cinegate_model::{CanonicalItem, CanonicalItemDetail, MediaType};

use crate::errors::{AppError, AppResult};
use crate::AppState;

pub async fn trending_handler(
    State(state): State<AppState>,
) -> AppResult<Json<Value>> {
    let records = state.tmdb()?.trending().await?;
    Ok(results_response(&state, records))
}

pub async fn top_rated_handler(
    State(state): State<AppState>,
) -> AppResult<Json<Value>> {
    let records = state.tmdb()?.top_rated_movies().await?;
    Ok(results_response(&state, records))
}

pub async fn popular_tv_handler(
    State(state): State<AppState>,
) -> AppResult<Json<Value>> {
    let records = state.tmdb()?.popular_tv().await?;
    Ok(results_response(&state, records))
}

pub async fn upcoming_handler(
    State(state): State<AppState>,
) -> AppResult<Json<Value>> {
    let records = state.tmdb()?.upcoming_movies().await?;
    Ok(results_response(&state, records))
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    q: String,
    #[serde(default)]
    year: Option<i32>,
}

pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Value>> {
    if params.q.is_empty() {
        return Err(GatewayError::Validation(
            "query must not be empty".to_string(),
        )
        .into());
    }

    let mut records =
        state.tmdb()?.search_multi(&params.q, params.year).await?;
    // Multi search also returns people; only titles survive.
    records.retain(RawListRecord::is_movie_or_tv);
    info!("search `{}` matched {} titles", params.q, records.len());

    Ok(results_response(&state, records))
}

pub async fn title_details_handler(
    State(state): State<AppState>,
    Path((media_type, id)): Path<(String, i64)>,
) -> AppResult<Json<CanonicalItemDetail>> {
    let media_type: MediaType = media_type.parse().map_err(|_| {
        AppError::bad_request("media type must be `movie` or `tv`")
    })?;

    let raw = state.tmdb()?.details(media_type, id).await?;
    Ok(Json(normalize_detail(&state.images, raw)))
}

fn results_response(
    state: &AppState,
    records: Vec<RawListRecord>,
) -> Json<Value> {
    let results: Vec<CanonicalItem> = records
        .into_iter()
        .map(|record| normalize_list_item(&state.images, record))
        .collect();
    Json(json!({ "results": results }))
}
