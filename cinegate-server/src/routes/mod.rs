use axum::{
    http::HeaderValue,
    routing::{get, patch},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{health, media, watchlist};
use crate::AppState;

/// Build the full production router: root/health plumbing, the /api
/// surface, CORS and request tracing.
pub fn create_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state);

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .nest("/api", create_api_router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// All /api routes: the proxied catalog surface plus the watchlist.
fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/hello", get(health::hello_handler))
        // Catalog proxy endpoints
        .route("/trending", get(media::trending_handler))
        .route("/top-rated", get(media::top_rated_handler))
        .route("/popular-tv", get(media::popular_tv_handler))
        .route("/upcoming", get(media::upcoming_handler))
        .route("/search", get(media::search_handler))
        .route("/title/{media_type}/{id}", get(media::title_details_handler))
        // Watchlist endpoints
        .route(
            "/watchlist",
            get(watchlist::get_watchlist_handler)
                .post(watchlist::add_watchlist_item_handler),
        )
        .route(
            "/watchlist/{id}",
            patch(watchlist::update_watchlist_item_handler)
                .delete(watchlist::delete_watchlist_item_handler),
        )
}

/// CORS: permissive when the configured origin list contains `*`, an
/// allow-list otherwise.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    if state.config.cors_allow_any_origin() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = state
        .config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::any())
        .allow_headers(AllowHeaders::any())
}
