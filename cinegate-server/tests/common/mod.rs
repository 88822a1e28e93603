#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;

use cinegate_core::database::{self, WatchlistStore};
use cinegate_core::{ImageUrls, TmdbClient};
use cinegate_server::{routes, AppState, Config};

pub const IMAGE_BASE: &str = "https://img.test/t/p";

/// Serve a stub upstream on an ephemeral local port.
pub async fn spawn_upstream_stub(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve stub");
    });
    addr
}

/// Build the production router against test configuration. `tmdb_base`
/// of None models a missing API key; `store` of None a missing database.
pub fn build_gateway(
    tmdb_base: Option<String>,
    store: Option<WatchlistStore>,
) -> TestServer {
    let config = Config {
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        tmdb_api_key: tmdb_base.as_ref().map(|_| "test-key".to_string()),
        tmdb_base_url: tmdb_base
            .clone()
            .unwrap_or_else(|| "http://127.0.0.1:9".to_string()),
        image_base_url: IMAGE_BASE.to_string(),
        database_url: None,
        cors_allowed_origins: vec!["*".to_string()],
    };

    let tmdb = tmdb_base
        .map(|base| {
            TmdbClient::new("test-key".to_string(), &base)
                .expect("stub base URL")
        })
        .map(Arc::new);

    let state = AppState {
        images: Arc::new(ImageUrls::new(IMAGE_BASE)),
        config: Arc::new(config),
        tmdb,
        store,
    };

    TestServer::new(routes::create_router(state)).expect("test server")
}

/// A store whose pool points at a port nothing listens on. Lazy, so
/// operations that never reach the pool still succeed.
pub fn dead_store() -> WatchlistStore {
    let pool =
        database::connect_lazy("postgres://cinegate@127.0.0.1:1/cinegate")
            .expect("lazy pool");
    WatchlistStore::new(pool)
}
