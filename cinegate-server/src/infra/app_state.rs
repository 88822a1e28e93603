use std::{fmt, sync::Arc};

use tracing::{info, warn};

use cinegate_core::database::{self, WatchlistStore};
use cinegate_core::{ImageUrls, TmdbClient};

use crate::errors::{AppError, AppResult};
use crate::infra::config::Config;

/// Shared per-process handles. Cloned per request; everything inside is
/// either an Arc or a pooled handle.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Absent when no API key is configured; catalog handlers refuse
    /// requests with a configuration error in that case.
    pub tmdb: Option<Arc<TmdbClient>>,
    pub images: Arc<ImageUrls>,
    /// Absent when no database is configured; watchlist handlers refuse
    /// requests with a configuration error in that case.
    pub store: Option<WatchlistStore>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    /// Wire up upstream client and store from configuration. A missing API
    /// key or database URL disables the corresponding surface instead of
    /// failing startup.
    pub async fn from_config(config: Config) -> anyhow::Result<Self> {
        let tmdb = match config.tmdb_api_key.clone() {
            Some(key) => {
                Some(Arc::new(TmdbClient::new(key, &config.tmdb_base_url)?))
            }
            None => {
                warn!(
                    "TMDB_API_KEY is not set; catalog endpoints will refuse requests"
                );
                None
            }
        };

        let store = match config.database_url.as_deref() {
            Some(url) => {
                let pool = database::connect_lazy(url)?;
                // The store may be down at boot; watchlist calls will
                // surface the failure per request.
                match database::run_migrations(&pool).await {
                    Ok(()) => info!("database migrations applied"),
                    Err(err) => {
                        warn!("database unavailable at startup, continuing: {err}")
                    }
                }
                Some(WatchlistStore::new(pool))
            }
            None => {
                warn!(
                    "DATABASE_URL is not set; watchlist endpoints will refuse requests"
                );
                None
            }
        };

        Ok(Self {
            images: Arc::new(ImageUrls::new(&config.image_base_url)),
            config: Arc::new(config),
            tmdb,
            store,
        })
    }

    /// The upstream client, or the configuration error every catalog
    /// endpoint reports without it.
    pub fn tmdb(&self) -> AppResult<&TmdbClient> {
        self.tmdb
            .as_deref()
            .ok_or_else(|| AppError::internal("TMDB_API_KEY is not set"))
    }

    /// The watchlist store, or the configuration error every watchlist
    /// endpoint reports without it.
    pub fn store(&self) -> AppResult<&WatchlistStore> {
        self.store
            .as_ref()
            .ok_or_else(|| AppError::internal("database is not configured"))
    }
}
