//! Watchlist persistence over Postgres.

pub mod watchlist;

pub use watchlist::WatchlistStore;

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::str::FromStr;

use crate::error::{GatewayError, Result};

/// Build a lazily-connecting pool. No connection is attempted until the
/// first query, so a missing or unreachable database does not prevent the
/// gateway from serving catalog traffic.
pub fn connect_lazy(database_url: &str) -> Result<PgPool> {
    let options = PgConnectOptions::from_str(database_url).map_err(|e| {
        GatewayError::Configuration(format!("invalid database URL: {e}"))
    })?;

    let pool = PgPoolOptions::new()
        .max_connections(10)
        // Local store operations get a sane bound rather than waiting on a
        // dead connection forever.
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy_with(options);

    Ok(pool)
}

/// Apply embedded migrations. Callers treat failure as non-fatal at startup
/// so the gateway can come up while the store is down.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    crate::MIGRATOR
        .run(pool)
        .await
        .map_err(|e| GatewayError::Storage(format!("migration failed: {e}")))
}
