use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, QueryBuilder, Row};
use tracing::info;
use uuid::Uuid;

use cinegate_model::{
    MediaType, Rating, UpdateOutcome, WatchStatus, WatchlistCreate,
    WatchlistItem, WatchlistUpdate,
};

use crate::error::{GatewayError, Result};

const SELECT_COLUMNS: &str = "id, user_id, tmdb_id, imdb_id, media_type, \
     title, year, poster, backdrop, status, liked, rating, created_at, \
     updated_at";

/// Store adapter for the watchlist collection.
///
/// Update semantics are partial: only fields present in the payload are
/// written, so clients mutating disjoint field subsets for the same item do
/// not clobber each other's attributes. There is no version column; when two
/// updates race, the later write wins per field group.
#[derive(Debug, Clone)]
pub struct WatchlistStore {
    pool: PgPool,
}

impl WatchlistStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Cheap connectivity probe for the health endpoint.
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(self.pool())
            .await
            .map_err(|e| GatewayError::from_sqlx("store ping failed", e))?;
        Ok(())
    }

    /// All items for a user, newest first, optionally filtered by status.
    pub async fn list(
        &self,
        user_id: &str,
        status: Option<WatchStatus>,
    ) -> Result<Vec<WatchlistItem>> {
        let mut builder = QueryBuilder::new(format!(
            "SELECT {SELECT_COLUMNS} FROM watchlist_items WHERE user_id = "
        ));
        builder.push_bind(user_id);
        if let Some(status) = status {
            builder.push(" AND status = ");
            builder.push_bind(status.as_str());
        }
        builder.push(" ORDER BY created_at DESC");

        let rows = builder
            .build()
            .fetch_all(self.pool())
            .await
            .map_err(|e| {
                GatewayError::from_sqlx("failed to list watchlist items", e)
            })?;

        rows.iter().map(Self::map_row).collect()
    }

    /// Insert a new item; the store assigns the identifier and both
    /// timestamps. Returns the new id.
    pub async fn create(&self, create: WatchlistCreate) -> Result<Uuid> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO watchlist_items (
                id, user_id, tmdb_id, imdb_id, media_type, title, year,
                poster, backdrop, status, liked, rating, created_at,
                updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $13)
            "#,
        )
        .bind(id)
        .bind(&create.user_id)
        .bind(create.tmdb_id)
        .bind(&create.imdb_id)
        .bind(create.media_type.as_str())
        .bind(&create.title)
        .bind(create.year)
        .bind(&create.poster)
        .bind(&create.backdrop)
        .bind(create.status.as_str())
        .bind(create.liked)
        .bind(create.rating.map(f64::from))
        .bind(now)
        .execute(self.pool())
        .await
        .map_err(|e| {
            GatewayError::from_sqlx("failed to create watchlist item", e)
        })?;

        info!("created watchlist item {id} for user {}", create.user_id);
        Ok(id)
    }

    /// Apply a sparse update: only provided fields are written, plus a
    /// refreshed `updated_at`. An empty payload is a no-op and never touches
    /// the store.
    pub async fn update(
        &self,
        id: Uuid,
        update: WatchlistUpdate,
    ) -> Result<UpdateOutcome> {
        if update.is_empty() {
            return Ok(UpdateOutcome::NoOp);
        }

        let mut builder = QueryBuilder::new("UPDATE watchlist_items SET ");
        let mut fields = builder.separated(", ");
        if let Some(status) = update.status {
            fields.push("status = ");
            fields.push_bind_unseparated(status.as_str());
        }
        if let Some(liked) = update.liked {
            fields.push("liked = ");
            fields.push_bind_unseparated(liked);
        }
        if let Some(rating) = update.rating {
            fields.push("rating = ");
            fields.push_bind_unseparated(rating.value());
        }
        fields.push("updated_at = ");
        fields.push_bind_unseparated(Utc::now());
        builder.push(" WHERE id = ");
        builder.push_bind(id);

        let result = builder.build().execute(self.pool()).await.map_err(|e| {
            GatewayError::from_sqlx("failed to update watchlist item", e)
        })?;

        if result.rows_affected() == 0 {
            return Err(GatewayError::NotFound(format!(
                "watchlist item {id}"
            )));
        }
        Ok(UpdateOutcome::Updated)
    }

    /// Remove an item by id.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM watchlist_items WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await
            .map_err(|e| {
                GatewayError::from_sqlx("failed to delete watchlist item", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(GatewayError::NotFound(format!(
                "watchlist item {id}"
            )));
        }
        Ok(())
    }

    fn map_row(row: &PgRow) -> Result<WatchlistItem> {
        let read = |e: sqlx::Error| {
            GatewayError::Storage(format!("failed to read watchlist row: {e}"))
        };

        let media_type: String = row.try_get("media_type").map_err(read)?;
        let media_type = media_type.parse::<MediaType>().map_err(|e| {
            GatewayError::Storage(format!("corrupt media_type column: {e}"))
        })?;
        let status: String = row.try_get("status").map_err(read)?;
        let status = status.parse::<WatchStatus>().map_err(|e| {
            GatewayError::Storage(format!("corrupt status column: {e}"))
        })?;
        let rating: Option<f64> = row.try_get("rating").map_err(read)?;
        let rating = rating
            .map(|value| {
                Rating::new(value).map_err(|e| {
                    GatewayError::Storage(format!("corrupt rating column: {e}"))
                })
            })
            .transpose()?;
        let created_at: DateTime<Utc> =
            row.try_get("created_at").map_err(read)?;
        let updated_at: DateTime<Utc> =
            row.try_get("updated_at").map_err(read)?;

        Ok(WatchlistItem {
            id: row.try_get("id").map_err(read)?,
            user_id: row.try_get("user_id").map_err(read)?,
            tmdb_id: row.try_get("tmdb_id").map_err(read)?,
            imdb_id: row.try_get("imdb_id").map_err(read)?,
            media_type,
            title: row.try_get("title").map_err(read)?,
            year: row.try_get("year").map_err(read)?,
            poster: row.try_get("poster").map_err(read)?,
            backdrop: row.try_get("backdrop").map_err(read)?,
            status,
            liked: row.try_get("liked").map_err(read)?,
            rating,
            created_at,
            updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connect_lazy;

    fn unreachable_store() -> WatchlistStore {
        // connect_lazy never dials; operations that skip the pool entirely
        // must succeed against a store nothing can reach.
        let pool =
            connect_lazy("postgres://cinegate@127.0.0.1:1/cinegate").unwrap();
        WatchlistStore::new(pool)
    }

    #[tokio::test]
    async fn empty_update_is_noop_without_touching_store() {
        let store = unreachable_store();
        let outcome = store
            .update(Uuid::new_v4(), WatchlistUpdate::default())
            .await
            .unwrap();
        assert_eq!(outcome, UpdateOutcome::NoOp);
    }

    #[tokio::test]
    async fn unreachable_store_surfaces_unavailable_on_list() {
        let store = unreachable_store();
        let err = store.list("u1", None).await.unwrap_err();
        assert!(matches!(
            err,
            GatewayError::Unavailable(_) | GatewayError::Storage(_)
        ));
    }
}
