use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ModelError;
use crate::media_type::MediaType;

/// Where a saved title sits in the user's queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WatchStatus {
    Later,
    Watching,
    Watched,
}

impl WatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WatchStatus::Later => "later",
            WatchStatus::Watching => "watching",
            WatchStatus::Watched => "watched",
        }
    }
}

impl std::fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WatchStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "later" => Ok(WatchStatus::Later),
            "watching" => Ok(WatchStatus::Watching),
            "watched" => Ok(WatchStatus::Watched),
            other => Err(ModelError::UnknownVariant(format!(
                "watch status `{other}`"
            ))),
        }
    }
}

/// User score on the 0–10 scale.
///
/// Construction is the validation boundary: a payload carrying a value
/// outside [0, 10] fails at deserialization, before anything reaches the
/// store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Rating(f64);

impl Rating {
    pub fn new(value: f64) -> Result<Self, ModelError> {
        if !(0.0..=10.0).contains(&value) {
            return Err(ModelError::OutOfRange(format!(
                "rating {value} must be between 0 and 10"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Rating {
    type Error = ModelError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for f64 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// A persisted watchlist row. The id is assigned at creation and never
/// changes; `created_at`/`updated_at` are server-managed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchlistItem {
    pub id: Uuid,
    pub user_id: String,
    pub tmdb_id: i64,
    pub imdb_id: Option<String>,
    pub media_type: MediaType,
    pub title: String,
    pub year: Option<i32>,
    pub poster: Option<String>,
    pub backdrop: Option<String>,
    pub status: WatchStatus,
    pub liked: bool,
    pub rating: Option<Rating>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client payload for adding a title to the watchlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchlistCreate {
    pub user_id: String,
    pub tmdb_id: i64,
    #[serde(default)]
    pub imdb_id: Option<String>,
    #[serde(default = "default_media_type")]
    pub media_type: MediaType,
    pub title: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub backdrop: Option<String>,
    #[serde(default = "default_status")]
    pub status: WatchStatus,
    #[serde(default)]
    pub liked: bool,
    #[serde(default)]
    pub rating: Option<Rating>,
}

fn default_media_type() -> MediaType {
    MediaType::Movie
}

fn default_status() -> WatchStatus {
    WatchStatus::Later
}

/// Sparse mutation payload. Only these three fields are mutable after
/// creation; a field left absent is left untouched in the store, never
/// nulled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WatchlistUpdate {
    #[serde(default)]
    pub status: Option<WatchStatus>,
    #[serde(default)]
    pub liked: Option<bool>,
    #[serde(default)]
    pub rating: Option<Rating>,
}

impl WatchlistUpdate {
    /// An update carrying no fields is a no-op, not an error.
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.liked.is_none() && self.rating.is_none()
    }
}

/// Result of applying a watchlist update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    /// The payload carried no fields; the store was not touched.
    NoOp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_accepts_bounds_inclusive() {
        assert_eq!(Rating::new(0.0).unwrap().value(), 0.0);
        assert_eq!(Rating::new(10.0).unwrap().value(), 10.0);
        assert_eq!(Rating::new(7.5).unwrap().value(), 7.5);
    }

    #[test]
    fn rating_rejects_out_of_range() {
        assert!(Rating::new(10.1).is_err());
        assert!(Rating::new(-0.1).is_err());
        assert!(Rating::new(11.0).is_err());
    }

    #[test]
    fn rating_rejected_at_deserialization() {
        let err = serde_json::from_str::<Rating>("11.0");
        assert!(err.is_err());

        let payload = r#"{"user_id":"u1","tmdb_id":550,"title":"Fight Club","rating":11}"#;
        assert!(serde_json::from_str::<WatchlistCreate>(payload).is_err());
    }

    #[test]
    fn create_defaults_apply() {
        let payload = r#"{"user_id":"u1","tmdb_id":550,"title":"Fight Club"}"#;
        let create: WatchlistCreate = serde_json::from_str(payload).unwrap();
        assert_eq!(create.media_type, MediaType::Movie);
        assert_eq!(create.status, WatchStatus::Later);
        assert!(!create.liked);
        assert!(create.rating.is_none());
        assert!(create.imdb_id.is_none());
    }

    #[test]
    fn create_rejects_unknown_status() {
        let payload =
            r#"{"user_id":"u1","tmdb_id":550,"title":"x","status":"paused"}"#;
        assert!(serde_json::from_str::<WatchlistCreate>(payload).is_err());
    }

    #[test]
    fn update_empty_detection() {
        let update: WatchlistUpdate = serde_json::from_str("{}").unwrap();
        assert!(update.is_empty());

        let update: WatchlistUpdate =
            serde_json::from_str(r#"{"liked":true}"#).unwrap();
        assert!(!update.is_empty());
    }
}
