//! Core data model definitions shared across Cinegate crates.

pub mod error;
pub mod item;
pub mod media_type;
pub mod watchlist;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use item::{CanonicalItem, CanonicalItemDetail, CastMember};
pub use media_type::MediaType;
pub use watchlist::{
    Rating, UpdateOutcome, WatchStatus, WatchlistCreate, WatchlistItem,
    WatchlistUpdate,
};
