//! Core library for the Cinegate gateway.
//!
//! Three concerns live here:
//! - the upstream TMDB client ([`providers::tmdb`]),
//! - the response normalization layer ([`normalize`]) that folds the
//!   provider's heterogeneous record shapes into one canonical item shape,
//! - the watchlist store ([`database`]) backed by Postgres.

pub mod database;
pub mod error;
pub mod images;
pub mod normalize;
pub mod providers;

pub use error::{GatewayError, Result};
pub use images::{BackdropSize, ImageUrls, PosterSize};
pub use providers::tmdb::TmdbClient;

pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
