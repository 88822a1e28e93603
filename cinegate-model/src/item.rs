use serde::{Deserialize, Serialize};

use crate::media_type::MediaType;

/// Uniform list-item shape returned by every catalog endpoint.
///
/// Upstream list records are heterogeneous (movies carry `title` and
/// `release_date`, series carry `name` and `first_air_date`); this is the
/// one shape clients see regardless of the source endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalItem {
    pub id: i64,
    pub media_type: MediaType,
    pub title: Option<String>,
    pub overview: Option<String>,
    /// Full w500 image URL, present only when the upstream path was.
    pub poster: Option<String>,
    /// Full original-resolution image URL, present only when the upstream
    /// path was.
    pub backdrop: Option<String>,
    pub rating: Option<f64>,
    pub votes: Option<i64>,
    pub year: Option<i32>,
}

/// A single billed cast entry, truncated detail-endpoint output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: i64,
    pub name: Option<String>,
    pub character: Option<String>,
    /// w500 profile image URL, or None when the person has no photo.
    pub profile: Option<String>,
}

/// Detail-endpoint shape: the canonical item plus the fields only a single
/// title fetch can supply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalItemDetail {
    #[serde(flatten)]
    pub item: CanonicalItem,
    /// Genre names in upstream order.
    pub genres: Vec<String>,
    /// Minutes; for series this falls back to the first episode runtime.
    pub runtime: Option<i64>,
    /// Raw upstream date string, unparsed.
    pub release_date: Option<String>,
    pub tagline: Option<String>,
    /// At most the first ten entries, in upstream billing order.
    pub cast: Vec<CastMember>,
    /// Key of the first YouTube trailer or teaser, if any.
    pub trailer_key: Option<String>,
}
