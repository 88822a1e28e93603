//! Response normalization: folds heterogeneous upstream records into the
//! canonical item shape served by every gateway endpoint.
//!
//! Pure transforms; no I/O. Missing or malformed upstream fields degrade to
//! null fields in the output rather than failing the request.

use cinegate_model::{CanonicalItem, CanonicalItemDetail, CastMember, MediaType};

use crate::images::ImageUrls;
use crate::providers::tmdb::{RawDetailRecord, RawListRecord};

/// The only video host trailers are selected from.
const TRAILER_SITE: &str = "YouTube";

/// A list record classified into its source shape.
///
/// Movies bill `title` and `release_date`; TV shows bill `name` and
/// `first_air_date`. Classification replaces the original ad hoc per-field
/// probing with one resolver, so downstream code never inspects raw fields.
#[derive(Debug, Clone, PartialEq)]
pub enum ListRecord {
    Movie(MovieListRecord),
    Tv(TvListRecord),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MovieListRecord {
    pub id: i64,
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TvListRecord {
    pub id: i64,
    pub name: Option<String>,
    pub first_air_date: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<i64>,
}

impl ListRecord {
    /// Resolve a raw record's media kind.
    ///
    /// Precedence: an explicit upstream `media_type` wins (multi-media
    /// endpoints carry it); otherwise a `name` attribute without a `title`
    /// marks a TV show; otherwise a movie. Explicit values outside the
    /// canonical enum fall through to the shape check.
    pub fn classify(raw: RawListRecord) -> Self {
        match raw.media_type.as_deref() {
            Some("movie") => Self::movie(raw),
            Some("tv") => Self::tv(raw),
            _ => {
                if raw.name.is_some() && raw.title.is_none() {
                    Self::tv(raw)
                } else {
                    Self::movie(raw)
                }
            }
        }
    }

    pub fn media_type(&self) -> MediaType {
        match self {
            ListRecord::Movie(_) => MediaType::Movie,
            ListRecord::Tv(_) => MediaType::Tv,
        }
    }

    // `title` is preferred over `name`, and `release_date` over
    // `first_air_date`, whichever variant the record lands in.
    fn movie(raw: RawListRecord) -> Self {
        ListRecord::Movie(MovieListRecord {
            id: raw.id,
            title: raw.title.or(raw.name),
            release_date: raw.release_date.or(raw.first_air_date),
            overview: raw.overview,
            poster_path: raw.poster_path,
            backdrop_path: raw.backdrop_path,
            vote_average: raw.vote_average,
            vote_count: raw.vote_count,
        })
    }

    fn tv(raw: RawListRecord) -> Self {
        ListRecord::Tv(TvListRecord {
            id: raw.id,
            name: raw.title.or(raw.name),
            first_air_date: raw.release_date.or(raw.first_air_date),
            overview: raw.overview,
            poster_path: raw.poster_path,
            backdrop_path: raw.backdrop_path,
            vote_average: raw.vote_average,
            vote_count: raw.vote_count,
        })
    }
}

/// Map one upstream list record to the canonical item shape.
pub fn normalize_list_item(
    images: &ImageUrls,
    raw: RawListRecord,
) -> CanonicalItem {
    match ListRecord::classify(raw) {
        ListRecord::Movie(movie) => CanonicalItem {
            id: movie.id,
            media_type: MediaType::Movie,
            year: parse_year(movie.release_date.as_deref()),
            title: movie.title,
            overview: movie.overview,
            poster: images.poster(movie.poster_path.as_deref()),
            backdrop: images.backdrop(movie.backdrop_path.as_deref()),
            rating: movie.vote_average,
            votes: movie.vote_count,
        },
        ListRecord::Tv(tv) => CanonicalItem {
            id: tv.id,
            media_type: MediaType::Tv,
            year: parse_year(tv.first_air_date.as_deref()),
            title: tv.name,
            overview: tv.overview,
            poster: images.poster(tv.poster_path.as_deref()),
            backdrop: images.backdrop(tv.backdrop_path.as_deref()),
            rating: tv.vote_average,
            votes: tv.vote_count,
        },
    }
}

/// Map one upstream detail record (with embedded videos and credits) to the
/// canonical detail shape.
pub fn normalize_detail(
    images: &ImageUrls,
    raw: RawDetailRecord,
) -> CanonicalItemDetail {
    let release_date = raw
        .base
        .release_date
        .clone()
        .or_else(|| raw.base.first_air_date.clone());

    let genres = raw
        .genres
        .into_iter()
        .filter_map(|genre| genre.name)
        .collect();

    // Movies carry a direct runtime; series only expose per-episode
    // runtimes. Zero counts as absent.
    let runtime = raw
        .runtime
        .filter(|minutes| *minutes != 0)
        .or_else(|| raw.episode_run_time.first().copied());

    let cast = raw
        .credits
        .map(|credits| credits.cast)
        .unwrap_or_default()
        .into_iter()
        .take(10)
        .map(|credit| CastMember {
            id: credit.id,
            name: credit.name,
            character: credit.character,
            profile: images.profile(credit.profile_path.as_deref()),
        })
        .collect();

    // First video in upstream order hosted on the recognized platform and
    // typed Trailer or Teaser; no preference between the two.
    let trailer_key = raw
        .videos
        .map(|videos| videos.results)
        .unwrap_or_default()
        .into_iter()
        .find(|video| {
            video.site.as_deref() == Some(TRAILER_SITE)
                && matches!(
                    video.kind.as_deref(),
                    Some("Trailer") | Some("Teaser")
                )
        })
        .and_then(|video| video.key);

    CanonicalItemDetail {
        item: normalize_list_item(images, raw.base),
        genres,
        runtime,
        release_date,
        tagline: raw.tagline,
        cast,
        trailer_key,
    }
}

/// Year is the first dash-separated segment of the date string; anything
/// unparsable degrades to None.
fn parse_year(date: Option<&str>) -> Option<i32> {
    date?.split('-').next()?.parse().ok()
}
