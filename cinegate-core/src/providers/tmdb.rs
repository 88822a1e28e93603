use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::error::{GatewayError, Result};
use cinegate_model::MediaType;

/// Upstream requests are bounded by this; there are no retries, a slow
/// provider surfaces to the caller directly.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(12);

/// One record from a list endpoint (trending, top rated, search, ...).
///
/// The shape is heterogeneous: movies carry `title`/`release_date`, TV shows
/// carry `name`/`first_air_date`, and only multi-media endpoints (trending,
/// multi search) include an explicit `media_type`. Every field except `id`
/// is optional; missing data degrades to null in canonical output instead of
/// failing the request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawListRecord {
    pub id: i64,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>, // TV shows use "name" instead of "title"
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub vote_count: Option<i64>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
}

impl RawListRecord {
    /// Whether the record's explicit media type is one the gateway serves.
    /// Multi search also returns people; those are dropped before
    /// normalization.
    pub fn is_movie_or_tv(&self) -> bool {
        matches!(self.media_type.as_deref(), Some("movie") | Some("tv"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawGenre {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawVideo {
    #[serde(default)]
    pub site: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawVideoList {
    #[serde(default)]
    pub results: Vec<RawVideo>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawCastCredit {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawCredits {
    #[serde(default)]
    pub cast: Vec<RawCastCredit>,
}

/// A single-title detail record with embedded videos and credits
/// (`append_to_response=videos,credits` folds them into one round trip).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawDetailRecord {
    #[serde(flatten)]
    pub base: RawListRecord,
    #[serde(default)]
    pub genres: Vec<RawGenre>,
    #[serde(default)]
    pub runtime: Option<i64>,
    #[serde(default)]
    pub episode_run_time: Vec<i64>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub videos: Option<RawVideoList>,
    #[serde(default)]
    pub credits: Option<RawCredits>,
}

#[derive(Debug, Deserialize)]
struct ListEnvelope {
    #[serde(default)]
    results: Vec<RawListRecord>,
}

/// Thin typed client over the upstream metadata API.
///
/// The base URL is injected so tests can point it at a local stub; the API
/// key and `language=en-US` ride along on every request.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl TmdbClient {
    pub fn new(api_key: String, base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url).map_err(|e| {
            GatewayError::Configuration(format!(
                "invalid TMDB base URL `{base_url}`: {e}"
            ))
        })?;
        let client = Client::builder()
            .user_agent(concat!("cinegate/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            api_key,
            base_url: base.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Daily trending movies and TV shows.
    pub async fn trending(&self) -> Result<Vec<RawListRecord>> {
        self.fetch_list("/trending/all/day", &[]).await
    }

    /// Top-rated movies.
    pub async fn top_rated_movies(&self) -> Result<Vec<RawListRecord>> {
        self.fetch_list("/movie/top_rated", &[]).await
    }

    /// Currently popular TV shows.
    pub async fn popular_tv(&self) -> Result<Vec<RawListRecord>> {
        self.fetch_list("/tv/popular", &[]).await
    }

    /// Upcoming theatrical movies.
    pub async fn upcoming_movies(&self) -> Result<Vec<RawListRecord>> {
        self.fetch_list("/movie/upcoming", &[]).await
    }

    /// Multi search across movies, TV shows and people. Callers filter out
    /// non-title records before normalization.
    pub async fn search_multi(
        &self,
        query: &str,
        year: Option<i32>,
    ) -> Result<Vec<RawListRecord>> {
        let mut params = vec![
            ("query", query.to_string()),
            ("include_adult", "false".to_string()),
        ];
        if let Some(year) = year {
            params.push(("year", year.to_string()));
        }
        self.fetch_list("/search/multi", &params).await
    }

    /// Full detail record for one title, with videos and credits embedded.
    pub async fn details(
        &self,
        media_type: MediaType,
        id: i64,
    ) -> Result<RawDetailRecord> {
        let path = format!("/{}/{}", media_type.as_str(), id);
        let params = [(
            "append_to_response",
            "videos,credits".to_string(),
        )];
        self.get_json(&path, &params).await
    }

    async fn fetch_list(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<RawListRecord>> {
        let envelope: ListEnvelope = self.get_json(path, params).await?;
        Ok(envelope.results)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("upstream request: {url}");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", "en-US"),
            ])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("upstream returned {status} for {path}");
            return Err(GatewayError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<T>().await?)
    }
}
