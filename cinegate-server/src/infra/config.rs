use std::env;

/// Gateway configuration loaded from environment variables.
///
/// Constructed once at startup and carried in [`crate::AppState`]; nothing
/// reads the environment after this point.
#[derive(Debug, Clone)]
pub struct Config {
    // Server settings
    pub server_host: String,
    pub server_port: u16,

    // Upstream provider settings
    pub tmdb_api_key: Option<String>,
    pub tmdb_base_url: String,
    pub image_base_url: String,

    // Database settings
    pub database_url: Option<String>,

    // CORS settings
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Ok(Self {
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .or_else(|_| env::var("PORT"))
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .unwrap_or(8000),

            tmdb_api_key: env::var("TMDB_API_KEY").ok().filter(|k| !k.is_empty()),
            tmdb_base_url: env::var("TMDB_BASE_URL")
                .unwrap_or_else(|_| "https://api.themoviedb.org/3".to_string()),
            image_base_url: env::var("TMDB_IMAGE_BASE_URL")
                .unwrap_or_else(|_| "https://image.tmdb.org/t/p".to_string()),

            database_url: env::var("DATABASE_URL").ok().filter(|u| !u.is_empty()),

            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        })
    }

    /// Whether CORS should admit any origin.
    pub fn cors_allow_any_origin(&self) -> bool {
        self.cors_allowed_origins.iter().any(|origin| origin == "*")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_origin_detection() {
        let mut config = Config {
            server_host: "0.0.0.0".to_string(),
            server_port: 8000,
            tmdb_api_key: None,
            tmdb_base_url: "https://api.themoviedb.org/3".to_string(),
            image_base_url: "https://image.tmdb.org/t/p".to_string(),
            database_url: None,
            cors_allowed_origins: vec!["*".to_string()],
        };
        assert!(config.cors_allow_any_origin());

        config.cors_allowed_origins =
            vec!["http://localhost:5173".to_string()];
        assert!(!config.cors_allow_any_origin());
    }
}
