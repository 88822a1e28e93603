//! Image URL construction for upstream-provided relative paths.

/// Poster/profile size segment recognized by the image CDN.
#[derive(Debug, Clone, Copy)]
pub enum PosterSize {
    W185,
    W342,
    W500,
    W780,
    Original,
}

impl PosterSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            PosterSize::W185 => "w185",
            PosterSize::W342 => "w342",
            PosterSize::W500 => "w500",
            PosterSize::W780 => "w780",
            PosterSize::Original => "original",
        }
    }
}

/// Backdrop size segment recognized by the image CDN.
#[derive(Debug, Clone, Copy)]
pub enum BackdropSize {
    W780,
    W1280,
    Original,
}

impl BackdropSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackdropSize::W780 => "w780",
            BackdropSize::W1280 => "w1280",
            BackdropSize::Original => "original",
        }
    }
}

/// Builds full image URLs from the configured CDN base and an upstream
/// relative path. A URL is only ever produced for a non-empty path; the
/// output never contains an empty path segment.
#[derive(Debug, Clone)]
pub struct ImageUrls {
    base: String,
}

impl ImageUrls {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Standard-resolution poster URL for list and detail items.
    pub fn poster(&self, path: Option<&str>) -> Option<String> {
        self.build(PosterSize::W500.as_str(), path)
    }

    /// Original-resolution backdrop URL.
    pub fn backdrop(&self, path: Option<&str>) -> Option<String> {
        self.build(BackdropSize::Original.as_str(), path)
    }

    /// Cast profile image URL, standard resolution.
    pub fn profile(&self, path: Option<&str>) -> Option<String> {
        self.build(PosterSize::W500.as_str(), path)
    }

    fn build(&self, size: &str, path: Option<&str>) -> Option<String> {
        let path = path?;
        if path.is_empty() {
            return None;
        }
        Some(format!("{}/{}{}", self.base, size, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_empty_paths_produce_no_url() {
        let images = ImageUrls::new("https://image.tmdb.org/t/p");
        assert_eq!(images.poster(None), None);
        assert_eq!(images.poster(Some("")), None);
        assert_eq!(images.backdrop(Some("")), None);
    }

    #[test]
    fn poster_uses_w500_and_backdrop_uses_original() {
        let images = ImageUrls::new("https://image.tmdb.org/t/p/");
        assert_eq!(
            images.poster(Some("/abc.jpg")).as_deref(),
            Some("https://image.tmdb.org/t/p/w500/abc.jpg")
        );
        assert_eq!(
            images.backdrop(Some("/bg.jpg")).as_deref(),
            Some("https://image.tmdb.org/t/p/original/bg.jpg")
        );
    }
}
