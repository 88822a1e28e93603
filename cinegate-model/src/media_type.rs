use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Simple enum for media types exposed by the gateway.
///
/// The upstream provider also returns other kinds (people, collections) from
/// some endpoints; those never survive into canonical output, so the enum
/// stays closed over the two shapes clients can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Theatrical/feature content keyed by `title` + `release_date` upstream
    Movie,
    /// Episodic content keyed by `name` + `first_air_date` upstream
    Tv,
}

impl MediaType {
    /// Lowercase wire name, matching both the upstream provider and the
    /// gateway's own JSON surface.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Tv => "tv",
        }
    }
}

impl Display for MediaType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(MediaType::Movie),
            "tv" => Ok(MediaType::Tv),
            other => Err(ModelError::UnknownVariant(format!(
                "media type `{other}`"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        assert_eq!("movie".parse::<MediaType>().unwrap(), MediaType::Movie);
        assert_eq!("tv".parse::<MediaType>().unwrap(), MediaType::Tv);
        assert_eq!(MediaType::Tv.to_string(), "tv");
    }

    #[test]
    fn rejects_unknown_kinds() {
        assert!("person".parse::<MediaType>().is_err());
        assert!(serde_json::from_str::<MediaType>("\"person\"").is_err());
    }
}
