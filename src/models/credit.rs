use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// The two catalog entity types a person can be credited on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Tv,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
        }
    }
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(MediaKind::Movie),
            "tv" => Ok(MediaKind::Tv),
            other => Err(format!("unknown media type '{}'", other)),
        }
    }
}

/// Identity of a production across cast and crew credit lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditKey {
    pub media_kind: MediaKind,
    pub id: u64,
}

impl CreditKey {
    pub fn new(media_kind: MediaKind, id: u64) -> Self {
        Self { media_kind, id }
    }
}

impl Display for CreditKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.media_kind, self.id)
    }
}

/// Production fields shared by cast and crew credits, as returned in a
/// person's combined credits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditedProduction {
    pub id: u64,
    pub media_type: MediaKind,
    /// Movie title
    #[serde(default)]
    pub title: Option<String>,
    /// Series name
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub popularity: f64,
    /// Average viewer rating on a 0-10 scale
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub genre_ids: Vec<u32>,
}

impl CreditedProduction {
    pub fn key(&self) -> CreditKey {
        CreditKey::new(self.media_type, self.id)
    }

    /// Movie title, else series name, else `fallback`
    pub fn display_title(&self, fallback: &str) -> String {
        non_empty(&self.title)
            .or_else(|| non_empty(&self.name))
            .unwrap_or(fallback)
            .to_string()
    }

    /// Release date, else first air date. Empty strings count as absent.
    pub fn date(&self) -> Option<&str> {
        non_empty(&self.release_date).or_else(|| non_empty(&self.first_air_date))
    }

    /// Year segment of the date, for display
    pub fn year(&self) -> Option<String> {
        self.date().map(year_of)
    }

    /// First four characters of the date, as used for era matching
    pub fn year_prefix(&self) -> Option<String> {
        self.date().map(year_prefix)
    }
}

/// A production the person acted in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastCredit {
    #[serde(flatten)]
    pub production: CreditedProduction,
    #[serde(default)]
    pub character: Option<String>,
    /// Only reported for series
    #[serde(default)]
    pub episode_count: Option<u32>,
}

impl CastCredit {
    pub fn key(&self) -> CreditKey {
        self.production.key()
    }

    /// Episode count for series credits that report one
    pub fn series_episode_count(&self) -> Option<u32> {
        match self.production.media_type {
            MediaKind::Tv => self.episode_count.filter(|count| *count > 0),
            MediaKind::Movie => None,
        }
    }
}

/// A production the person worked on behind the camera
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewCredit {
    #[serde(flatten)]
    pub production: CreditedProduction,
    #[serde(default)]
    pub job: String,
    #[serde(default)]
    pub department: String,
}

impl CrewCredit {
    pub fn key(&self) -> CreditKey {
        self.production.key()
    }
}

/// Either kind of credit, scored uniformly by the known-for ranker
#[derive(Debug, Clone, PartialEq)]
pub enum Credit {
    Cast(CastCredit),
    Crew(CrewCredit),
}

impl Credit {
    pub fn production(&self) -> &CreditedProduction {
        match self {
            Credit::Cast(cast) => &cast.production,
            Credit::Crew(crew) => &crew.production,
        }
    }

    pub fn key(&self) -> CreditKey {
        self.production().key()
    }
}

/// Everything before the first `-` of a `YYYY-MM-DD` date
pub fn year_of(date: &str) -> String {
    date.split('-').next().unwrap_or(date).to_string()
}

/// First four characters of a `YYYY-MM-DD` date
pub fn year_prefix(date: &str) -> String {
    date.chars().take(4).collect()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind_serde() {
        assert_eq!(serde_json::to_string(&MediaKind::Tv).unwrap(), "\"tv\"");
        let kind: MediaKind = serde_json::from_str("\"movie\"").unwrap();
        assert_eq!(kind, MediaKind::Movie);
    }

    #[test]
    fn test_media_kind_from_str_rejects_unknown() {
        assert_eq!("tv".parse::<MediaKind>(), Ok(MediaKind::Tv));
        assert!("person".parse::<MediaKind>().is_err());
    }

    #[test]
    fn test_cast_credit_from_catalog_json() {
        let json = r#"{
            "id": 1396,
            "media_type": "tv",
            "name": "Breaking Bad",
            "first_air_date": "2008-01-20",
            "poster_path": "/ggFHVNu6YYI5L9pCfOacjizRGt.jpg",
            "vote_average": 8.9,
            "popularity": 412.3,
            "genre_ids": [18, 80],
            "character": "Walter White",
            "episode_count": 62
        }"#;

        let credit: CastCredit = serde_json::from_str(json).unwrap();
        assert_eq!(credit.key(), CreditKey::new(MediaKind::Tv, 1396));
        assert_eq!(credit.production.display_title("Unknown"), "Breaking Bad");
        assert_eq!(credit.production.year(), Some("2008".to_string()));
        assert_eq!(credit.production.genre_ids, vec![18, 80]);
        assert_eq!(credit.series_episode_count(), Some(62));
        assert_eq!(credit.character.as_deref(), Some("Walter White"));
    }

    #[test]
    fn test_crew_credit_defaults_missing_fields() {
        let json = r#"{"id": 27205, "media_type": "movie", "job": "Director", "department": "Directing"}"#;

        let credit: CrewCredit = serde_json::from_str(json).unwrap();
        assert_eq!(credit.production.popularity, 0.0);
        assert!(credit.production.genre_ids.is_empty());
        assert_eq!(credit.production.date(), None);
        assert_eq!(credit.production.display_title("Unknown"), "Unknown");
    }

    #[test]
    fn test_empty_release_date_falls_back_to_first_air_date() {
        let json = r#"{"id": 1, "media_type": "tv", "release_date": "", "first_air_date": "1999-03-01"}"#;
        let production: CreditedProduction = serde_json::from_str(json).unwrap();
        assert_eq!(production.date(), Some("1999-03-01"));
    }

    #[test]
    fn test_movie_credit_has_no_series_episode_count() {
        let json = r#"{"id": 2, "media_type": "movie", "episode_count": 4}"#;
        let credit: CastCredit = serde_json::from_str(json).unwrap();
        assert_eq!(credit.series_episode_count(), None);
    }

    #[test]
    fn test_year_helpers_on_malformed_dates() {
        assert_eq!(year_of("2008-01-20"), "2008");
        assert_eq!(year_prefix("2008-01-20"), "2008");
        assert_eq!(year_of("15-06-2001"), "15");
        assert_eq!(year_prefix("15-06-2001"), "15-0");
        assert_eq!(year_of("2001"), "2001");
    }

    #[test]
    fn test_credit_key_display() {
        assert_eq!(CreditKey::new(MediaKind::Movie, 807).to_string(), "movie-807");
    }
}
