use serde::{Deserialize, Serialize};

use super::credit::{year_prefix, CastCredit, CreditKey, CrewCredit, MediaKind};
use super::insights::{GenreYearStat, TaggedImage};

// ============================================================================
// Catalog API Types
// ============================================================================

/// Person detail with `combined_credits` and `tagged_images` appended
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonDetail {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub known_for_department: String,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub combined_credits: CombinedCredits,
    #[serde(default)]
    pub tagged_images: TaggedImagePage,
}

impl PersonDetail {
    /// Tagged images that point at a production
    pub fn production_images(&self) -> Vec<TaggedImage> {
        self.tagged_images
            .results
            .iter()
            .filter_map(|image| {
                image.media.as_ref().map(|media| TaggedImage {
                    production_id: media.id,
                    image_path: image.file_path.clone(),
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CombinedCredits {
    #[serde(default)]
    pub cast: Vec<CastCredit>,
    #[serde(default)]
    pub crew: Vec<CrewCredit>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaggedImagePage {
    #[serde(default)]
    pub results: Vec<CatalogTaggedImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogTaggedImage {
    pub file_path: String,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub media: Option<TaggedMedia>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedMedia {
    pub id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    #[serde(default)]
    pub name: String,
}

/// Movie or series detail; only the fields the insights need
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionDetail {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub credits: Option<ProductionCredits>,
    /// Series only; every role across all seasons
    #[serde(default)]
    pub aggregate_credits: Option<AggregateCredits>,
}

/// Per-production cast and crew (`credits`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductionCredits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub character: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewMember {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub job: String,
    #[serde(default)]
    pub department: String,
}

/// Series cast and crew summed over seasons (`aggregate_credits`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregateCredits {
    #[serde(default)]
    pub cast: Vec<AggregateCastMember>,
    #[serde(default)]
    pub crew: Vec<AggregateCrewMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateCastMember {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub roles: Vec<AggregateRole>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateRole {
    #[serde(default)]
    pub character: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateCrewMember {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub jobs: Vec<AggregateJob>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateJob {
    #[serde(default)]
    pub job: String,
}

impl ProductionDetail {
    pub fn key(&self, media_kind: MediaKind) -> CreditKey {
        CreditKey::new(media_kind, self.id)
    }

    /// Release date, else first-air date; empty strings count as absent
    pub fn date(&self) -> Option<&str> {
        [&self.release_date, &self.first_air_date]
            .into_iter()
            .filter_map(|d| d.as_deref())
            .find(|d| !d.is_empty())
    }

    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().or(self.name.as_deref())
    }

    pub fn genre_year_stat(&self) -> GenreYearStat {
        GenreYearStat {
            genre_ids: self.genres.iter().map(|g| g.id).collect(),
            year: self.date().map(year_prefix),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_detail_from_catalog_json() {
        let json = r#"{
            "id": 17419,
            "name": "Bryan Cranston",
            "known_for_department": "Acting",
            "combined_credits": {
                "cast": [{"id": 1396, "media_type": "tv", "name": "Breaking Bad", "character": "Walter White", "episode_count": 62}],
                "crew": [{"id": 1396, "media_type": "tv", "name": "Breaking Bad", "job": "Director", "department": "Directing"}]
            },
            "tagged_images": {
                "results": [
                    {"file_path": "/a.jpg", "media_type": "tv", "media": {"id": 1396, "name": "Breaking Bad"}},
                    {"file_path": "/b.jpg"}
                ]
            }
        }"#;

        let person: PersonDetail = serde_json::from_str(json).unwrap();
        assert_eq!(person.known_for_department, "Acting");
        assert_eq!(person.combined_credits.cast.len(), 1);
        assert_eq!(person.combined_credits.crew[0].job, "Director");

        let images = person.production_images();
        assert_eq!(
            images,
            vec![TaggedImage {
                production_id: 1396,
                image_path: "/a.jpg".to_string()
            }]
        );
    }

    #[test]
    fn test_person_detail_without_appended_credits() {
        let person: PersonDetail =
            serde_json::from_str(r#"{"id": 1, "name": "Nobody"}"#).unwrap();
        assert!(person.combined_credits.cast.is_empty());
        assert!(person.production_images().is_empty());
    }

    #[test]
    fn test_genre_year_stat_prefers_release_date() {
        let detail: ProductionDetail = serde_json::from_str(
            r#"{"id": 603, "title": "The Matrix", "release_date": "1999-03-30",
                "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}]}"#,
        )
        .unwrap();

        let stat = detail.genre_year_stat();
        assert_eq!(stat.genre_ids, vec![28, 878]);
        assert_eq!(stat.year.as_deref(), Some("1999"));
    }

    #[test]
    fn test_production_detail_with_appended_credits() {
        let detail: ProductionDetail = serde_json::from_str(
            r#"{"id": 1396, "name": "Breaking Bad", "first_air_date": "2008-01-20",
                "credits": {"cast": [{"id": 17419, "name": "Bryan Cranston", "character": "Walter White"}]},
                "aggregate_credits": {
                    "cast": [{"id": 17419, "name": "Bryan Cranston", "roles": [{"character": "Walter White", "episode_count": 62}]}],
                    "crew": [{"id": 66633, "name": "Vince Gilligan", "department": "Writing", "jobs": [{"job": "Writer"}, {"job": "Creator"}]}]
                }}"#,
        )
        .unwrap();

        assert_eq!(detail.display_title(), Some("Breaking Bad"));
        assert_eq!(detail.date(), Some("2008-01-20"));
        assert_eq!(detail.credits.unwrap().cast[0].character.as_deref(), Some("Walter White"));

        let aggregate = detail.aggregate_credits.unwrap();
        assert_eq!(aggregate.cast[0].roles[0].character, "Walter White");
        assert_eq!(aggregate.crew[0].jobs.len(), 2);
    }

    #[test]
    fn test_production_detail_without_credits() {
        let detail: ProductionDetail =
            serde_json::from_str(r#"{"id": 603, "title": "The Matrix"}"#).unwrap();
        assert!(detail.credits.is_none());
        assert!(detail.aggregate_credits.is_none());
    }

    #[test]
    fn test_genre_year_stat_without_dates() {
        let detail: ProductionDetail =
            serde_json::from_str(r#"{"id": 1, "name": "Pilot", "first_air_date": ""}"#).unwrap();
        assert_eq!(detail.genre_year_stat(), GenreYearStat::default());
    }
}
