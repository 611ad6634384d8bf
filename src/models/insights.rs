use serde::{Deserialize, Serialize};

use super::credit::{CreditKey, MediaKind};

/// A title the viewer has already watched. Presence only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchEntry {
    pub tmdb_id: u64,
    pub media_type: MediaKind,
}

impl WatchEntry {
    pub fn key(&self) -> CreditKey {
        CreditKey::new(self.media_type, self.tmdb_id)
    }
}

impl From<CreditKey> for WatchEntry {
    fn from(key: CreditKey) -> Self {
        Self {
            tmdb_id: key.id,
            media_type: key.media_kind,
        }
    }
}

/// Genres and release year of one watched title
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenreYearStat {
    pub genre_ids: Vec<u32>,
    /// Four-digit year, if the title has a date
    pub year: Option<String>,
}

/// A candid photo of a person taken in a specific production
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaggedImage {
    pub production_id: u64,
    pub image_path: String,
}

/// One of the productions a person is best known for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnownForEntry {
    pub id: u64,
    pub media_type: MediaKind,
    pub title: String,
    pub poster_path: Option<String>,
    pub year: Option<String>,
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_count: Option<u32>,
    /// "Main Cast", "Recurring Cast", "Guest", "Cast", or the crew job title
    pub role_label: String,
}

impl KnownForEntry {
    pub fn key(&self) -> CreditKey {
        CreditKey::new(self.media_type, self.id)
    }
}

/// A credit the viewer may recognize the person from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionEntry {
    pub id: u64,
    pub media_type: MediaKind,
    pub title: String,
    pub character: String,
    pub poster_path: Option<String>,
    pub year: Option<String>,
    /// Recognition likelihood in [0, 1]; exactly 1.0 for confirmed entries
    pub score: f64,
    pub tagged_image_path: Option<String>,
}

impl PredictionEntry {
    pub fn key(&self) -> CreditKey {
        CreditKey::new(self.media_type, self.id)
    }
}

/// Credits partitioned by how likely the viewer is to recognize them
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub confirmed: Vec<PredictionEntry>,
    pub likely: Vec<PredictionEntry>,
    pub possible: Vec<PredictionEntry>,
    pub watch_list_size: usize,
}
