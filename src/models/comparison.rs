use serde::{Deserialize, Serialize};

use super::catalog::ProductionDetail;
use super::credit::{year_prefix, CreditKey, MediaKind};

/// Header of one side of a comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparedProduction {
    pub id: u64,
    pub media_type: MediaKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub poster_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

impl ComparedProduction {
    pub fn from_detail(key: CreditKey, detail: &ProductionDetail) -> Self {
        Self {
            id: key.id,
            media_type: key.media_kind,
            title: detail.display_title().map(str::to_string),
            poster_path: detail.poster_path.clone(),
            year: detail.date().map(year_prefix),
        }
    }
}

/// A person credited on both productions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedPerson {
    pub id: u64,
    pub name: String,
    pub profile_path: Option<String>,
    pub role_in_a: String,
    pub role_in_b: String,
}

/// Shared people by primary department
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SharedGroups {
    pub acting: Vec<SharedPerson>,
    pub directing: Vec<SharedPerson>,
    pub writing: Vec<SharedPerson>,
    pub production: Vec<SharedPerson>,
    pub other: Vec<SharedPerson>,
}

impl SharedGroups {
    pub fn total(&self) -> usize {
        self.acting.len()
            + self.directing.len()
            + self.writing.len()
            + self.production.len()
            + self.other.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub production_a: ComparedProduction,
    pub production_b: ComparedProduction,
    pub shared: SharedGroups,
    pub total_shared: usize,
}
