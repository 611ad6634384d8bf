use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use uuid::Uuid;

use super::credit::{CreditKey, MediaKind};
use super::insights::WatchEntry;

/// The two user-owned title lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    /// Titles the user wants to watch
    WatchList,
    /// Titles the user has already seen; the watch history predictions use
    SeenIt,
}

impl ListKind {
    pub fn table(&self) -> &'static str {
        match self {
            ListKind::WatchList => "watch_list_entries",
            ListKind::SeenIt => "seen_it_entries",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::WatchList => "watchlist",
            ListKind::SeenIt => "seenit",
        }
    }
}

impl Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "watchlist" => Ok(ListKind::WatchList),
            "seenit" => Ok(ListKind::SeenIt),
            other => Err(format!("unknown list '{}'", other)),
        }
    }
}

/// A title on one of a user's lists, with the display fields captured when
/// it was added
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntry {
    pub id: Uuid,
    pub user_id: String,
    pub tmdb_id: u64,
    pub media_type: MediaKind,
    pub title: String,
    pub poster_path: Option<String>,
    pub year: Option<String>,
    pub rating: Option<f64>,
    pub added_at: DateTime<Utc>,
}

impl ListEntry {
    pub fn new(user_id: impl Into<String>, item: NewListEntry) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            tmdb_id: item.key.id,
            media_type: item.key.media_kind,
            title: item.title,
            poster_path: item.poster_path,
            year: item.year,
            rating: item.rating,
            added_at: Utc::now(),
        }
    }

    pub fn key(&self) -> CreditKey {
        CreditKey::new(self.media_type, self.tmdb_id)
    }
}

impl From<&ListEntry> for WatchEntry {
    fn from(entry: &ListEntry) -> Self {
        WatchEntry::from(entry.key())
    }
}

/// A title to put on a list
#[derive(Debug, Clone, PartialEq)]
pub struct NewListEntry {
    pub key: CreditKey,
    pub title: String,
    pub poster_path: Option<String>,
    pub year: Option<String>,
    pub rating: Option<f64>,
}

impl NewListEntry {
    pub fn new(key: CreditKey, title: impl Into<String>) -> Self {
        Self {
            key,
            title: title.into(),
            poster_path: None,
            year: None,
            rating: None,
        }
    }
}

/// Column a list is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListSort {
    #[default]
    AddedAt,
    Title,
    Year,
    Rating,
}

impl ListSort {
    /// Unknown values fall back to the add date
    pub fn from_param(raw: &str) -> Self {
        match raw {
            "title" => ListSort::Title,
            "year" => ListSort::Year,
            "rating" => ListSort::Rating,
            _ => ListSort::AddedAt,
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            ListSort::AddedAt => "added_at",
            ListSort::Title => "title",
            ListSort::Year => "year",
            ListSort::Rating => "rating",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Anything but `asc` sorts descending
    pub fn from_param(raw: &str) -> Self {
        if raw == "asc" {
            SortOrder::Asc
        } else {
            SortOrder::Desc
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// How to filter and order a list; newest first by default
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListQuery {
    pub sort: ListSort,
    pub order: SortOrder,
    /// Only entries of this media kind
    pub media_kind: Option<MediaKind>,
    /// Case-insensitive title substring
    pub search: Option<String>,
}

impl ListQuery {
    /// Builds a query from raw request parameters. Unknown sort, order and
    /// filter values fall back to their defaults; a blank search is ignored.
    pub fn from_params(
        sort: Option<&str>,
        order: Option<&str>,
        filter: Option<&str>,
        search: Option<&str>,
    ) -> Self {
        Self {
            sort: sort.map(ListSort::from_param).unwrap_or_default(),
            order: order.map(SortOrder::from_param).unwrap_or_default(),
            media_kind: filter.and_then(|f| f.parse().ok()),
            search: search
                .map(str::trim)
                .filter(|q| !q.is_empty())
                .map(str::to_string),
        }
    }
}
