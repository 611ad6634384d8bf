use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::CurrentUser,
    models::{CreditKey, ListEntry, ListKind, ListQuery, MediaKind, NewListEntry},
    routes::AppState,
};

/// A production reference in remove and check requests
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListKeyRequest {
    pub tmdb_id: u64,
    pub media_type: MediaKind,
}

impl ListKeyRequest {
    fn key(&self) -> CreditKey {
        CreditKey::new(self.media_type, self.tmdb_id)
    }
}

/// Body of an add request; the display fields are stored with the entry
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddListItemRequest {
    pub tmdb_id: u64,
    pub media_type: MediaKind,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}

impl TryFrom<AddListItemRequest> for NewListEntry {
    type Error = AppError;

    fn try_from(request: AddListItemRequest) -> Result<Self, Self::Error> {
        let title = request
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::InvalidInput("Missing required field: title".to_string()))?;

        Ok(NewListEntry {
            key: CreditKey::new(request.media_type, request.tmdb_id),
            title,
            poster_path: request.poster_path,
            year: request.year,
            rating: request.rating,
        })
    }
}

/// Query string of a list request
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub sort: Option<String>,
    pub order: Option<String>,
    pub filter: Option<String>,
    pub q: Option<String>,
}

impl From<ListParams> for ListQuery {
    fn from(params: ListParams) -> Self {
        ListQuery::from_params(
            params.sort.as_deref(),
            params.order.as_deref(),
            params.filter.as_deref(),
            params.q.as_deref(),
        )
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResponse {
    pub present: bool,
}

fn parse_kind(raw: &str) -> AppResult<ListKind> {
    raw.parse().map_err(AppError::InvalidInput)
}

/// Entries on one of the caller's lists
///
/// Accepts `sort` (addedAt, title, year, rating), `order` (asc, desc),
/// `filter` (movie, tv) and `q` (title search).
pub async fn list_entries(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Path(kind): Path<String>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<ListEntry>>> {
    let kind = parse_kind(&kind)?;
    let user_id = user.require()?;

    let query = ListQuery::from(params);

    let entries = state.lists.list(user_id, kind, &query).await?;
    Ok(Json(entries))
}

/// Add a production to one of the caller's lists
pub async fn add_entry(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Path(kind): Path<String>,
    Json(request): Json<AddListItemRequest>,
) -> AppResult<(StatusCode, Json<ListEntry>)> {
    let kind = parse_kind(&kind)?;
    let user_id = user.require()?;
    let item = NewListEntry::try_from(request)?;

    let entry = state.lists.add(user_id, kind, item).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// Remove a production from one of the caller's lists
pub async fn remove_entry(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Path(kind): Path<String>,
    Json(request): Json<ListKeyRequest>,
) -> AppResult<StatusCode> {
    let kind = parse_kind(&kind)?;
    let user_id = user.require()?;
    let key = request.key();

    if state.lists.remove(user_id, kind, key).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("{} is not on the {}", key, kind)))
    }
}

/// Whether a production is on one of the caller's lists
///
/// Anonymous callers get `false` rather than an error so pages can render
/// list buttons without a session.
pub async fn check_entry(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Path(kind): Path<String>,
    Query(request): Query<ListKeyRequest>,
) -> AppResult<Json<CheckResponse>> {
    let kind = parse_kind(&kind)?;

    let present = match user.id() {
        Some(user_id) => state.lists.contains(user_id, kind, request.key()).await?,
        None => false,
    };

    Ok(Json(CheckResponse { present }))
}
