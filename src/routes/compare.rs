use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{Comparison, CreditKey, MediaKind},
    routes::AppState,
    services::compare,
};

/// `?a=&aType=&b=&bType=`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareParams {
    pub a: Option<String>,
    pub a_type: Option<String>,
    pub b: Option<String>,
    pub b_type: Option<String>,
}

impl CompareParams {
    /// Both production keys, or `InvalidInput` if any part is missing or malformed
    pub fn keys(&self) -> AppResult<(CreditKey, CreditKey)> {
        let a = Self::key(self.a.as_deref(), self.a_type.as_deref());
        let b = Self::key(self.b.as_deref(), self.b_type.as_deref());
        a.zip(b)
            .ok_or_else(|| AppError::InvalidInput("Missing or invalid parameters".to_string()))
    }

    fn key(id: Option<&str>, media_type: Option<&str>) -> Option<CreditKey> {
        let id = id?.trim().parse().ok()?;
        let media_kind: MediaKind = media_type?.parse().ok()?;
        Some(CreditKey::new(media_kind, id))
    }
}

/// Handler for the people two productions share
pub async fn compare(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<CompareParams>,
) -> AppResult<Json<Comparison>> {
    let (a, b) = params.keys()?;

    tracing::info!(request_id = %request_id, production_a = %a, production_b = %b, "Comparing productions");

    let comparison = compare::compare(state.catalog.as_ref(), a, b).await?;
    Ok(Json(comparison))
}
