use axum::{
    extract::{Path, State},
    Extension, Json,
};
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::RequestId,
    models::KnownForEntry,
    routes::{parse_id, AppState},
    services::person_insights,
};

/// Handler for a person's known-for productions
pub async fn known_for(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<KnownForEntry>>> {
    let person_id = parse_id(&id, "person")?;

    tracing::info!(request_id = %request_id, person_id = person_id, "Ranking known-for credits");

    let entries = person_insights::known_for(state.catalog.as_ref(), person_id).await?;
    Ok(Json(entries))
}
