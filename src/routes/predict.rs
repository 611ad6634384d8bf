use axum::{
    extract::{Path, State},
    Extension, Json,
};
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::{CurrentUser, RequestId},
    models::PredictionResult,
    routes::{parse_id, AppState},
    services::person_insights,
};

/// Handler for "where have I seen them" predictions
pub async fn predict(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Extension(user): Extension<CurrentUser>,
    Path(person_id): Path<String>,
) -> AppResult<Json<PredictionResult>> {
    let person_id = parse_id(&person_id, "person")?;
    let user_id = user.require()?;

    tracing::info!(
        request_id = %request_id,
        user_id = %user_id,
        person_id = person_id,
        "Processing prediction request"
    );

    let result = person_insights::predict_for_user(
        state.catalog.as_ref(),
        state.lists.as_ref(),
        user_id,
        person_id,
    )
    .await?;

    Ok(Json(result))
}
