use axum::{
    http::StatusCode,
    middleware,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    db::UserListStore,
    error::{AppError, AppResult},
    middleware::{make_span_with_request_id, request_context_middleware},
    services::providers::CatalogProvider,
};

pub mod compare;
pub mod lists;
pub mod person;
pub mod predict;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogProvider>,
    pub lists: Arc<dyn UserListStore>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogProvider>, lists: Arc<dyn UserListStore>) -> Self {
        Self { catalog, lists }
    }
}

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(middleware::from_fn(request_context_middleware))
        .layer(CorsLayer::permissive())
}

/// API routes under /api/v1
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/person/:id/known-for", get(person::known_for))
        .route("/predict/:person_id", get(predict::predict))
        .route("/compare", get(compare::compare))
        .route(
            "/lists/:kind",
            get(lists::list_entries)
                .post(lists::add_entry)
                .delete(lists::remove_entry),
        )
        .route("/lists/:kind/check", get(lists::check_entry))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Parses a catalog id from a path segment
pub(crate) fn parse_id(raw: &str, what: &str) -> AppResult<u64> {
    raw.parse()
        .map_err(|_| AppError::InvalidInput(format!("Invalid {} ID: {}", what, raw)))
}
