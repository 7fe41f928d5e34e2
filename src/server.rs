use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use std::sync::Arc;

use crate::error::{ModelAtlasError, Result};
use crate::models::ModelRecord;
use crate::search::ModelSearcher;

#[derive(Clone)]
pub struct AppState {
    searcher: Arc<dyn ModelSearcher>,
}

impl AppState {
    pub fn new(searcher: Arc<dyn ModelSearcher>) -> Self {
        Self { searcher }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/search",
            post(search_handler).fallback(method_not_allowed),
        )
        .route("/health", get(|| async { "ok" }))
        .with_state(state)
}

/// `POST /api/search` with body `{"query": "..."}`. Returns the model
/// records as a bare JSON array, matching what the search UI consumes.
async fn search_handler(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<Json<Vec<ModelRecord>>> {
    let query = body
        .as_ref()
        .and_then(|Json(value)| value.get("query"))
        .and_then(Value::as_str)
        .ok_or_else(|| ModelAtlasError::InvalidRequest("Query is required".to_string()))?;

    let records = state.searcher.search(query).await?;
    Ok(Json(records))
}

async fn method_not_allowed() -> ModelAtlasError {
    ModelAtlasError::MethodNotAllowed
}
