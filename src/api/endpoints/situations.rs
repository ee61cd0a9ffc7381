use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::api::types::ApiContext;

/// `GET /situations` — the curated catalogue, unchanged.
pub async fn list(State(ctx): State<ApiContext>) -> Json<Value> {
    Json(ctx.situations.as_ref().clone())
}
