use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub guides_loaded: usize,
}

/// `GET /health` — liveness plus the size of the current guide snapshot.
pub async fn check(State(ctx): State<ApiContext>) -> Result<Json<HealthResponse>, ApiError> {
    let registry = ctx.pipeline.registry().clone();
    let guides_loaded = tokio::task::spawn_blocking(move || registry.load(false).len()).await?;

    Ok(Json(HealthResponse {
        status: "ok",
        version: crate::config::APP_VERSION,
        guides_loaded,
    }))
}
