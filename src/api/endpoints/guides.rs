//! Guide registry endpoints.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::GuideMap;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideSummary {
    pub key: String,
    pub display_name: Option<String>,
    pub mime_type: String,
    pub file_uri: String,
}

#[derive(Serialize)]
pub struct GuidesResponse {
    pub guides: Vec<GuideSummary>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub guides_loaded: usize,
}

fn summarize(map: &GuideMap) -> Vec<GuideSummary> {
    map.values()
        .map(|g| GuideSummary {
            key: g.key.clone(),
            display_name: g.display_name.clone(),
            mime_type: g.mime_type.clone(),
            file_uri: g.file_uri.clone(),
        })
        .collect()
}

/// `GET /guides` — entries of the current snapshot, sorted by key.
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<GuidesResponse>, ApiError> {
    let registry = ctx.pipeline.registry().clone();
    let guides = tokio::task::spawn_blocking(move || summarize(&registry.load(false))).await?;
    Ok(Json(GuidesResponse { guides }))
}

/// `POST /guides/refresh` — force a reload from the registry sources.
pub async fn refresh(State(ctx): State<ApiContext>) -> Result<Json<RefreshResponse>, ApiError> {
    let registry = ctx.pipeline.registry().clone();
    let guides_loaded = tokio::task::spawn_blocking(move || registry.refresh().len()).await?;
    tracing::info!(guides_loaded, "Guide registry refreshed on request");
    Ok(Json(RefreshResponse { guides_loaded }))
}
