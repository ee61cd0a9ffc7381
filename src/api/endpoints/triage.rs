//! Triage endpoints.
//!
//! - `POST /triage` — classify and answer with free-form guidance
//! - `POST /triage/deep` — classify and answer from the primary guide

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{required_text, ApiContext, TriageRequest};
use crate::models::{GuidanceMode, GuidanceResponse};

/// `POST /triage`
pub async fn normal(
    State(ctx): State<ApiContext>,
    payload: Result<Json<TriageRequest>, JsonRejection>,
) -> Result<Json<GuidanceResponse>, ApiError> {
    let Json(req) = payload?;
    run(ctx, req, GuidanceMode::Normal).await
}

/// `POST /triage/deep`
pub async fn deep(
    State(ctx): State<ApiContext>,
    payload: Result<Json<TriageRequest>, JsonRejection>,
) -> Result<Json<GuidanceResponse>, ApiError> {
    let Json(req) = payload?;
    run(ctx, req, GuidanceMode::Deep).await
}

async fn run(
    ctx: ApiContext,
    req: TriageRequest,
    mode: GuidanceMode,
) -> Result<Json<GuidanceResponse>, ApiError> {
    let text = required_text(req.situation_text.as_deref(), "situationText")?;
    tracing::debug!(mode = %mode, text = %text, "Triage request");

    let pipeline = ctx.pipeline.clone();
    let response = tokio::task::spawn_blocking(move || pipeline.run(&text, mode)).await?;
    Ok(Json(response))
}
