use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{required_text, ApiContext, ExplicitGuidanceRequest};
use crate::pipeline::ExplicitGuidanceResponse;

/// `POST /guidance/deep-explicit` — answer from a caller-chosen guide,
/// skipping classification.
pub async fn deep_explicit(
    State(ctx): State<ApiContext>,
    payload: Result<Json<ExplicitGuidanceRequest>, JsonRejection>,
) -> Result<Json<ExplicitGuidanceResponse>, ApiError> {
    let Json(req) = payload?;
    let text = required_text(req.situation_text.as_deref(), "situationText")?;
    let guide_key = required_text(req.guide_key.as_deref(), "guideKey")?;
    let hazard = req.hazard;

    let pipeline = ctx.pipeline.clone();
    let response = tokio::task::spawn_blocking(move || {
        pipeline.explicit_deep(&text, hazard.as_deref(), &guide_key)
    })
    .await?;
    Ok(Json(response))
}
