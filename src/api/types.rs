//! Shared state and request bodies for the HTTP layer.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::api::error::ApiError;
use crate::pipeline::TriagePipeline;

/// Shared context for all routes.
#[derive(Clone)]
pub struct ApiContext {
    pub pipeline: TriagePipeline,
    pub situations: Arc<Value>,
}

impl ApiContext {
    pub fn new(pipeline: TriagePipeline, situations: Value) -> Self {
        Self {
            pipeline,
            situations: Arc::new(situations),
        }
    }
}

/// Body of `POST /triage` and `POST /triage/deep`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageRequest {
    #[serde(default)]
    pub situation_text: Option<String>,
}

/// Body of `POST /guidance/deep-explicit`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplicitGuidanceRequest {
    #[serde(default)]
    pub situation_text: Option<String>,
    #[serde(default)]
    pub hazard: Option<String>,
    #[serde(default)]
    pub guide_key: Option<String>,
}

/// Trimmed, non-empty value of a required text field.
pub fn required_text(value: Option<&str>, field: &str) -> Result<String, ApiError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ApiError::BadRequest(format!("{field} is required")))
}
