use serde::{Deserialize, Serialize};

use super::enums::{GuidanceMode, HazardLabel, HazardSource};

/// Outcome of classification plus guide resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageResult {
    pub hazard: HazardLabel,
    pub hazard_source: HazardSource,
    /// Resolved guide keys, primary first.
    #[serde(rename = "guidesUsed")]
    pub guide_keys: Vec<String>,
    pub can_deep_dive: bool,
}

impl TriageResult {
    pub fn new(hazard: HazardLabel, hazard_source: HazardSource, guide_keys: Vec<String>) -> Self {
        let can_deep_dive = !guide_keys.is_empty();
        Self {
            hazard,
            hazard_source,
            guide_keys,
            can_deep_dive,
        }
    }

    /// The guide used for document-grounded answers, if any resolved.
    pub fn primary_guide(&self) -> Option<&str> {
        self.guide_keys.first().map(String::as_str)
    }
}

/// Full response for the triage endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidanceResponse {
    #[serde(flatten)]
    pub triage: TriageResult,
    #[serde(rename = "guidance")]
    pub guidance_text: String,
    pub mode: GuidanceMode,
}
