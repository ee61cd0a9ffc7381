//! Triage pipeline: guard → classify → resolve guides → generate guidance.
//!
//! Every stage recovers its own collaborator failures, so `run` always
//! produces a complete response.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::models::{GuidanceMode, GuidanceResponse, GuideMap, HazardLabel, TriageResult};
use crate::pipeline::classify::{classify_hazard, normalize_label};
use crate::pipeline::guidance::{generate_deep_guidance, generate_guidance};
use crate::pipeline::guides::{resolve_guides, GuideRegistry};
use crate::pipeline::llm::LlmGenerate;
use crate::pipeline::safety::medical::{is_medical_emergency, medical_emergency_response};

/// Response for an explicitly requested document-grounded answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplicitGuidanceResponse {
    pub hazard: HazardLabel,
    pub guide_key: String,
    pub deep_guidance: String,
}

/// Shared, cheaply clonable pipeline handle.
#[derive(Clone)]
pub struct TriagePipeline {
    llm: Arc<dyn LlmGenerate>,
    registry: Arc<GuideRegistry>,
}

impl TriagePipeline {
    pub fn new(llm: Arc<dyn LlmGenerate>, registry: Arc<GuideRegistry>) -> Self {
        Self { llm, registry }
    }

    pub fn registry(&self) -> &Arc<GuideRegistry> {
        &self.registry
    }

    /// Classification and guide resolution, without guidance text.
    ///
    /// Medical emergencies come back as a terminal result with no guides.
    pub fn triage(&self, text: &str) -> TriageResult {
        if is_medical_emergency(text) {
            return medical_emergency_response(GuidanceMode::Normal).triage;
        }
        self.classify_and_resolve(text).0
    }

    /// Full request handling for the normal and deep modes.
    pub fn run(&self, text: &str, mode: GuidanceMode) -> GuidanceResponse {
        if is_medical_emergency(text) {
            tracing::info!(mode = %mode, "Medical emergency keywords matched, short-circuiting");
            return medical_emergency_response(mode);
        }

        let (triage, snapshot) = self.classify_and_resolve(text);
        let guidance_text = match (mode, triage.primary_guide()) {
            (GuidanceMode::Deep, Some(primary)) => generate_deep_guidance(
                self.llm.as_ref(),
                &snapshot,
                text,
                triage.hazard,
                primary,
            ),
            _ => generate_guidance(self.llm.as_ref(), text, triage.hazard),
        };

        GuidanceResponse {
            triage,
            guidance_text,
            mode,
        }
    }

    /// Document-grounded answer for a caller-chosen guide, skipping
    /// classification. A missing or unrecognised hazard becomes
    /// `general_safety`, and so do labels only the pipeline may assign.
    pub fn explicit_deep(
        &self,
        text: &str,
        hazard: Option<&str>,
        guide_key: &str,
    ) -> ExplicitGuidanceResponse {
        let hazard = hazard
            .filter(|h| !h.trim().is_empty())
            .map(normalize_label)
            .unwrap_or(HazardLabel::GeneralSafety);

        let snapshot = self.registry.load(false);
        let deep_guidance =
            generate_deep_guidance(self.llm.as_ref(), &snapshot, text, hazard, guide_key);

        ExplicitGuidanceResponse {
            hazard,
            guide_key: guide_key.to_string(),
            deep_guidance,
        }
    }

    /// Classify `text` and resolve its guides against one registry snapshot,
    /// returned alongside so later stages read the same guides.
    fn classify_and_resolve(&self, text: &str) -> (TriageResult, Arc<GuideMap>) {
        let (hazard, source) = classify_hazard(self.llm.as_ref(), text);
        let snapshot = self.registry.load(false);
        let guide_keys = resolve_guides(hazard, &snapshot);

        tracing::info!(
            hazard = %hazard,
            source = %source,
            guides = guide_keys.len(),
            "Situation triaged"
        );

        (TriageResult::new(hazard, source, guide_keys), snapshot)
    }
}
