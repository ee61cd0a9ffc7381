use std::str::FromStr;

use crate::models::HazardLabel;
use crate::pipeline::llm::{GenerateRequest, LlmGenerate};

/// Loose answers the model is known to give, mapped to canonical labels.
const LABEL_ALIASES: &[(&str, HazardLabel)] = &[
    ("power outage", HazardLabel::PowerOutage),
    ("snow", HazardLabel::SnowStuck),
    ("general", HazardLabel::GeneralSafety),
];

pub fn classifier_system_prompt() -> String {
    let labels: Vec<&str> = HazardLabel::classifiable().map(|l| l.as_str()).collect();
    format!(
        "You are a hazard classifier. Return exactly one label from this list:\n\
         [{}]\n\
         If unsure, return 'general_safety'.",
        labels.join(", ")
    )
}

/// Map raw model output onto the closed label set.
///
/// Anything outside it, including labels only the pipeline itself may
/// assign, becomes `GeneralSafety`.
pub fn normalize_label(raw: &str) -> HazardLabel {
    let cleaned = raw.trim().to_lowercase();

    if let Ok(label) = HazardLabel::from_str(&cleaned) {
        if HazardLabel::classifiable().any(|l| l == label) {
            return label;
        }
        return HazardLabel::GeneralSafety;
    }

    LABEL_ALIASES
        .iter()
        .find(|(alias, _)| *alias == cleaned)
        .map(|(_, label)| *label)
        .unwrap_or(HazardLabel::GeneralSafety)
}

/// Ask the AI service for a label. Never fails: errors become `GeneralSafety`.
pub fn classify_by_ai(llm: &dyn LlmGenerate, text: &str) -> HazardLabel {
    let system = classifier_system_prompt();
    match llm.generate(&GenerateRequest::new(&system, text)) {
        Ok(raw) => {
            tracing::debug!(raw = %raw, "AI classifier raw output");
            normalize_label(&raw)
        }
        Err(e) => {
            tracing::warn!(error = %e, "AI classification failed, using general_safety");
            HazardLabel::GeneralSafety
        }
    }
}
