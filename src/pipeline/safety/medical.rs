//! Medical emergency guard.
//!
//! Runs before any classification. A match short-circuits the whole
//! pipeline: no AI call, no guides, only a call-emergency-services message.

use crate::models::{GuidanceMode, GuidanceResponse, HazardLabel, HazardSource, TriageResult};

/// Life-threatening symptom phrases, matched as lower-case substrings.
pub const MEDICAL_KEYWORDS: &[&str] = &[
    "unconscious",
    "not breathing",
    "can't breathe",
    "cannot breathe",
    "chest pain",
    "heart attack",
    "stroke",
    "seizure",
    "bleeding a lot",
    "heavy bleeding",
    "spurting blood",
    "passed out",
];

pub const MEDICAL_EMERGENCY_GUIDANCE: &str = "It sounds like there might be a medical emergency. \
This app cannot give medical advice. Please call emergency services \
(911 or your local emergency number) immediately or seek urgent medical help.";

/// Whether the text mentions an obvious medical emergency.
pub fn is_medical_emergency(text: &str) -> bool {
    let lowered = text.to_lowercase();
    MEDICAL_KEYWORDS.iter().any(|k| lowered.contains(k))
}

/// The fixed response returned when the guard trips, in either mode.
pub fn medical_emergency_response(mode: GuidanceMode) -> GuidanceResponse {
    GuidanceResponse {
        triage: TriageResult::new(HazardLabel::MedicalEmergency, HazardSource::Rules, vec![]),
        guidance_text: MEDICAL_EMERGENCY_GUIDANCE.to_string(),
        mode,
    }
}
