//! Guidance generation.
//!
//! Two generators sit behind the mode selection in `pipeline::triage`:
//! free-form guidance, which always produces an answer (AI text or the
//! deterministic fallback), and document-grounded guidance, which answers
//! from one attached guide and reports failures as diagnostic text.

pub mod fallback;
pub mod prompt;

use crate::models::{GuideMap, HazardLabel};
use crate::pipeline::llm::{Attachment, GenerateRequest, LlmError, LlmGenerate};

pub use fallback::fallback_guidance;
use prompt::{deep_guidance_prompt, guidance_prompt, DEEP_GUIDANCE_SYSTEM_PROMPT, GUIDANCE_SYSTEM_PROMPT};

/// Free-form AI guidance, or the fallback template on any failure.
pub fn generate_guidance(llm: &dyn LlmGenerate, text: &str, hazard: HazardLabel) -> String {
    let user_prompt = guidance_prompt(text, hazard);
    match llm.generate(&GenerateRequest::new(GUIDANCE_SYSTEM_PROMPT, &user_prompt)) {
        Ok(guidance) => guidance,
        Err(e) => {
            tracing::warn!(error = %e, hazard = %hazard, "Guidance generation failed, using fallback");
            fallback_guidance(text, hazard)
        }
    }
}

/// Guidance grounded in the document of `guide_key`, looked up in the same
/// registry snapshot the guides were resolved from.
///
/// Unknown guides short-circuit without an AI call. AI failures come back
/// as a diagnostic message rather than free-form guidance.
pub fn generate_deep_guidance(
    llm: &dyn LlmGenerate,
    guides: &GuideMap,
    text: &str,
    hazard: HazardLabel,
    guide_key: &str,
) -> String {
    let Some(guide) = guides.get(guide_key) else {
        tracing::info!(guide = %guide_key, "Requested guide not in registry");
        return guide_unavailable(guide_key);
    };

    let user_prompt = deep_guidance_prompt(text, hazard, guide_key);
    let request = GenerateRequest::new(DEEP_GUIDANCE_SYSTEM_PROMPT, &user_prompt).with_attachment(
        Attachment {
            file_uri: &guide.file_uri,
            mime_type: &guide.mime_type,
        },
    );

    match llm.generate(&request) {
        Ok(answer) => answer,
        Err(e) => {
            tracing::warn!(error = %e, guide = %guide_key, "Document-grounded guidance failed");
            deep_diagnostic(&e)
        }
    }
}

pub fn guide_unavailable(guide_key: &str) -> String {
    format!("Guide '{guide_key}' is not available.")
}

/// User-facing text for a failed document-grounded call.
pub fn deep_diagnostic(error: &LlmError) -> String {
    match error {
        LlmError::NotConfigured => "Gemini API key not configured.".to_string(),
        LlmError::EmptyResponse => {
            "Got an empty response from Gemini when using the PDF.".to_string()
        }
        other => format!("There was an error using Gemini Files API for this guide: {other}"),
    }
}
