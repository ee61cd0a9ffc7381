//! Hazard classification: literal phrase rules first, AI only when the
//! rules are inconclusive.

pub mod ai;
pub mod rules;

use crate::models::{HazardLabel, HazardSource};
use crate::pipeline::llm::LlmGenerate;

pub use ai::{classify_by_ai, normalize_label};
pub use rules::{classify_by_rules, HAZARD_RULES};

/// Classify with rules, falling back to the AI classifier on `Unknown`.
///
/// Never returns `Unknown`.
pub fn classify_hazard(llm: &dyn LlmGenerate, text: &str) -> (HazardLabel, HazardSource) {
    match classify_by_rules(text) {
        HazardLabel::Unknown => (classify_by_ai(llm, text), HazardSource::Ai),
        label => (label, HazardSource::Rules),
    }
}
