pub mod classify;
pub mod guidance;
pub mod guides;
pub mod llm;
pub mod safety;
pub mod triage;

pub use triage::{ExplicitGuidanceResponse, TriagePipeline};
