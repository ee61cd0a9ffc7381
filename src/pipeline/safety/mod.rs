//! Safety guards that run before any classification.

pub mod medical;

pub use medical::{is_medical_emergency, medical_emergency_response, MEDICAL_EMERGENCY_GUIDANCE};
