pub mod enums;
pub mod guide;
pub mod triage;

pub use enums::{GuidanceMode, HazardLabel, HazardSource, InvalidEnum};
pub use guide::{GuideEntry, GuideMap, DEFAULT_MIME_TYPE};
pub use triage::{GuidanceResponse, TriageResult};
