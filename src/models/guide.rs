use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Media type assumed when a registry entry does not name one.
pub const DEFAULT_MIME_TYPE: &str = "application/pdf";

/// A reference guide the AI service can read as an attached document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideEntry {
    pub key: String,
    /// Opaque locator the AI service resolves (e.g. a Files API URI).
    pub file_uri: String,
    pub mime_type: String,
    pub display_name: Option<String>,
    pub original_filename: Option<String>,
    /// Store-side handle of the uploaded file, when the uploader recorded one.
    pub file_name: Option<String>,
}

/// Snapshot of the guide registry, keyed by guide key.
pub type GuideMap = BTreeMap<String, GuideEntry>;
