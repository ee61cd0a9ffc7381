//! Curated situations catalogue, served verbatim to clients.

use std::path::Path;

use serde_json::Value;

/// Read the catalogue at `path`, or an empty array when the file is
/// missing or not valid JSON.
pub fn load_situations(path: &Path) -> Value {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Situations catalogue unreadable");
            return Value::Array(Vec::new());
        }
    };

    match serde_json::from_slice::<Value>(&bytes) {
        Ok(catalogue) => {
            let entries = catalogue.as_array().map(Vec::len).unwrap_or(0);
            tracing::info!(path = %path.display(), entries, "Situations catalogue loaded");
            catalogue
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Situations catalogue is not valid JSON");
            Value::Array(Vec::new())
        }
    }
}
