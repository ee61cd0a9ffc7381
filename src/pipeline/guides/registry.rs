//! Guide registry: which reference guides exist and where their documents live.
//!
//! Loaded lazily from an ordered list of sources (durable store first, local
//! copy second) and cached as one immutable snapshot. A refresh builds a new
//! snapshot off-lock and swaps it in whole, so readers never see a partial map.
//! Fetch or parse failures never reach the caller; the registry degrades to
//! the last good snapshot, or to no guides at all until the next refresh.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde::Deserialize;
use thiserror::Error;

use super::store::{DocumentStore, StoreError};
use crate::models::{GuideEntry, GuideMap, DEFAULT_MIME_TYPE};

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Malformed guide registry: {0}")]
    Malformed(String),
}

/// Persisted entry format, as written by the guide uploader.
#[derive(Deserialize)]
struct StoredGuide {
    file_uri: Option<String>,
    mime_type: Option<String>,
    file_name: Option<String>,
    display_name: Option<String>,
    original_filename: Option<String>,
}

/// Parse the persisted registry JSON (`{ key: { file_uri, mime_type, ... } }`).
///
/// Entries without a document locator cannot be attached to a prompt and
/// are skipped.
pub fn parse_guides_map(bytes: &[u8]) -> Result<GuideMap, RegistryError> {
    let raw: HashMap<String, StoredGuide> =
        serde_json::from_slice(bytes).map_err(|e| RegistryError::Malformed(e.to_string()))?;

    let mut map = GuideMap::new();
    for (key, stored) in raw {
        let Some(file_uri) = stored.file_uri.filter(|u| !u.trim().is_empty()) else {
            tracing::warn!(guide = %key, "Registry entry missing file_uri, skipping");
            continue;
        };
        let mime_type = stored
            .mime_type
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string());

        map.insert(
            key.clone(),
            GuideEntry {
                key,
                file_uri,
                mime_type,
                display_name: stored.display_name,
                original_filename: stored.original_filename,
                file_name: stored.file_name,
            },
        );
    }
    Ok(map)
}

/// One place the registry JSON can be read from.
pub struct RegistrySource {
    store: Arc<dyn DocumentStore>,
    bucket: String,
    key: String,
}

impl RegistrySource {
    pub fn new(store: Arc<dyn DocumentStore>, bucket: &str, key: &str) -> Self {
        Self {
            store,
            bucket: bucket.to_string(),
            key: key.to_string(),
        }
    }

    fn fetch(&self) -> Result<GuideMap, RegistryError> {
        let bytes = self.store.get(&self.bucket, &self.key)?;
        parse_guides_map(&bytes)
    }

    fn describe(&self) -> String {
        format!("{} [{}/{}]", self.store.describe(), self.bucket, self.key)
    }
}

/// Injectable, refreshable guide registry.
pub struct GuideRegistry {
    sources: Vec<RegistrySource>,
    cache: RwLock<Option<Arc<GuideMap>>>,
}

impl GuideRegistry {
    /// Registry reading from `sources` in order; nothing is fetched until
    /// the first `load`.
    pub fn new(sources: Vec<RegistrySource>) -> Self {
        Self {
            sources,
            cache: RwLock::new(None),
        }
    }

    /// Registry with a fixed snapshot and no backing sources.
    pub fn from_map(map: GuideMap) -> Self {
        Self {
            sources: Vec::new(),
            cache: RwLock::new(Some(Arc::new(map))),
        }
    }

    /// Current snapshot, fetching it first if nothing is cached or
    /// `force_refresh` is set.
    pub fn load(&self, force_refresh: bool) -> Arc<GuideMap> {
        if !force_refresh {
            if let Some(cached) = self.cached() {
                return cached;
            }
        }

        match self.fetch_first_available() {
            Some(map) => {
                let snapshot = Arc::new(map);
                let mut guard = self.cache.write().unwrap_or_else(|e| e.into_inner());
                *guard = Some(Arc::clone(&snapshot));
                snapshot
            }
            None => {
                // Keep the last good snapshot; with none, cache the empty map
                // so only an explicit refresh goes back to the sources.
                let mut guard = self.cache.write().unwrap_or_else(|e| e.into_inner());
                Arc::clone(guard.get_or_insert_with(|| Arc::new(GuideMap::new())))
            }
        }
    }

    pub fn refresh(&self) -> Arc<GuideMap> {
        self.load(true)
    }

    pub fn lookup(&self, key: &str) -> Option<GuideEntry> {
        self.load(false).get(key).cloned()
    }

    fn cached(&self) -> Option<Arc<GuideMap>> {
        self.cache
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .map(Arc::clone)
    }

    fn fetch_first_available(&self) -> Option<GuideMap> {
        for source in &self.sources {
            match source.fetch() {
                Ok(map) => {
                    tracing::info!(
                        source = %source.describe(),
                        guides = map.len(),
                        "Guide registry loaded"
                    );
                    return Some(map);
                }
                Err(e) => {
                    tracing::warn!(
                        source = %source.describe(),
                        error = %e,
                        "Guide registry source failed"
                    );
                }
            }
        }
        if !self.sources.is_empty() {
            tracing::error!("All guide registry sources failed; serving without new guides");
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::guides::store::InMemoryStore;

    const MAP_JSON: &str = r#"{
        "flood_preparedness": {
            "file_name": "files/abc123",
            "file_uri": "https://files.example/abc123",
            "mime_type": "application/pdf",
            "display_name": "Flood Preparedness Guide"
        },
        "household_preparedness": {
            "file_uri": "https://files.example/def456"
        },
        "broken_entry": {
            "file_name": "files/zzz"
        }
    }"#;

    fn store_with(json: &str) -> Arc<InMemoryStore> {
        let store = Arc::new(InMemoryStore::new());
        store.put("guides", "guides_map.json", json.as_bytes());
        store
    }

    #[test]
    fn parse_skips_entries_without_locator() {
        let map = parse_guides_map(MAP_JSON.as_bytes()).unwrap();
        assert_eq!(map.len(), 2);
        assert!(!map.contains_key("broken_entry"));

        let flood = &map["flood_preparedness"];
        assert_eq!(flood.key, "flood_preparedness");
        assert_eq!(flood.display_name.as_deref(), Some("Flood Preparedness Guide"));
        assert_eq!(flood.file_name.as_deref(), Some("files/abc123"));
    }

    #[test]
    fn parse_defaults_mime_type() {
        let map = parse_guides_map(MAP_JSON.as_bytes()).unwrap();
        assert_eq!(map["household_preparedness"].mime_type, "application/pdf");
    }

    #[test]
    fn parse_rejects_non_object() {
        assert!(matches!(
            parse_guides_map(b"[1, 2, 3]"),
            Err(RegistryError::Malformed(_))
        ));
        assert!(parse_guides_map(b"not json").is_err());
    }

    #[test]
    fn load_caches_until_forced() {
        let store = store_with(MAP_JSON);
        let registry =
            GuideRegistry::new(vec![RegistrySource::new(store.clone(), "guides", "guides_map.json")]);

        assert_eq!(registry.load(false).len(), 2);

        // Store changes are invisible until a forced refresh.
        store.put("guides", "guides_map.json", b"{}");
        assert_eq!(registry.load(false).len(), 2);
        assert_eq!(registry.refresh().len(), 0);
        assert_eq!(registry.load(false).len(), 0);
    }

    #[test]
    fn falls_back_to_secondary_source() {
        let primary: Arc<InMemoryStore> = Arc::new(InMemoryStore::unreachable());
        let secondary = store_with(MAP_JSON);
        let registry = GuideRegistry::new(vec![
            RegistrySource::new(primary, "guides", "guides_map.json"),
            RegistrySource::new(secondary, "guides", "guides_map.json"),
        ]);

        assert!(registry.lookup("flood_preparedness").is_some());
    }

    #[test]
    fn malformed_primary_falls_back() {
        let primary = store_with("{ not json");
        let secondary = store_with(MAP_JSON);
        let registry = GuideRegistry::new(vec![
            RegistrySource::new(primary, "guides", "guides_map.json"),
            RegistrySource::new(secondary, "guides", "guides_map.json"),
        ]);
        assert_eq!(registry.load(false).len(), 2);
    }

    #[test]
    fn all_sources_failing_yields_empty_map() {
        let registry = GuideRegistry::new(vec![
            RegistrySource::new(Arc::new(InMemoryStore::unreachable()), "g", "k"),
            RegistrySource::new(Arc::new(InMemoryStore::new()), "g", "k"),
        ]);
        assert!(registry.load(false).is_empty());
        assert!(registry.lookup("flood_preparedness").is_none());
    }

    #[test]
    fn failed_load_is_cached_until_refresh() {
        let store = Arc::new(InMemoryStore::new());
        let registry = GuideRegistry::new(vec![RegistrySource::new(
            store.clone(),
            "guides",
            "guides_map.json",
        )]);
        assert!(registry.load(false).is_empty());

        store.put("guides", "guides_map.json", MAP_JSON.as_bytes());
        assert!(registry.load(false).is_empty());
        assert_eq!(registry.refresh().len(), 2);
        assert_eq!(registry.load(false).len(), 2);
    }

    #[test]
    fn unreachable_sources_are_fetched_once() {
        let primary = Arc::new(InMemoryStore::unreachable());
        let secondary = Arc::new(InMemoryStore::unreachable());
        let registry = GuideRegistry::new(vec![
            RegistrySource::new(primary.clone(), "guides", "guides_map.json"),
            RegistrySource::new(secondary.clone(), "guides", "guides_map.json"),
        ]);

        for _ in 0..5 {
            assert!(registry.load(false).is_empty());
            assert!(registry.lookup("flood_preparedness").is_none());
        }
        assert_eq!(primary.get_count(), 1);
        assert_eq!(secondary.get_count(), 1);

        registry.refresh();
        assert_eq!(primary.get_count(), 2);
    }

    #[test]
    fn failed_refresh_keeps_last_good_snapshot() {
        let store = store_with(MAP_JSON);
        let registry = GuideRegistry::new(vec![RegistrySource::new(
            store.clone(),
            "guides",
            "guides_map.json",
        )]);
        assert_eq!(registry.load(false).len(), 2);

        store.put("guides", "guides_map.json", b"garbage");
        assert_eq!(registry.refresh().len(), 2);
    }

    #[test]
    fn from_map_serves_fixed_snapshot() {
        let mut map = GuideMap::new();
        map.insert(
            "winter_storm_guide".into(),
            GuideEntry {
                key: "winter_storm_guide".into(),
                file_uri: "uri".into(),
                mime_type: DEFAULT_MIME_TYPE.into(),
                display_name: None,
                original_filename: None,
                file_name: None,
            },
        );
        let registry = GuideRegistry::from_map(map);
        assert!(registry.lookup("winter_storm_guide").is_some());
        assert_eq!(registry.refresh().len(), 1);
    }

    #[test]
    fn concurrent_refreshes_leave_a_whole_snapshot() {
        let store = store_with(MAP_JSON);
        let registry = Arc::new(GuideRegistry::new(vec![RegistrySource::new(
            store,
            "guides",
            "guides_map.json",
        )]));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || registry.refresh().len())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 2);
        }
        assert_eq!(registry.load(false).len(), 2);
    }
}
