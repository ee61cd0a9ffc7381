//! Configuration: application constants and CLI/environment arguments.
//!
//! Every option can be set as a flag or an environment variable; a `.env`
//! file in the working directory is loaded first by the binary.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use crate::pipeline::guides::{HttpObjectStore, LocalStore, RegistrySource, StoreError};
use crate::pipeline::llm::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Application-level constants
pub const APP_NAME: &str = "hazard-triage";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Filter used when `RUST_LOG` is unset.
pub fn default_log_filter(level: &str) -> String {
    format!("hazard_triage={level},tower_http=info,warn")
}

/// Hazard triage service
#[derive(Parser, Debug, Clone)]
#[command(name = "hazard-triage", version)]
#[command(about = "Classify incident reports into hazards and answer with safety guidance")]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "LISTEN", default_value = "0.0.0.0:5000")]
    pub listen: SocketAddr,

    /// Gemini API key; without it every AI call falls back
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    pub gemini_model: String,

    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub gemini_base_url: String,

    /// Timeout for each AI or store call, in seconds
    #[arg(long, env = "AI_TIMEOUT_SECS", default_value = "30")]
    pub ai_timeout_secs: u64,

    /// Object store base URL holding the guide registry (e.g. https://storage.googleapis.com)
    #[arg(long, env = "GUIDES_ENDPOINT")]
    pub guides_endpoint: Option<String>,

    /// Bucket of the registry object
    #[arg(long, env = "GUIDES_BUCKET", default_value = "")]
    pub guides_bucket: String,

    /// Name of the registry object
    #[arg(long, env = "GUIDES_OBJECT", default_value = "guides_map.json")]
    pub guides_object: String,

    /// Local registry file, read when the object store is unset or fails
    #[arg(long, env = "GUIDES_MAP", default_value = "guides_map.json")]
    pub guides_map: PathBuf,

    /// Situations catalogue served at /situations
    #[arg(long, env = "SITUATIONS", default_value = "situations_seed.json")]
    pub situations: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.ai_timeout_secs == 0 {
            return Err("AI_TIMEOUT_SECS must be greater than zero".into());
        }
        if self.gemini_model.trim().is_empty() {
            return Err("GEMINI_MODEL must not be empty".into());
        }
        if let Some(endpoint) = &self.guides_endpoint {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(format!("GUIDES_ENDPOINT must be an http(s) URL, got {endpoint}"));
            }
        }
        Ok(())
    }

    /// Registry sources in lookup order: object store first (when
    /// configured), then the local file.
    pub fn registry_sources(&self) -> Result<Vec<RegistrySource>, StoreError> {
        let mut sources = Vec::new();

        if let Some(endpoint) = self.guides_endpoint.as_deref().filter(|e| !e.is_empty()) {
            let store = HttpObjectStore::new(endpoint, self.ai_timeout_secs)?;
            sources.push(RegistrySource::new(
                Arc::new(store),
                &self.guides_bucket,
                &self.guides_object,
            ));
        }

        let (local, key) = LocalStore::for_file(&self.guides_map);
        sources.push(RegistrySource::new(Arc::new(local), "", &key));

        Ok(sources)
    }
}
