//! Durable stores the guide registry is read from.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Object not found: {bucket}/{key}")]
    NotFound { bucket: String, key: String },

    #[error("Store connection failed: {0}")]
    Connection(String),

    #[error("Store returned HTTP {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Store I/O error: {0}")]
    Io(String),
}

/// `get(bucket, key) -> bytes` over some object store.
pub trait DocumentStore: Send + Sync {
    fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StoreError>;

    /// Short description for logs.
    fn describe(&self) -> String;
}

/// Public-object HTTP store (e.g. `https://storage.googleapis.com`).
///
/// Objects are fetched from `{base_url}/{bucket}/{key}`.
pub struct HttpObjectStore {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpObjectStore {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, StoreError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn object_url(&self, bucket: &str, key: &str) -> String {
        if bucket.is_empty() {
            format!("{}/{}", self.base_url, key)
        } else {
            format!("{}/{}/{}", self.base_url, bucket, key)
        }
    }
}

impl DocumentStore for HttpObjectStore {
    fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StoreError> {
        let url = self.object_url(bucket, key);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            });
        }
        if !status.is_success() {
            return Err(StoreError::Http {
                status: status.as_u16(),
                url,
            });
        }

        response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| StoreError::Connection(e.to_string()))
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

/// Directory-backed store: objects live at `{root}/{bucket}/{key}`.
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at the parent of `path`, plus the file name as key.
    pub fn for_file(path: &Path) -> (Self, String) {
        let root = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let key = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        (Self::new(root), key)
    }
}

impl DocumentStore for LocalStore {
    fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StoreError> {
        let path = self.root.join(bucket).join(key);
        std::fs::read(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => StoreError::NotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            },
            _ => StoreError::Io(format!("{}: {e}", path.display())),
        })
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// In-memory store for tests.
#[cfg(test)]
pub struct InMemoryStore {
    objects: std::sync::Mutex<std::collections::HashMap<(String, String), Vec<u8>>>,
    unreachable: bool,
    gets: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            objects: std::sync::Mutex::new(std::collections::HashMap::new()),
            unreachable: false,
            gets: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::new()
        }
    }

    pub fn put(&self, bucket: &str, key: &str, bytes: &[u8]) {
        self.objects
            .lock()
            .unwrap()
            .insert((bucket.to_string(), key.to_string()), bytes.to_vec());
    }

    /// Number of `get` calls made so far, successful or not.
    pub fn get_count(&self) -> usize {
        self.gets.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(test)]
impl DocumentStore for InMemoryStore {
    fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StoreError> {
        self.gets.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        if self.unreachable {
            return Err(StoreError::Connection("in-memory store offline".into()));
        }
        self.objects
            .lock()
            .unwrap()
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            })
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
