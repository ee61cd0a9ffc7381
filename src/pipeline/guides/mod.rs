//! Reference guides: the registry of available documents, the stores it
//! is loaded from, and the hazard → guide resolution table.

pub mod registry;
pub mod resolver;
pub mod store;

pub use registry::{parse_guides_map, GuideRegistry, RegistryError, RegistrySource};
pub use resolver::{guide_candidates, resolve_guides, HAZARD_GUIDE_TABLE};
pub use store::{DocumentStore, HttpObjectStore, LocalStore, StoreError};
