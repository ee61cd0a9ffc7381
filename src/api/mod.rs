//! HTTP surface over the triage pipeline.
//!
//! `api_router()` returns a composable `Router`; `server` binds it.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::{serve, serve_on};
pub use types::ApiContext;
