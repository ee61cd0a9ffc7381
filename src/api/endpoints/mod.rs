//! HTTP endpoint handlers.
//!
//! Pipeline work is blocking and runs on tokio's blocking pool.

pub mod guidance;
pub mod guides;
pub mod health;
pub mod situations;
pub mod triage;
