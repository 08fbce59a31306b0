//! HTTP API layer for campus.
//!
//! This crate provides the REST API surface:
//!
//! - **Endpoints**: Announcement CRUD routes
//! - **Extractors**: Caller authentication
//! - **State**: Shared service handles
//!
//! Built on Axum 0.8 with Tower middleware stack.

pub mod endpoints;
pub mod extractors;
pub mod state;

pub use endpoints::router;
pub use state::AppState;
