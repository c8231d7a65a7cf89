//! HTTP server layer
//!
//! Axum server with:
//! - Public blog API (`/api/posts`, `/api/categories`)
//! - Admin blog API (`/api/admin/posts`)
//! - Static pages, legacy `.html` redirects, asset mounts
//! - JSON error envelopes

pub mod server;
pub mod error;
pub mod extractors;
pub mod routes;

pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use error::ApiError;
