//! turrant-server: marketing-site backend
//!
//! Serves the static industry pages and a thin blog API over a Supabase
//! table store, plus the admin endpoints that manage posts.

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod store;

pub use config::{SiteConfig, StoreCredentials};
pub use db::{ConfigError, Database, DbError};
pub use http::{build_router, run_server, ServerConfig, ServerError};
