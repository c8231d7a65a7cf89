//! Remote table store access
//!
//! `TableClient` is the seam between the repositories and whatever holds the
//! rows. Rows travel as JSON objects; repositories decode them into models.
//!
//! - [`PostgrestClient`]: Supabase REST (`{url}/rest/v1/{table}`)
//! - [`MemoryClient`]: in-process tables with the same filter/order rules

pub mod memory;
pub mod postgrest;
pub mod query;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{Map, Value};

pub use memory::MemoryClient;
pub use postgrest::PostgrestClient;
pub use query::{Direction, Filter, Order, Query};

/// One table row as returned by the store
pub type Row = Map<String, Value>;

/// Failure of a single remote call
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("store returned {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("invalid table url: {0}")]
    Url(#[from] url::ParseError),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("expected at most one row from {table}, got {count}")]
    MultipleRows { table: String, count: usize },
}

/// Table-oriented store operations
#[async_trait]
pub trait TableClient: Send + Sync + 'static {
    /// Rows matching every filter, ordered and limited as requested.
    async fn select(&self, table: &str, query: &Query) -> Result<Vec<Row>, StoreError>;

    /// Insert one row, returning it as stored.
    async fn insert(&self, table: &str, row: Row) -> Result<Vec<Row>, StoreError>;

    /// Apply `patch` to every row matching `filters`, returning the updated rows.
    async fn update(&self, table: &str, filters: &[Filter], patch: Row)
        -> Result<Vec<Row>, StoreError>;

    /// Remove every row matching `filters`. Matching nothing is not an error.
    async fn delete(&self, table: &str, filters: &[Filter]) -> Result<(), StoreError>;
}
