//! Repository implementations for blog data access
//!
//! Each repository follows these patterns:
//! - Resolves the store client per call, so missing credentials fail before any request
//! - One remote call per operation (no read-modify-write)
//! - Zero matching rows is `None`/empty, never an error

pub mod posts;
pub mod categories;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::client::ConfigError;
use crate::store::{Row, StoreError};

pub use posts::PostRepo;
pub use categories::CategoryRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Credentials missing or placeholders; retrying will not help
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("unexpected {resource} row: {source}")]
    Decode {
        resource: &'static str,
        source: serde_json::Error,
    },

    #[error("store returned no {resource} row after insert")]
    NothingReturned { resource: &'static str },
}

impl DbError {
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

fn decode<T: DeserializeOwned>(resource: &'static str, row: Row) -> Result<T, DbError> {
    serde_json::from_value(Value::Object(row)).map_err(|source| DbError::Decode { resource, source })
}

fn decode_all<T: DeserializeOwned>(resource: &'static str, rows: Vec<Row>) -> Result<Vec<T>, DbError> {
    rows.into_iter().map(|row| decode(resource, row)).collect()
}
