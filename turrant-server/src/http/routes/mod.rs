//! Route handlers organized by resource

pub mod health;
pub mod posts;
pub mod categories;
pub mod admin;
pub mod pages;

use axum::Json;
use serde::Serialize;

/// Public read envelope: `{ "data": ..., "error": null }`
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub data: T,
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Json<Self> {
        Json(Self { data, error: None })
    }
}

/// Admin success body: `{ "data": ... }`
#[derive(Debug, Serialize)]
pub struct Data<T> {
    pub data: T,
}

impl<T> Data<T> {
    pub fn json(data: T) -> Json<Self> {
        Json(Self { data })
    }
}
