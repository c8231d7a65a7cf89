//! Data-access layer - cached store handle and repositories
//!
//! # Design Principles
//!
//! - One store client per process, built lazily, never rebuilt
//! - Configuration failures stay distinguishable from store failures
//! - Only supplied fields are written; the store owns ids and timestamps

pub mod client;
pub mod repos;

pub use client::{ConfigError, Database};
pub use repos::*;
