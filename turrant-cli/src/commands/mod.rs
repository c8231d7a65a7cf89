//! Command implementations for the turrant CLI

pub mod serve;

pub use serve::run_serve;
