//! drymeasures - An in-memory JSON API for cooking dry measures
//!
//! Each module has a single responsibility:
//! - `store` keeps the records and knows nothing about HTTP
//! - `web` maps HTTP requests onto store operations
//! - `config` and `error` are shared plumbing

pub mod config;
pub mod error;
pub mod store;
pub mod web;

/// Re-export commonly used types
pub use config::WebConfig;
pub use error::{ApiError, ConfigError};
pub use store::{DryMeasure, MeasureStore, SharedStore};
