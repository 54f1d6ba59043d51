//! In-memory storage module
//!
//! Holds the dry measure records in insertion order.
//! This module is independent of HTTP handling (loose coupling).

mod measure;
mod memory;

pub use measure::DryMeasure;
pub use memory::{MeasureStore, SharedStore, StoreStats};
