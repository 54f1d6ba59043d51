//! Dry measure record

use serde::{Deserialize, Serialize};

/// A single dry measure record
///
/// The unit fields are independent of each other: nothing checks that
/// `cups` and `grams` describe the same quantity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DryMeasure {
    /// Externally assigned identifier (not checked for uniqueness)
    pub id: String,

    pub cups: i64,
    pub tablespoons: i64,
    pub teaspoons: i64,
    pub grams: i64,
}

impl DryMeasure {
    /// Create a new record
    pub fn new(
        id: impl Into<String>,
        cups: i64,
        tablespoons: i64,
        teaspoons: i64,
        grams: i64,
    ) -> Self {
        DryMeasure {
            id: id.into(),
            cups,
            tablespoons,
            teaspoons,
            grams,
        }
    }

    /// Decode a record from a raw JSON payload
    pub fn from_json(payload: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(payload)
    }

    /// Calculate approximate memory usage of this record in bytes
    pub fn memory_usage(&self) -> usize {
        std::mem::size_of::<Self>() + self.id.capacity()
    }
}
