//! Stop catalog types.

use serde::{Deserialize, Serialize};

/// A named boarding point with fixed coordinates.
///
/// The identifier doubles as the human-readable name and is the value route
/// stop sequences reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    /// Unique, human-readable identifier (e.g. "Central Station")
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Stop {
    pub fn new(id: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: id.into(),
            latitude,
            longitude,
        }
    }
}
