//! Live fleet state: vehicles and passenger positions.
//!
//! These records are denormalized copies owned by the fleet store; position
//! and flag fields are mutated in isolation by periodic reports and never
//! routed through the route/shift documents.

use serde::{Deserialize, Serialize};

/// A tracked fleet member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Unique identifier, conventionally the plate
    pub id: String,
    /// Assigned route identifier
    #[serde(default)]
    pub route: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    /// Vehicle reports itself full
    #[serde(default)]
    pub at_capacity: bool,
    /// Driver-raised SOS flag
    #[serde(default)]
    pub alarm: bool,
}

impl Vehicle {
    /// A fresh record at the origin default, before any position report.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            route: String::new(),
            latitude: 0.0,
            longitude: 0.0,
            at_capacity: false,
            alarm: false,
        }
    }

    /// Whether the stored coordinates are still the origin default.
    pub fn at_origin(&self) -> bool {
        self.latitude == 0.0 && self.longitude == 0.0
    }
}

/// A passenger's self-reported position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passenger {
    pub id: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

impl Passenger {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            latitude: 0.0,
            longitude: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_vehicle_starts_at_origin() {
        let v = Vehicle::new("AB-123");
        assert!(v.at_origin());
        assert!(!v.at_capacity);
        assert!(!v.alarm);
    }

    #[test]
    fn test_origin_check_requires_both_axes() {
        let mut v = Vehicle::new("AB-123");
        v.latitude = 41.38;
        assert!(!v.at_origin());
    }
}
