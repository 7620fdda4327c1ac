//! Data Transfer Objects for the HTTP API.
//!
//! Domain models already derive Serialize/Deserialize and double as request
//! bodies; this module adds the list wrappers, query-parameter structs, and
//! report payloads.

use serde::{Deserialize, Serialize};

// Re-export projection types that are already serializable
pub use crate::api::{RouteMatch, ShiftMatch};
pub use crate::models::{Passenger, Route, Shift, ShiftLeg, Stop, Vehicle};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Store connection status
    pub store: String,
}

/// Stop list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopListResponse {
    pub stops: Vec<Stop>,
    pub total: usize,
}

/// Route list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteListResponse {
    pub routes: Vec<Route>,
    pub total: usize,
}

/// Shift list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftListResponse {
    pub shifts: Vec<Shift>,
    pub total: usize,
}

/// Vehicle list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleListResponse {
    pub vehicles: Vec<Vehicle>,
    pub total: usize,
}

/// Query parameters for the shift search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftSearchQuery {
    /// Route token, possibly direction-suffixed ("10" / "10R")
    pub route: String,
    /// Query date ("2024-01-01")
    pub date: String,
    /// Query time-of-day ("07:00")
    pub time: String,
}

/// Shift search response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftSearchResponse {
    pub matches: Vec<ShiftMatch>,
    pub total: usize,
}

/// Query parameters for the route search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteSearchQuery {
    /// Boarding stop id
    pub from: String,
    /// Alighting stop id
    pub to: String,
    pub date: String,
    pub time: String,
    /// Keep candidate routes that have no eligible shifts (default: false)
    #[serde(default)]
    pub include_empty: Option<bool>,
}

/// Route search response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteSearchResponse {
    pub results: Vec<RouteMatch>,
    pub total: usize,
}

/// Body for position report endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionReport {
    pub latitude: f64,
    pub longitude: f64,
}

/// Body for the capacity report endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapacityReport {
    pub at_capacity: bool,
}

/// Body for the alarm report endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlarmReport {
    pub alarm: bool,
}
