//! Shared projection types returned by the query services.

use serde::{Deserialize, Serialize};

use crate::models::{Route, RouteDirection};

/// An eligible shift leg projected for one resolved direction.
///
/// Carries only the fields of the leg that matched; the other direction's
/// leg is structurally absent, so "no reverse service exists" and "reverse
/// service exists but is not eligible" both simply produce no reverse match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftMatch {
    pub shift_id: String,
    /// Base route identifier (never direction-suffixed)
    pub route: String,
    pub vehicle: String,
    pub direction: RouteDirection,
    pub start_time: String,
    pub end_time: String,
    pub service_date: String,
}

/// A candidate route paired with its eligible shift legs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteMatch {
    pub route: Route,
    pub shifts: Vec<ShiftMatch>,
}
