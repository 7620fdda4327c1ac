//! Shift types: a vehicle's scheduled service on a base route.

use serde::{Deserialize, Serialize};

use super::route::RouteDirection;

/// One directional schedule within a shift.
///
/// Fields stay as strings in storage; the eligibility filter parses them on
/// demand so malformed values demote a leg to "not eligible" instead of
/// failing the query (see [`crate::models::clock`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftLeg {
    /// Departure time-of-day ("08:00")
    pub start_time: String,
    /// Arrival time-of-day ("09:30")
    pub end_time: String,
    /// Calendar day of service ("2024-01-02")
    pub service_date: String,
}

impl ShiftLeg {
    pub fn new(
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        service_date: impl Into<String>,
    ) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: end_time.into(),
            service_date: service_date.into(),
        }
    }
}

/// A vehicle assignment against one base route, carrying up to two
/// directional legs. Either leg may be cleared independently without
/// deleting the shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier; auto-assigned on creation when empty
    #[serde(default)]
    pub id: String,
    /// Base route identifier (never direction-suffixed)
    pub route: String,
    /// Assigned vehicle identifier (plate)
    pub vehicle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal: Option<ShiftLeg>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse: Option<ShiftLeg>,
}

impl Shift {
    /// The leg serving the given travel direction.
    pub fn leg(&self, direction: RouteDirection) -> Option<&ShiftLeg> {
        match direction {
            RouteDirection::Forward => self.normal.as_ref(),
            RouteDirection::Reverse => self.reverse.as_ref(),
        }
    }

    /// Clear the leg serving the given travel direction.
    pub fn clear_leg(&mut self, direction: RouteDirection) {
        match direction {
            RouteDirection::Forward => self.normal = None,
            RouteDirection::Reverse => self.reverse = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leg_selection_by_direction() {
        let shift = Shift {
            id: "s1".into(),
            route: "10".into(),
            vehicle: "AB-123".into(),
            normal: Some(ShiftLeg::new("08:00", "09:00", "2024-01-02")),
            reverse: None,
        };

        assert!(shift.leg(RouteDirection::Forward).is_some());
        assert!(shift.leg(RouteDirection::Reverse).is_none());
    }

    #[test]
    fn test_clear_leg_leaves_sibling_untouched() {
        let mut shift = Shift {
            id: "s1".into(),
            route: "10".into(),
            vehicle: "AB-123".into(),
            normal: Some(ShiftLeg::new("08:00", "09:00", "2024-01-02")),
            reverse: Some(ShiftLeg::new("18:00", "19:00", "2024-01-02")),
        };

        shift.clear_leg(RouteDirection::Forward);
        assert!(shift.normal.is_none());
        assert!(shift.reverse.is_some());
    }
}
