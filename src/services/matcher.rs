//! Shift matching: temporal eligibility of directional legs.
//!
//! Given a direction-suffixed route token and a query instant, select the
//! shift legs still worth offering: service date inside the rolling window,
//! end of service strictly after the query instant.

use chrono::{NaiveDate, NaiveTime};

use crate::api::ShiftMatch;
use crate::models::clock;
use crate::models::{RouteToken, Shift, ShiftLeg};
use crate::store::{FullStore, ShiftStore};

use super::error::{ServiceError, ServiceResult};

/// Find all eligible shift legs for a route token at a query instant.
///
/// The token's direction picks which leg of each shift is considered; shifts
/// lacking that leg are skipped entirely, so a match never leaks the other
/// direction's schedule. Results are sorted by shift id.
pub async fn match_shifts(
    store: &dyn FullStore,
    route_token: &str,
    query_date: NaiveDate,
    query_time: NaiveTime,
) -> ServiceResult<Vec<ShiftMatch>> {
    if route_token.trim().is_empty() {
        return Err(ServiceError::Validation(
            "route token must not be empty".to_string(),
        ));
    }

    let token = RouteToken::parse(route_token);
    let shifts = store.shifts_for_route(&token.base_id).await?;

    let mut matches: Vec<ShiftMatch> = shifts
        .iter()
        .filter_map(|shift| project_shift(shift, &token, query_date, query_time))
        .collect();
    matches.sort_by(|a, b| a.shift_id.cmp(&b.shift_id));

    Ok(matches)
}

fn project_shift(
    shift: &Shift,
    token: &RouteToken,
    query_date: NaiveDate,
    query_time: NaiveTime,
) -> Option<ShiftMatch> {
    let leg = shift.leg(token.direction)?;
    if !leg_is_eligible(leg, query_date, query_time) {
        return None;
    }

    Some(ShiftMatch {
        shift_id: shift.id.clone(),
        route: shift.route.clone(),
        vehicle: shift.vehicle.clone(),
        direction: token.direction,
        start_time: leg.start_time.clone(),
        end_time: leg.end_time.clone(),
        service_date: leg.service_date.clone(),
    })
}

/// Whether a leg should be offered for the given query instant.
///
/// Two conditions, both on parsed values: the service date falls within the
/// inclusive window `[query_date, query_date + 2 days]`, and the leg's end
/// instant lies strictly after the query instant. A leg whose date or end
/// time fails to parse is simply not eligible.
pub fn leg_is_eligible(leg: &ShiftLeg, query_date: NaiveDate, query_time: NaiveTime) -> bool {
    let Some(service_date) = clock::parse_service_date(&leg.service_date) else {
        return false;
    };
    if !clock::within_service_window(service_date, query_date) {
        return false;
    }

    let Some(end_time) = clock::parse_time_of_day(&leg.end_time) else {
        return false;
    };

    clock::instant(service_date, end_time) > clock::instant(query_date, query_time)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leg(end_time: &str, service_date: &str) -> ShiftLeg {
        ShiftLeg::new("08:00", end_time, service_date)
    }

    fn query() -> (NaiveDate, NaiveTime) {
        (
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_future_day_within_window_is_eligible() {
        let (d, t) = query();
        assert!(leg_is_eligible(&leg("09:00", "2024-01-02"), d, t));
    }

    #[test]
    fn test_beyond_window_is_not_eligible() {
        let (d, t) = query();
        assert!(!leg_is_eligible(&leg("09:00", "2024-01-04"), d, t));
    }

    #[test]
    fn test_same_day_ended_service_is_not_eligible() {
        let (d, _) = query();
        let t = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
        assert!(!leg_is_eligible(&leg("09:00", "2024-01-01"), d, t));
    }

    #[test]
    fn test_end_equal_to_query_instant_is_not_eligible() {
        let (d, _) = query();
        let t = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        assert!(!leg_is_eligible(&leg("09:00", "2024-01-01"), d, t));
    }

    #[test]
    fn test_unparsable_values_are_absorbed() {
        let (d, t) = query();
        assert!(!leg_is_eligible(&leg("09:00", "whenever"), d, t));
        assert!(!leg_is_eligible(&leg("late", "2024-01-02"), d, t));
    }
}
