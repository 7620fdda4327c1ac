//! Route search: stop pair to enriched candidate routes.

use chrono::{NaiveDate, NaiveTime};

use crate::api::RouteMatch;
use crate::store::{FullStore, RouteStore};

use super::error::{ServiceError, ServiceResult};
use super::matcher::match_shifts;
use super::route_catalog::audit_companion;

/// What to do with candidate routes that have no eligible shift legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyRoutePolicy {
    /// Return the route with an empty shift list (full route metadata for
    /// callers that need it).
    Keep,
    /// Omit the route from the result.
    #[default]
    Drop,
}

/// Find routes serving a stop pair and enrich each with its eligible shifts.
///
/// A route qualifies when its stop sequence contains both stops in any
/// positions; order along the sequence is deliberately not checked. Each
/// qualifying route is matched under its own identifier, so a derived
/// reverse route is enriched with reverse legs automatically. No qualifying
/// route at all is an empty result, not an error.
pub async fn search_routes(
    store: &dyn FullStore,
    start_stop: &str,
    end_stop: &str,
    query_date: NaiveDate,
    query_time: NaiveTime,
    policy: EmptyRoutePolicy,
) -> ServiceResult<Vec<RouteMatch>> {
    if start_stop.trim().is_empty() || end_stop.trim().is_empty() {
        return Err(ServiceError::Validation(
            "start and end stops must not be empty".to_string(),
        ));
    }

    let candidates = store.routes_containing_stop(start_stop).await?;

    let mut results = Vec::new();
    for route in candidates {
        if !route.stops.iter().any(|s| s == end_stop) {
            continue;
        }

        audit_companion(store, &route).await;

        let shifts = match_shifts(store, &route.id, query_date, query_time).await?;
        if shifts.is_empty() && policy == EmptyRoutePolicy::Drop {
            continue;
        }

        results.push(RouteMatch { route, shifts });
    }

    Ok(results)
}
