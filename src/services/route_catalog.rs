//! Route catalog operations: CRUD plus reverse-companion derivation.
//!
//! The companion write is an explicit two-phase operation: first the forward
//! document, then the derived reverse document. The two writes are not
//! atomic; a crash in between leaves a pair that read paths detect and log
//! rather than silently diverge further (see [`audit_companion`]).

use log::warn;

use crate::models::{Route, RouteDirection, RouteToken};
use crate::store::{FullStore, RouteStore, StopStore};

use super::error::{ServiceError, ServiceResult};

/// Store a new route and, when meaningful, its derived reverse companion.
///
/// Every referenced stop must exist in the catalog. The companion is written
/// only when no route already occupies the derived identifier: creation is
/// non-destructive toward an independently created route under that id.
pub async fn add_route(store: &dyn FullStore, route: &Route) -> ServiceResult<()> {
    validate_route(store, route).await?;

    store.put_route(route).await?;

    if let Some(companion) = route.derive_reverse() {
        if !store.route_exists(&companion.id).await? {
            store.put_route(&companion).await?;
        }
    }

    Ok(())
}

/// Overwrite a route and unconditionally re-derive its reverse companion.
///
/// Unlike [`add_route`], an update is authoritative: whatever document sits
/// under the derived identifier is replaced. This asymmetry is deliberate
/// and load-bearing.
pub async fn update_route(store: &dyn FullStore, id: &str, route: &Route) -> ServiceResult<()> {
    if id.trim().is_empty() {
        return Err(ServiceError::Validation(
            "route id must not be empty".to_string(),
        ));
    }

    let mut doc = route.clone();
    doc.id = id.to_string();
    store.put_route(&doc).await?;

    if let Some(companion) = doc.derive_reverse() {
        store.put_route(&companion).await?;
    }

    Ok(())
}

/// Delete exactly the named route document.
///
/// Never cascades: deleting a forward route leaves its derived companion in
/// place, and vice versa.
pub async fn delete_route(store: &dyn FullStore, id: &str) -> ServiceResult<()> {
    store.delete_route(id).await?;
    Ok(())
}

/// Fetch a route, auditing its companion pairing on the way out.
pub async fn get_route(store: &dyn FullStore, id: &str) -> ServiceResult<Route> {
    let route = store.get_route(id).await?;
    audit_companion(store, &route).await;
    Ok(route)
}

/// List every route, forward and derived alike.
pub async fn list_routes(store: &dyn FullStore) -> ServiceResult<Vec<Route>> {
    Ok(store.list_routes().await?)
}

/// Check a route's companion pairing and log drift.
///
/// For a forward route this compares against the document under the derived
/// id; for a reverse route, against its source. A missing counterpart is
/// fine (it may never have been derivable, or was deleted independently); a
/// counterpart whose stops are not the exact reverse is logged as a warning.
/// The pair is never repaired here.
pub async fn audit_companion(store: &dyn FullStore, route: &Route) {
    let token = RouteToken::parse(&route.id);
    let counterpart_id = match token.direction {
        RouteDirection::Forward => format!("{}{}", route.id, crate::models::REVERSE_MARKER),
        RouteDirection::Reverse => token.base_id.clone(),
    };

    let counterpart = match store.get_route(&counterpart_id).await {
        Ok(r) => r,
        Err(_) => return,
    };

    let mut reversed: Vec<String> = route.stops.clone();
    reversed.reverse();
    if counterpart.stops != reversed {
        warn!(
            "route {} and companion {} have diverged stop sequences",
            route.id, counterpart_id
        );
    }
}

async fn validate_route(store: &dyn FullStore, route: &Route) -> ServiceResult<()> {
    if route.id.trim().is_empty() {
        return Err(ServiceError::Validation(
            "route id must not be empty".to_string(),
        ));
    }

    for stop in &route.stops {
        if !store.stop_exists(stop).await? {
            return Err(ServiceError::UnknownStop(stop.clone()));
        }
    }

    Ok(())
}
