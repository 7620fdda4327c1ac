//! Shift roster operations: CRUD and independent leg removal.

use uuid::Uuid;

use crate::models::{RouteDirection, RouteToken, Shift};
use crate::store::{FullStore, RouteStore, ShiftStore};

use super::error::{ServiceError, ServiceResult};

/// Store a new shift.
///
/// The base-route reference must be non-empty and resolve (after stripping
/// any direction marker) to an existing route; the vehicle reference must be
/// non-empty. An empty id gets a generated one. Returns the stored document.
pub async fn add_shift(store: &dyn FullStore, shift: &Shift) -> ServiceResult<Shift> {
    let base_route = validate_shift(store, shift).await?;

    let mut doc = shift.clone();
    doc.route = base_route;
    if doc.id.trim().is_empty() {
        doc.id = Uuid::new_v4().to_string();
    }

    store.put_shift(&doc).await?;
    Ok(doc)
}

/// Overwrite a shift document in full, under the given id.
pub async fn update_shift(store: &dyn FullStore, id: &str, shift: &Shift) -> ServiceResult<Shift> {
    if id.trim().is_empty() {
        return Err(ServiceError::Validation(
            "shift id must not be empty".to_string(),
        ));
    }

    let base_route = validate_shift(store, shift).await?;

    let mut doc = shift.clone();
    doc.id = id.to_string();
    doc.route = base_route;

    store.put_shift(&doc).await?;
    Ok(doc)
}

/// Clear a shift's normal leg, leaving the rest of the document unchanged.
pub async fn remove_normal_leg(store: &dyn FullStore, id: &str) -> ServiceResult<Shift> {
    remove_leg(store, id, RouteDirection::Forward).await
}

/// Clear a shift's reverse leg, leaving the rest of the document unchanged.
pub async fn remove_reverse_leg(store: &dyn FullStore, id: &str) -> ServiceResult<Shift> {
    remove_leg(store, id, RouteDirection::Reverse).await
}

async fn remove_leg(
    store: &dyn FullStore,
    id: &str,
    direction: RouteDirection,
) -> ServiceResult<Shift> {
    let mut shift = store.get_shift(id).await?;
    shift.clear_leg(direction);
    store.put_shift(&shift).await?;
    Ok(shift)
}

/// Fetch a shift by id.
pub async fn get_shift(store: &dyn FullStore, id: &str) -> ServiceResult<Shift> {
    Ok(store.get_shift(id).await?)
}

/// List all shifts.
pub async fn list_shifts(store: &dyn FullStore) -> ServiceResult<Vec<Shift>> {
    Ok(store.list_shifts().await?)
}

/// Delete a shift document.
pub async fn delete_shift(store: &dyn FullStore, id: &str) -> ServiceResult<()> {
    store.delete_shift(id).await?;
    Ok(())
}

/// Validate references and resolve the base route id a shift is stored under.
async fn validate_shift(store: &dyn FullStore, shift: &Shift) -> ServiceResult<String> {
    if shift.route.trim().is_empty() {
        return Err(ServiceError::Validation(
            "shift route reference must not be empty".to_string(),
        ));
    }

    let token = RouteToken::parse(&shift.route);
    if !store.route_exists(&token.base_id).await? {
        return Err(ServiceError::UnknownRoute(token.base_id));
    }

    if shift.vehicle.trim().is_empty() {
        return Err(ServiceError::MissingVehicle);
    }

    Ok(token.base_id)
}
