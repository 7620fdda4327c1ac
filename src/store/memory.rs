//! In-memory local store implementation.
//!
//! This module provides a local implementation of all store traits suitable
//! for unit testing and local development. All data is stored in memory using
//! HashMap structures, providing fast, deterministic, and isolated execution.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::models::{Passenger, Route, Shift, Stop, Vehicle};
use crate::store::error::{StoreError, StoreResult};
use crate::store::traits::{FleetStore, HealthCheck, RouteStore, ShiftStore, StopStore};

/// In-memory local store.
///
/// Cloning is cheap and clones share the same underlying data, so a
/// `LocalStore` can be handed to services and test assertions alike.
#[derive(Clone)]
pub struct LocalStore {
    data: Arc<RwLock<LocalData>>,
}

#[derive(Default)]
struct LocalData {
    stops: HashMap<String, Stop>,
    routes: HashMap<String, Route>,
    shifts: HashMap<String, Shift>,
    vehicles: HashMap<String, Vehicle>,
    passengers: HashMap<String, Passenger>,

    // Connection health
    is_healthy: bool,
}

impl LocalStore {
    /// Create a new empty local store.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData {
                is_healthy: true,
                ..Default::default()
            })),
        }
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        let mut data = self.data.write();
        data.is_healthy = healthy;
    }

    /// Clear all data from the store, preserving the health flag.
    pub fn clear(&self) {
        let mut data = self.data.write();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    /// Number of routes currently stored.
    pub fn route_count(&self) -> usize {
        self.data.read().routes.len()
    }

    /// Number of shifts currently stored.
    pub fn shift_count(&self) -> usize {
        self.data.read().shifts.len()
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self) -> StoreResult<()> {
        let data = self.data.read();
        if !data.is_healthy {
            return Err(StoreError::connection("Store is not healthy"));
        }
        Ok(())
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HealthCheck for LocalStore {
    async fn health_check(&self) -> StoreResult<bool> {
        let data = self.data.read();
        Ok(data.is_healthy)
    }
}

// ==================== Stop Store ====================

#[async_trait]
impl StopStore for LocalStore {
    async fn put_stop(&self, stop: &Stop) -> StoreResult<()> {
        self.check_health()?;
        let mut data = self.data.write();
        data.stops.insert(stop.id.clone(), stop.clone());
        Ok(())
    }

    async fn get_stop(&self, id: &str) -> StoreResult<Stop> {
        let data = self.data.read();
        data.stops
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(format!("Stop {} not found", id)))
    }

    async fn delete_stop(&self, id: &str) -> StoreResult<()> {
        self.check_health()?;
        let mut data = self.data.write();
        data.stops.remove(id);
        Ok(())
    }

    async fn list_stops(&self) -> StoreResult<Vec<Stop>> {
        let data = self.data.read();
        let mut stops: Vec<Stop> = data.stops.values().cloned().collect();
        stops.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(stops)
    }

    async fn stop_exists(&self, id: &str) -> StoreResult<bool> {
        let data = self.data.read();
        Ok(data.stops.contains_key(id))
    }
}

// ==================== Route Store ====================

#[async_trait]
impl RouteStore for LocalStore {
    async fn put_route(&self, route: &Route) -> StoreResult<()> {
        self.check_health()?;
        let mut data = self.data.write();
        data.routes.insert(route.id.clone(), route.clone());
        Ok(())
    }

    async fn get_route(&self, id: &str) -> StoreResult<Route> {
        let data = self.data.read();
        data.routes
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(format!("Route {} not found", id)))
    }

    async fn delete_route(&self, id: &str) -> StoreResult<()> {
        self.check_health()?;
        let mut data = self.data.write();
        data.routes.remove(id);
        Ok(())
    }

    async fn list_routes(&self) -> StoreResult<Vec<Route>> {
        let data = self.data.read();
        let mut routes: Vec<Route> = data.routes.values().cloned().collect();
        routes.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(routes)
    }

    async fn route_exists(&self, id: &str) -> StoreResult<bool> {
        let data = self.data.read();
        Ok(data.routes.contains_key(id))
    }

    async fn routes_containing_stop(&self, stop_id: &str) -> StoreResult<Vec<Route>> {
        let data = self.data.read();
        let mut routes: Vec<Route> = data
            .routes
            .values()
            .filter(|r| r.stops.iter().any(|s| s == stop_id))
            .cloned()
            .collect();
        routes.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(routes)
    }
}

// ==================== Shift Store ====================

#[async_trait]
impl ShiftStore for LocalStore {
    async fn put_shift(&self, shift: &Shift) -> StoreResult<()> {
        self.check_health()?;
        let mut data = self.data.write();
        data.shifts.insert(shift.id.clone(), shift.clone());
        Ok(())
    }

    async fn get_shift(&self, id: &str) -> StoreResult<Shift> {
        let data = self.data.read();
        data.shifts
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(format!("Shift {} not found", id)))
    }

    async fn delete_shift(&self, id: &str) -> StoreResult<()> {
        self.check_health()?;
        let mut data = self.data.write();
        data.shifts.remove(id);
        Ok(())
    }

    async fn list_shifts(&self) -> StoreResult<Vec<Shift>> {
        let data = self.data.read();
        let mut shifts: Vec<Shift> = data.shifts.values().cloned().collect();
        shifts.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(shifts)
    }

    async fn shifts_for_route(&self, base_route_id: &str) -> StoreResult<Vec<Shift>> {
        let data = self.data.read();
        let mut shifts: Vec<Shift> = data
            .shifts
            .values()
            .filter(|s| s.route == base_route_id)
            .cloned()
            .collect();
        shifts.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(shifts)
    }
}

// ==================== Fleet Store ====================

#[async_trait]
impl FleetStore for LocalStore {
    async fn put_vehicle(&self, vehicle: &Vehicle) -> StoreResult<()> {
        self.check_health()?;
        let mut data = self.data.write();
        data.vehicles.insert(vehicle.id.clone(), vehicle.clone());
        Ok(())
    }

    async fn get_vehicle(&self, id: &str) -> StoreResult<Vehicle> {
        let data = self.data.read();
        data.vehicles
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(format!("Vehicle {} not found", id)))
    }

    async fn delete_vehicle(&self, id: &str) -> StoreResult<()> {
        self.check_health()?;
        let mut data = self.data.write();
        data.vehicles.remove(id);
        Ok(())
    }

    async fn list_vehicles(&self) -> StoreResult<Vec<Vehicle>> {
        let data = self.data.read();
        let mut vehicles: Vec<Vehicle> = data.vehicles.values().cloned().collect();
        vehicles.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(vehicles)
    }

    async fn set_vehicle_position(
        &self,
        id: &str,
        latitude: f64,
        longitude: f64,
    ) -> StoreResult<()> {
        self.check_health()?;
        let mut data = self.data.write();
        let vehicle = data
            .vehicles
            .entry(id.to_string())
            .or_insert_with(|| Vehicle::new(id));
        vehicle.latitude = latitude;
        vehicle.longitude = longitude;
        Ok(())
    }

    async fn set_vehicle_capacity(&self, id: &str, at_capacity: bool) -> StoreResult<()> {
        self.check_health()?;
        let mut data = self.data.write();
        let vehicle = data
            .vehicles
            .entry(id.to_string())
            .or_insert_with(|| Vehicle::new(id));
        vehicle.at_capacity = at_capacity;
        Ok(())
    }

    async fn set_vehicle_alarm(&self, id: &str, alarm: bool) -> StoreResult<()> {
        self.check_health()?;
        let mut data = self.data.write();
        let vehicle = data
            .vehicles
            .entry(id.to_string())
            .or_insert_with(|| Vehicle::new(id));
        vehicle.alarm = alarm;
        Ok(())
    }

    async fn get_passenger(&self, id: &str) -> StoreResult<Passenger> {
        let data = self.data.read();
        data.passengers
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(format!("Passenger {} not found", id)))
    }

    async fn set_passenger_position(
        &self,
        id: &str,
        latitude: f64,
        longitude: f64,
    ) -> StoreResult<()> {
        self.check_health()?;
        let mut data = self.data.write();
        let passenger = data
            .passengers
            .entry(id.to_string())
            .or_insert_with(|| Passenger::new(id));
        passenger.latitude = latitude;
        passenger.longitude = longitude;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftLeg;

    #[tokio::test]
    async fn test_health_check() {
        let store = LocalStore::new();
        assert!(store.health_check().await.unwrap());

        store.set_healthy(false);
        assert!(!store.health_check().await.unwrap());
    }

    #[tokio::test]
    async fn test_put_and_get_route() {
        let store = LocalStore::new();
        let route = Route::new("10", "A - C", vec!["A".into(), "B".into(), "C".into()]);

        store.put_route(&route).await.unwrap();
        let fetched = store.get_route("10").await.unwrap();
        assert_eq!(fetched, route);
    }

    #[tokio::test]
    async fn test_not_found_error() {
        let store = LocalStore::new();
        let result = store.get_route("missing").await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_routes_containing_stop() {
        let store = LocalStore::new();
        store
            .put_route(&Route::new("10", "A - C", vec!["A".into(), "B".into(), "C".into()]))
            .await
            .unwrap();
        store
            .put_route(&Route::new("20", "B - D", vec!["B".into(), "D".into()]))
            .await
            .unwrap();

        let hits = store.routes_containing_stop("B").await.unwrap();
        assert_eq!(hits.len(), 2);

        let hits = store.routes_containing_stop("D").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "20");
    }

    #[tokio::test]
    async fn test_shifts_for_route_matches_equality_only() {
        let store = LocalStore::new();
        let shift = Shift {
            id: "s1".into(),
            route: "10".into(),
            vehicle: "AB-123".into(),
            normal: Some(ShiftLeg::new("08:00", "09:00", "2024-01-02")),
            reverse: None,
        };
        store.put_shift(&shift).await.unwrap();

        assert_eq!(store.shifts_for_route("10").await.unwrap().len(), 1);
        assert!(store.shifts_for_route("10R").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_partial_updates_upsert_and_isolate() {
        let store = LocalStore::new();

        // Upsert path: no prior put_vehicle
        store
            .set_vehicle_position("AB-123", 41.4, 2.2)
            .await
            .unwrap();
        store.set_vehicle_capacity("AB-123", true).await.unwrap();

        let vehicle = store.get_vehicle("AB-123").await.unwrap();
        assert_eq!(vehicle.latitude, 41.4);
        assert_eq!(vehicle.longitude, 2.2);
        assert!(vehicle.at_capacity);
        assert!(!vehicle.alarm);
    }

    #[tokio::test]
    async fn test_unhealthy_store_rejects_writes() {
        let store = LocalStore::new();
        store.set_healthy(false);

        let result = store.put_stop(&Stop::new("A", 0.0, 0.0)).await;
        assert!(matches!(result, Err(StoreError::Connection { .. })));
    }

    #[tokio::test]
    async fn test_clear_preserves_health_flag() {
        let store = LocalStore::new();
        store
            .put_route(&Route::new("10", "A - B", vec!["A".into(), "B".into()]))
            .await
            .unwrap();
        store.set_healthy(false);
        store.clear();

        assert_eq!(store.route_count(), 0);
        assert!(!store.health_check().await.unwrap());
    }
}
