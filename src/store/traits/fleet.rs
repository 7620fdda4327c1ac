//! Fleet state store trait.

use async_trait::async_trait;

use crate::models::{Passenger, Vehicle};
use crate::store::error::StoreResult;

/// Store trait for live vehicle and passenger state.
///
/// The `set_*` operations are field-isolated partial updates with merge
/// semantics: they create the record with defaults when absent and must
/// leave every sibling field untouched.
#[async_trait]
pub trait FleetStore: Send + Sync {
    // ==================== Vehicles ====================

    /// Store or replace a vehicle document under its id.
    async fn put_vehicle(&self, vehicle: &Vehicle) -> StoreResult<()>;

    /// Retrieve a vehicle by id.
    ///
    /// # Returns
    /// * `Ok(Vehicle)` - the vehicle document
    /// * `Err(StoreError::NotFound)` - if no vehicle has that id
    async fn get_vehicle(&self, id: &str) -> StoreResult<Vehicle>;

    /// Delete a vehicle by id. Deleting an absent id is not an error.
    async fn delete_vehicle(&self, id: &str) -> StoreResult<()>;

    /// List all vehicles, ordered by id.
    async fn list_vehicles(&self) -> StoreResult<Vec<Vehicle>>;

    /// Partial update: overwrite only the coordinate fields.
    async fn set_vehicle_position(&self, id: &str, latitude: f64, longitude: f64)
        -> StoreResult<()>;

    /// Partial update: overwrite only the at-capacity flag.
    async fn set_vehicle_capacity(&self, id: &str, at_capacity: bool) -> StoreResult<()>;

    /// Partial update: overwrite only the alarm flag.
    async fn set_vehicle_alarm(&self, id: &str, alarm: bool) -> StoreResult<()>;

    // ==================== Passengers ====================

    /// Retrieve a passenger by id.
    ///
    /// # Returns
    /// * `Ok(Passenger)` - the passenger document
    /// * `Err(StoreError::NotFound)` - if no passenger has that id
    async fn get_passenger(&self, id: &str) -> StoreResult<Passenger>;

    /// Partial update: overwrite only the passenger's coordinate fields.
    async fn set_passenger_position(
        &self,
        id: &str,
        latitude: f64,
        longitude: f64,
    ) -> StoreResult<()>;
}
