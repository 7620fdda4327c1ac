//! Fleet state service: position/status reports and live publishing.
//!
//! Every report persists first, then publishes to the hub. The two effects
//! are independent side effects of the same call: there is no transactional
//! coupling between "persisted" and "broadcast observed", and no per-vehicle
//! lock beyond what the store itself serializes.

use std::sync::Arc;

use log::debug;

use crate::models::Vehicle;
use crate::store::{FleetStore, FullStore, RouteStore};

use super::broadcast::{LiveHub, PassengerLocation, VehicleLocation};
use super::error::{ServiceError, ServiceResult};
use super::geolocate::GeoLocator;

/// Stateful fleet service binding the store, the live hub, and the
/// geolocation fallback collaborator.
#[derive(Clone)]
pub struct FleetService {
    store: Arc<dyn FullStore>,
    hub: LiveHub,
    locator: Arc<dyn GeoLocator>,
}

impl FleetService {
    pub fn new(store: Arc<dyn FullStore>, hub: LiveHub, locator: Arc<dyn GeoLocator>) -> Self {
        Self {
            store,
            hub,
            locator,
        }
    }

    /// The hub this service publishes into.
    pub fn hub(&self) -> &LiveHub {
        &self.hub
    }

    /// Register (or replace) a fleet member.
    ///
    /// A non-empty assigned route must exist.
    pub async fn register_vehicle(&self, vehicle: &Vehicle) -> ServiceResult<()> {
        if vehicle.id.trim().is_empty() {
            return Err(ServiceError::Validation(
                "vehicle id must not be empty".to_string(),
            ));
        }
        if !vehicle.route.trim().is_empty() && !self.store.route_exists(&vehicle.route).await? {
            return Err(ServiceError::UnknownRoute(vehicle.route.clone()));
        }

        self.store.put_vehicle(vehicle).await?;
        Ok(())
    }

    /// Persist a vehicle position report, then push it to subscribers.
    ///
    /// The write is unconditional: no staleness check, no rate limit.
    pub async fn report_vehicle_position(
        &self,
        vehicle_id: &str,
        latitude: f64,
        longitude: f64,
    ) -> ServiceResult<()> {
        require_id(vehicle_id, "vehicle id")?;

        self.store
            .set_vehicle_position(vehicle_id, latitude, longitude)
            .await?;

        self.hub.publish_vehicle(VehicleLocation {
            vehicle_id: vehicle_id.to_string(),
            latitude,
            longitude,
        });

        Ok(())
    }

    /// Persist a passenger position report, then push it to subscribers.
    pub async fn report_passenger_position(
        &self,
        passenger_id: &str,
        latitude: f64,
        longitude: f64,
    ) -> ServiceResult<()> {
        require_id(passenger_id, "passenger id")?;

        self.store
            .set_passenger_position(passenger_id, latitude, longitude)
            .await?;

        self.hub.publish_passenger(PassengerLocation {
            passenger_id: passenger_id.to_string(),
            latitude,
            longitude,
        });

        Ok(())
    }

    /// Persist the at-capacity flag in isolation.
    pub async fn report_capacity(&self, vehicle_id: &str, at_capacity: bool) -> ServiceResult<()> {
        require_id(vehicle_id, "vehicle id")?;
        self.store
            .set_vehicle_capacity(vehicle_id, at_capacity)
            .await?;
        Ok(())
    }

    /// Persist the alarm flag in isolation.
    pub async fn report_alarm(&self, vehicle_id: &str, alarm: bool) -> ServiceResult<()> {
        require_id(vehicle_id, "vehicle id")?;
        self.store.set_vehicle_alarm(vehicle_id, alarm).await?;
        Ok(())
    }

    /// Read a vehicle's current state.
    ///
    /// A vehicle still at the origin default gets one opportunistic
    /// geolocation lookup; on success the coordinates are persisted and
    /// returned, on any failure the stored record is returned untouched.
    pub async fn vehicle_snapshot(&self, vehicle_id: &str) -> ServiceResult<Vehicle> {
        let mut vehicle = self.store.get_vehicle(vehicle_id).await?;

        if vehicle.at_origin() {
            match self.locator.locate().await {
                Ok((latitude, longitude)) => {
                    match self
                        .store
                        .set_vehicle_position(vehicle_id, latitude, longitude)
                        .await
                    {
                        Ok(()) => {
                            vehicle.latitude = latitude;
                            vehicle.longitude = longitude;
                        }
                        Err(e) => {
                            debug!(
                                "could not persist located coordinates for vehicle {}: {}",
                                vehicle_id, e
                            );
                        }
                    }
                }
                Err(e) => {
                    debug!("geolocation fallback failed for vehicle {}: {}", vehicle_id, e);
                }
            }
        }

        Ok(vehicle)
    }

    /// List all registered vehicles.
    pub async fn list_vehicles(&self) -> ServiceResult<Vec<Vehicle>> {
        Ok(self.store.list_vehicles().await?)
    }
}

fn require_id(id: &str, what: &str) -> ServiceResult<()> {
    if id.trim().is_empty() {
        return Err(ServiceError::Validation(format!(
            "{} must not be empty",
            what
        )));
    }
    Ok(())
}
