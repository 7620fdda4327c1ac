//! Live broadcast hub for position updates.
//!
//! One broadcast channel per topic (vehicle locations, passenger locations).
//! Publishing is fire-and-forget: a send with zero subscribers is a normal
//! outcome, and slow subscribers that fall behind the channel capacity skip
//! ahead rather than blocking publishers.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Default per-channel buffered event capacity.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// A vehicle position update as pushed to subscribers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleLocation {
    pub vehicle_id: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A passenger position update as pushed to subscribers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassengerLocation {
    pub passenger_id: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Fan-out hub for the two live location channels.
///
/// Cloning is cheap; clones publish into and subscribe to the same channels.
#[derive(Clone)]
pub struct LiveHub {
    vehicles: broadcast::Sender<VehicleLocation>,
    passengers: broadcast::Sender<PassengerLocation>,
}

impl LiveHub {
    /// Create a hub with the given per-channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (vehicles, _) = broadcast::channel(capacity.max(1));
        let (passengers, _) = broadcast::channel(capacity.max(1));
        Self {
            vehicles,
            passengers,
        }
    }

    /// Publish a vehicle location to every current subscriber.
    ///
    /// Returns the number of subscribers the event was delivered to; zero
    /// when nobody is listening.
    pub fn publish_vehicle(&self, event: VehicleLocation) -> usize {
        self.vehicles.send(event).unwrap_or(0)
    }

    /// Publish a passenger location to every current subscriber.
    pub fn publish_passenger(&self, event: PassengerLocation) -> usize {
        self.passengers.send(event).unwrap_or(0)
    }

    /// Subscribe to vehicle location events.
    pub fn subscribe_vehicles(&self) -> broadcast::Receiver<VehicleLocation> {
        self.vehicles.subscribe()
    }

    /// Subscribe to passenger location events.
    pub fn subscribe_passengers(&self) -> broadcast::Receiver<PassengerLocation> {
        self.passengers.subscribe()
    }

    /// Current number of vehicle channel subscribers.
    pub fn vehicle_subscribers(&self) -> usize {
        self.vehicles.receiver_count()
    }

    /// Current number of passenger channel subscribers.
    pub fn passenger_subscribers(&self) -> usize {
        self.passengers.receiver_count()
    }
}

impl Default for LiveHub {
    fn default() -> Self {
        Self::new(DEFAULT_CHANNEL_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: &str) -> VehicleLocation {
        VehicleLocation {
            vehicle_id: id.to_string(),
            latitude: 41.4,
            longitude: 2.2,
        }
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_is_silent() {
        let hub = LiveHub::default();
        assert_eq!(hub.publish_vehicle(event("AB-123")), 0);
    }

    #[tokio::test]
    async fn test_fan_out_reaches_every_subscriber() {
        let hub = LiveHub::default();
        let mut rx1 = hub.subscribe_vehicles();
        let mut rx2 = hub.subscribe_vehicles();

        assert_eq!(hub.publish_vehicle(event("AB-123")), 2);
        assert_eq!(rx1.recv().await.unwrap().vehicle_id, "AB-123");
        assert_eq!(rx2.recv().await.unwrap().vehicle_id, "AB-123");
    }

    #[tokio::test]
    async fn test_channels_are_independent() {
        let hub = LiveHub::default();
        let mut vehicles = hub.subscribe_vehicles();

        hub.publish_passenger(PassengerLocation {
            passenger_id: "p1".into(),
            latitude: 1.0,
            longitude: 2.0,
        });

        // Nothing crosses over onto the vehicle channel
        assert!(matches!(
            vehicles.try_recv(),
            Err(broadcast::error::TryRecvError::Empty)
        ));
    }
}
