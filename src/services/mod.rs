//! Service layer for business logic and orchestration.
//!
//! This module sits between the HTTP handlers and the store traits. Catalog,
//! roster, matching, and search are store-agnostic free functions; the fleet
//! service and live hub are stateful components shared across requests.

pub mod broadcast;
pub mod error;
pub mod fleet;
pub mod geolocate;
pub mod matcher;
pub mod route_catalog;
pub mod search;
pub mod shift_roster;

pub use broadcast::{LiveHub, PassengerLocation, VehicleLocation, DEFAULT_CHANNEL_CAPACITY};
pub use error::{ServiceError, ServiceResult};
pub use fleet::FleetService;
pub use geolocate::{FixedLocator, GeoLocator, GeolocateError, HttpLocator, UnavailableLocator};
pub use matcher::{leg_is_eligible, match_shifts};
pub use search::{search_routes, EmptyRoutePolicy};
