//! Store trait definitions for document operations.
//!
//! The keyed document store is consumed through a collection of focused
//! per-entity traits rather than one wide interface. Each trait covers the
//! narrow operations its collection needs: get/put/delete by id, plus simple
//! equality and array-membership queries.
//!
//! # Module Organization
//!
//! - [`stops`]: stop catalog documents
//! - [`routes`]: route documents, including the stop-membership scan
//! - [`shifts`]: shift documents, including the base-route equality query
//! - [`fleet`]: vehicle and passenger live state, with field-isolated updates
//!
//! # Trait Composition
//!
//! A complete store implementation implements all four traits:
//!
//! ```ignore
//! impl StopStore for MyStore { ... }
//! impl RouteStore for MyStore { ... }
//! impl ShiftStore for MyStore { ... }
//! impl FleetStore for MyStore { ... }
//! ```
//!
//! Functions needing the whole store take the [`FullStore`] bound:
//!
//! ```ignore
//! async fn my_service(store: &dyn FullStore) -> StoreResult<()> {
//!     store.put_route(&route).await?;
//!     store.shifts_for_route("10").await?;
//!     Ok(())
//! }
//! ```

pub mod fleet;
pub mod routes;
pub mod shifts;
pub mod stops;

pub use fleet::FleetStore;
pub use routes::RouteStore;
pub use shifts::ShiftStore;
pub use stops::StopStore;

use super::error::StoreResult;
use async_trait::async_trait;

/// Composite trait bound for a complete store implementation.
///
/// Automatically implemented for any type implementing all four entity
/// traits plus [`HealthCheck`].
pub trait FullStore: StopStore + RouteStore + ShiftStore + FleetStore + HealthCheck {}

impl<T> FullStore for T where T: StopStore + RouteStore + ShiftStore + FleetStore + HealthCheck {}

/// Connection health probe, shared by every backend.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Check if the store connection is healthy.
    ///
    /// # Returns
    /// - `Ok(true)` if the connection is healthy
    /// - `Ok(false)` if unhealthy but no error occurred
    /// - `Err(StoreError)` if the check itself failed
    async fn health_check(&self) -> StoreResult<bool>;
}
