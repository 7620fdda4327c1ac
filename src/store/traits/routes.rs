//! Route store trait.

use async_trait::async_trait;

use crate::models::Route;
use crate::store::error::StoreResult;

/// Store trait for route documents.
///
/// Routes are plain documents here; reverse-companion derivation is service
/// logic layered on top (see [`crate::services::route_catalog`]), so `put`
/// semantics are a bare upsert of exactly one document.
#[async_trait]
pub trait RouteStore: Send + Sync {
    /// Store or replace a route document under its id.
    async fn put_route(&self, route: &Route) -> StoreResult<()>;

    /// Retrieve a route by id.
    ///
    /// # Returns
    /// * `Ok(Route)` - the route document
    /// * `Err(StoreError::NotFound)` - if no route has that id
    async fn get_route(&self, id: &str) -> StoreResult<Route>;

    /// Delete a route by id. Deletes only the named document; companions are
    /// never cascaded. Deleting an absent id is not an error.
    async fn delete_route(&self, id: &str) -> StoreResult<()>;

    /// List all routes, ordered by id.
    async fn list_routes(&self) -> StoreResult<Vec<Route>>;

    /// Whether a route exists under the given id.
    async fn route_exists(&self, id: &str) -> StoreResult<bool>;

    /// Array-membership scan: all routes whose stop sequence contains the
    /// given stop id, in any position.
    async fn routes_containing_stop(&self, stop_id: &str) -> StoreResult<Vec<Route>>;
}
