//! Stop catalog store trait.

use async_trait::async_trait;

use crate::models::Stop;
use crate::store::error::StoreResult;

/// Store trait for stop catalog documents.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait StopStore: Send + Sync {
    /// Store or replace a stop document under its id.
    async fn put_stop(&self, stop: &Stop) -> StoreResult<()>;

    /// Retrieve a stop by id.
    ///
    /// # Returns
    /// * `Ok(Stop)` - the stop document
    /// * `Err(StoreError::NotFound)` - if no stop has that id
    async fn get_stop(&self, id: &str) -> StoreResult<Stop>;

    /// Delete a stop by id. Deleting an absent id is not an error.
    async fn delete_stop(&self, id: &str) -> StoreResult<()>;

    /// List all stops, ordered by id.
    async fn list_stops(&self) -> StoreResult<Vec<Stop>>;

    /// Whether a stop exists under the given id.
    async fn stop_exists(&self, id: &str) -> StoreResult<bool>;
}
