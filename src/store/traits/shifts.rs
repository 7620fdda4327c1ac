//! Shift store trait.

use async_trait::async_trait;

use crate::models::Shift;
use crate::store::error::StoreResult;

/// Store trait for shift documents.
#[async_trait]
pub trait ShiftStore: Send + Sync {
    /// Store or replace a shift document under its id.
    async fn put_shift(&self, shift: &Shift) -> StoreResult<()>;

    /// Retrieve a shift by id.
    ///
    /// # Returns
    /// * `Ok(Shift)` - the shift document
    /// * `Err(StoreError::NotFound)` - if no shift has that id
    async fn get_shift(&self, id: &str) -> StoreResult<Shift>;

    /// Delete a shift by id. Deleting an absent id is not an error.
    async fn delete_shift(&self, id: &str) -> StoreResult<()>;

    /// List all shifts, ordered by id.
    async fn list_shifts(&self) -> StoreResult<Vec<Shift>>;

    /// Equality query: all shifts whose base-route reference equals the
    /// given base route id.
    async fn shifts_for_route(&self, base_route_id: &str) -> StoreResult<Vec<Shift>>;
}
