//! Application state for the HTTP server.

use std::sync::Arc;

use crate::services::FleetService;
use crate::store::FullStore;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Store instance for document operations
    pub store: Arc<dyn FullStore>,
    /// Fleet state service (owns the live hub and geolocation fallback)
    pub fleet: FleetService,
}

impl AppState {
    /// Create a new application state.
    pub fn new(store: Arc<dyn FullStore>, fleet: FleetService) -> Self {
        Self { store, fleet }
    }
}
