//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Stop catalog
        .route("/stops", get(handlers::list_stops).post(handlers::create_stop))
        .route(
            "/stops/{id}",
            get(handlers::get_stop)
                .put(handlers::update_stop)
                .delete(handlers::delete_stop),
        )
        // Route catalog (search before the id capture)
        .route("/routes/search", get(handlers::search_routes))
        .route(
            "/routes",
            get(handlers::list_routes).post(handlers::create_route),
        )
        .route(
            "/routes/{id}",
            get(handlers::get_route)
                .put(handlers::update_route)
                .delete(handlers::delete_route),
        )
        // Shift roster
        .route("/shifts/search", get(handlers::search_shifts))
        .route(
            "/shifts",
            get(handlers::list_shifts).post(handlers::create_shift),
        )
        .route(
            "/shifts/{id}",
            get(handlers::get_shift)
                .put(handlers::update_shift)
                .delete(handlers::delete_shift),
        )
        .route("/shifts/{id}/normal-leg", delete(handlers::remove_normal_leg))
        .route(
            "/shifts/{id}/reverse-leg",
            delete(handlers::remove_reverse_leg),
        )
        // Fleet state
        .route(
            "/vehicles",
            get(handlers::list_vehicles).post(handlers::register_vehicle),
        )
        .route("/vehicles/{id}", get(handlers::get_vehicle))
        .route(
            "/vehicles/{id}/position",
            post(handlers::report_vehicle_position),
        )
        .route("/vehicles/{id}/capacity", post(handlers::report_capacity))
        .route("/vehicles/{id}/alarm", post(handlers::report_alarm))
        .route(
            "/passengers/{id}/position",
            post(handlers::report_passenger_position),
        )
        // Live location streams
        .route("/live/vehicles", get(handlers::stream_vehicle_locations))
        .route(
            "/live/passengers",
            get(handlers::stream_passenger_locations),
        );

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{FleetService, LiveHub, UnavailableLocator};
    use crate::store::LocalStore;
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let store = Arc::new(LocalStore::new()) as Arc<dyn crate::store::FullStore>;
        let fleet = FleetService::new(
            store.clone(),
            LiveHub::default(),
            Arc::new(UnavailableLocator),
        );
        let state = AppState::new(store, fleet);
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
