//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer for business logic; the live endpoints bridge the broadcast hub
//! onto Server-Sent Event streams.

use axum::{
    extract::{Path, Query, State},
    response::sse::{Event, Sse},
    Json,
};
use futures::stream::Stream;
use std::convert::Infallible;
use std::time::Duration;
use tokio::sync::broadcast::error::RecvError;

use super::dto::{
    AlarmReport, CapacityReport, HealthResponse, PositionReport, RouteListResponse,
    RouteSearchQuery, RouteSearchResponse, ShiftListResponse, ShiftSearchQuery,
    ShiftSearchResponse, StopListResponse, VehicleListResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::{clock, Route, Shift, Stop, Vehicle};
use crate::services::{self, EmptyRoutePolicy};
use crate::store::{HealthCheck, StopStore};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Parse the query instant shared by the two search endpoints.
fn parse_query_instant(
    date: &str,
    time: &str,
) -> Result<(chrono::NaiveDate, chrono::NaiveTime), AppError> {
    let date = clock::parse_service_date(date)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid query date: {}", date)))?;
    let time = clock::parse_time_of_day(time)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid query time: {}", time)))?;
    Ok((date, time))
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the store is
/// reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let store_status = match state.store.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        store: store_status,
    }))
}

// =============================================================================
// Stop Catalog
// =============================================================================

/// GET /v1/stops
pub async fn list_stops(State(state): State<AppState>) -> HandlerResult<StopListResponse> {
    let stops = state.store.list_stops().await?;
    let total = stops.len();
    Ok(Json(StopListResponse { stops, total }))
}

/// POST /v1/stops
pub async fn create_stop(
    State(state): State<AppState>,
    Json(stop): Json<Stop>,
) -> HandlerResult<Stop> {
    if stop.id.trim().is_empty() {
        return Err(AppError::BadRequest("stop id must not be empty".to_string()));
    }
    state.store.put_stop(&stop).await?;
    Ok(Json(stop))
}

/// GET /v1/stops/{id}
pub async fn get_stop(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<Stop> {
    Ok(Json(state.store.get_stop(&id).await?))
}

/// PUT /v1/stops/{id}
pub async fn update_stop(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut stop): Json<Stop>,
) -> HandlerResult<Stop> {
    stop.id = id;
    state.store.put_stop(&stop).await?;
    Ok(Json(stop))
}

/// DELETE /v1/stops/{id}
pub async fn delete_stop(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<axum::http::StatusCode, AppError> {
    state.store.delete_stop(&id).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

// =============================================================================
// Route Catalog
// =============================================================================

/// GET /v1/routes
pub async fn list_routes(State(state): State<AppState>) -> HandlerResult<RouteListResponse> {
    let routes = services::route_catalog::list_routes(state.store.as_ref()).await?;
    let total = routes.len();
    Ok(Json(RouteListResponse { routes, total }))
}

/// POST /v1/routes
///
/// Store a route; a companion reverse route is derived automatically for
/// routes with at least two stops.
pub async fn create_route(
    State(state): State<AppState>,
    Json(route): Json<Route>,
) -> HandlerResult<Route> {
    services::route_catalog::add_route(state.store.as_ref(), &route).await?;
    Ok(Json(route))
}

/// GET /v1/routes/{id}
pub async fn get_route(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<Route> {
    Ok(Json(
        services::route_catalog::get_route(state.store.as_ref(), &id).await?,
    ))
}

/// PUT /v1/routes/{id}
///
/// Overwrite a route; its reverse companion is re-derived unconditionally.
pub async fn update_route(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(route): Json<Route>,
) -> HandlerResult<Route> {
    services::route_catalog::update_route(state.store.as_ref(), &id, &route).await?;
    Ok(Json(
        services::route_catalog::get_route(state.store.as_ref(), &id).await?,
    ))
}

/// DELETE /v1/routes/{id}
///
/// Deletes only the named route; derived companions are left in place.
pub async fn delete_route(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<axum::http::StatusCode, AppError> {
    services::route_catalog::delete_route(state.store.as_ref(), &id).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

/// GET /v1/routes/search?from=&to=&date=&time=&include_empty=
///
/// Find routes containing both stops and enrich each with its eligible
/// shift legs.
pub async fn search_routes(
    State(state): State<AppState>,
    Query(query): Query<RouteSearchQuery>,
) -> HandlerResult<RouteSearchResponse> {
    let (date, time) = parse_query_instant(&query.date, &query.time)?;
    let policy = if query.include_empty.unwrap_or(false) {
        EmptyRoutePolicy::Keep
    } else {
        EmptyRoutePolicy::Drop
    };

    let results = services::search_routes(
        state.store.as_ref(),
        &query.from,
        &query.to,
        date,
        time,
        policy,
    )
    .await?;
    let total = results.len();

    Ok(Json(RouteSearchResponse { results, total }))
}

// =============================================================================
// Shift Roster
// =============================================================================

/// GET /v1/shifts
pub async fn list_shifts(State(state): State<AppState>) -> HandlerResult<ShiftListResponse> {
    let shifts = services::shift_roster::list_shifts(state.store.as_ref()).await?;
    let total = shifts.len();
    Ok(Json(ShiftListResponse { shifts, total }))
}

/// POST /v1/shifts
pub async fn create_shift(
    State(state): State<AppState>,
    Json(shift): Json<Shift>,
) -> Result<(axum::http::StatusCode, Json<Shift>), AppError> {
    let stored = services::shift_roster::add_shift(state.store.as_ref(), &shift).await?;
    Ok((axum::http::StatusCode::CREATED, Json(stored)))
}

/// GET /v1/shifts/{id}
pub async fn get_shift(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<Shift> {
    Ok(Json(
        services::shift_roster::get_shift(state.store.as_ref(), &id).await?,
    ))
}

/// PUT /v1/shifts/{id}
pub async fn update_shift(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(shift): Json<Shift>,
) -> HandlerResult<Shift> {
    let stored = services::shift_roster::update_shift(state.store.as_ref(), &id, &shift).await?;
    Ok(Json(stored))
}

/// DELETE /v1/shifts/{id}
pub async fn delete_shift(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<axum::http::StatusCode, AppError> {
    services::shift_roster::delete_shift(state.store.as_ref(), &id).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

/// DELETE /v1/shifts/{id}/normal-leg
pub async fn remove_normal_leg(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<Shift> {
    Ok(Json(
        services::shift_roster::remove_normal_leg(state.store.as_ref(), &id).await?,
    ))
}

/// DELETE /v1/shifts/{id}/reverse-leg
pub async fn remove_reverse_leg(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<Shift> {
    Ok(Json(
        services::shift_roster::remove_reverse_leg(state.store.as_ref(), &id).await?,
    ))
}

/// GET /v1/shifts/search?route=&date=&time=
///
/// Find eligible shift legs for a (possibly direction-suffixed) route token.
pub async fn search_shifts(
    State(state): State<AppState>,
    Query(query): Query<ShiftSearchQuery>,
) -> HandlerResult<ShiftSearchResponse> {
    let (date, time) = parse_query_instant(&query.date, &query.time)?;

    let matches =
        services::match_shifts(state.store.as_ref(), &query.route, date, time).await?;
    let total = matches.len();

    Ok(Json(ShiftSearchResponse { matches, total }))
}

// =============================================================================
// Fleet State
// =============================================================================

/// GET /v1/vehicles
pub async fn list_vehicles(State(state): State<AppState>) -> HandlerResult<VehicleListResponse> {
    let vehicles = state.fleet.list_vehicles().await?;
    let total = vehicles.len();
    Ok(Json(VehicleListResponse { vehicles, total }))
}

/// POST /v1/vehicles
pub async fn register_vehicle(
    State(state): State<AppState>,
    Json(vehicle): Json<Vehicle>,
) -> Result<(axum::http::StatusCode, Json<Vehicle>), AppError> {
    state.fleet.register_vehicle(&vehicle).await?;
    Ok((axum::http::StatusCode::CREATED, Json(vehicle)))
}

/// GET /v1/vehicles/{id}
///
/// Current vehicle state; triggers the one-shot geolocation fallback for
/// vehicles still at the origin default.
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<Vehicle> {
    Ok(Json(state.fleet.vehicle_snapshot(&id).await?))
}

/// POST /v1/vehicles/{id}/position
pub async fn report_vehicle_position(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(report): Json<PositionReport>,
) -> Result<axum::http::StatusCode, AppError> {
    state
        .fleet
        .report_vehicle_position(&id, report.latitude, report.longitude)
        .await?;
    Ok(axum::http::StatusCode::ACCEPTED)
}

/// POST /v1/vehicles/{id}/capacity
pub async fn report_capacity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(report): Json<CapacityReport>,
) -> Result<axum::http::StatusCode, AppError> {
    state.fleet.report_capacity(&id, report.at_capacity).await?;
    Ok(axum::http::StatusCode::ACCEPTED)
}

/// POST /v1/vehicles/{id}/alarm
pub async fn report_alarm(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(report): Json<AlarmReport>,
) -> Result<axum::http::StatusCode, AppError> {
    state.fleet.report_alarm(&id, report.alarm).await?;
    Ok(axum::http::StatusCode::ACCEPTED)
}

/// POST /v1/passengers/{id}/position
pub async fn report_passenger_position(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(report): Json<PositionReport>,
) -> Result<axum::http::StatusCode, AppError> {
    state
        .fleet
        .report_passenger_position(&id, report.latitude, report.longitude)
        .await?;
    Ok(axum::http::StatusCode::ACCEPTED)
}

// =============================================================================
// Live Location Streams
// =============================================================================

/// GET /v1/live/vehicles
///
/// Stream vehicle position updates via Server-Sent Events (SSE).
pub async fn stream_vehicle_locations(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let mut rx = state.fleet.hub().subscribe_vehicles();
    let stream = async_stream::stream! {
        loop {
            match rx.recv().await {
                Ok(update) => {
                    let data = serde_json::to_string(&update).unwrap_or_default();
                    yield Ok(Event::default().event("vehicle-location").data(data));
                }
                // Fell behind the channel buffer; skip ahead to live events
                Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => break,
            }
        }
    };

    Sse::new(stream).keep_alive(
        axum::response::sse::KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}

/// GET /v1/live/passengers
///
/// Stream passenger position updates via Server-Sent Events (SSE).
pub async fn stream_passenger_locations(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let mut rx = state.fleet.hub().subscribe_passengers();
    let stream = async_stream::stream! {
        loop {
            match rx.recv().await {
                Ok(update) => {
                    let data = serde_json::to_string(&update).unwrap_or_default();
                    yield Ok(Event::default().event("passenger-location").data(data));
                }
                Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => break,
            }
        }
    };

    Sse::new(stream).keep_alive(
        axum::response::sse::KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}
