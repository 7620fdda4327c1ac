//! End-to-end tests for the HTTP API surface.

#![cfg(feature = "http-server")]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use fleetline::http::{create_router, AppState};
use fleetline::services::{FleetService, LiveHub, UnavailableLocator};
use fleetline::store::{FullStore, LocalStore};

fn app() -> (Router, LocalStore) {
    let store = LocalStore::new();
    let shared: Arc<dyn FullStore> = Arc::new(store.clone());
    let fleet = FleetService::new(
        shared.clone(),
        LiveHub::default(),
        Arc::new(UnavailableLocator),
    );
    (create_router(AppState::new(shared, fleet)), store)
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn seed_catalog(router: &Router) {
    for id in ["A", "B", "C"] {
        let response = router
            .clone()
            .oneshot(post(
                "/v1/stops",
                json!({"id": id, "latitude": 0.1, "longitude": 0.2}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = router
        .clone()
        .oneshot(post(
            "/v1/routes",
            json!({"id": "10", "name": "A - C", "stops": ["A", "B", "C"]}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_endpoint_reports_store_status() {
    let (router, _) = app();

    let response = router.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["store"], "connected");
}

#[tokio::test]
async fn test_created_route_exposes_derived_companion() {
    let (router, _) = app();
    seed_catalog(&router).await;

    let response = router.oneshot(get("/v1/routes/10R")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["name"], "C - A");
    assert_eq!(body["stops"], json!(["C", "B", "A"]));
}

#[tokio::test]
async fn test_route_with_unknown_stop_is_unprocessable() {
    let (router, _) = app();

    let response = router
        .oneshot(post(
            "/v1/routes",
            json!({"id": "10", "name": "A - Z", "stops": ["A", "Z"]}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["code"], "UNPROCESSABLE");
}

#[tokio::test]
async fn test_shift_search_round_trip() {
    let (router, _) = app();
    seed_catalog(&router).await;

    let response = router
        .clone()
        .oneshot(post(
            "/v1/shifts",
            json!({
                "id": "s1",
                "route": "10",
                "vehicle": "AB-123",
                "normal": {"start_time": "08:00", "end_time": "09:00", "service_date": "2024-01-02"}
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = router
        .clone()
        .oneshot(get("/v1/shifts/search?route=10&date=2024-01-01&time=07:00"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["matches"][0]["shift_id"], "s1");

    // The reverse direction has no service
    let response = router
        .oneshot(get("/v1/shifts/search?route=10R&date=2024-01-01&time=07:00"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_route_search_endpoint() {
    let (router, _) = app();
    seed_catalog(&router).await;

    router
        .clone()
        .oneshot(post(
            "/v1/shifts",
            json!({
                "route": "10",
                "vehicle": "AB-123",
                "normal": {"start_time": "08:00", "end_time": "09:00", "service_date": "2024-01-02"}
            }),
        ))
        .await
        .unwrap();

    let response = router
        .oneshot(get("/v1/routes/search?from=A&to=C&date=2024-01-01&time=07:00"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["results"][0]["route"]["id"], "10");
    assert_eq!(body["results"][0]["shifts"][0]["vehicle"], "AB-123");
}

#[tokio::test]
async fn test_invalid_query_date_is_bad_request() {
    let (router, _) = app();

    let response = router
        .oneshot(get("/v1/shifts/search?route=10&date=tomorrow&time=07:00"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_shift_is_not_found() {
    let (router, _) = app();

    let response = router.oneshot(get("/v1/shifts/ghost")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_shift_without_vehicle_is_unprocessable() {
    let (router, _) = app();
    seed_catalog(&router).await;

    let response = router
        .oneshot(post(
            "/v1/shifts",
            json!({"route": "10", "vehicle": ""}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_position_report_is_visible_in_the_store() {
    let (router, store) = app();

    let response = router
        .oneshot(post(
            "/v1/vehicles/AB-123/position",
            json!({"latitude": 41.4, "longitude": 2.2}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::ACCEPTED);

    use fleetline::store::FleetStore;
    let stored = store.get_vehicle("AB-123").await.unwrap();
    assert_eq!(stored.latitude, 41.4);
}
