//! Integration tests for stop-pair route search.

use chrono::{NaiveDate, NaiveTime};

use fleetline::models::{Route, RouteDirection, Shift, ShiftLeg, Stop};
use fleetline::services::{route_catalog, search_routes, shift_roster, EmptyRoutePolicy, ServiceError};
use fleetline::store::{LocalStore, StopStore};

fn stops(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn time(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

async fn seeded_store() -> LocalStore {
    let store = LocalStore::new();
    for id in ["X", "Y", "Z", "W"] {
        store.put_stop(&Stop::new(id, 0.0, 0.0)).await.unwrap();
    }
    // Two routes both serving X and Y, one serving only Z-W
    route_catalog::add_route(&store, &Route::new("1", "X - Y", stops(&["X", "Z", "Y"])))
        .await
        .unwrap();
    route_catalog::add_route(&store, &Route::new("2", "X - W", stops(&["X", "Y", "W"])))
        .await
        .unwrap();
    route_catalog::add_route(&store, &Route::new("3", "Z - W", stops(&["Z", "W"])))
        .await
        .unwrap();
    store
}

fn leg(date: &str) -> ShiftLeg {
    ShiftLeg::new("08:00", "09:00", date)
}

async fn add_shift(store: &LocalStore, id: &str, route: &str, normal: bool) {
    let shift = Shift {
        id: id.to_string(),
        route: route.to_string(),
        vehicle: "AB-123".to_string(),
        normal: normal.then(|| leg("2024-01-02")),
        reverse: (!normal).then(|| leg("2024-01-02")),
    };
    shift_roster::add_shift(store, &shift).await.unwrap();
}

#[tokio::test]
async fn test_both_containing_routes_are_returned_and_enriched_independently() {
    let store = seeded_store().await;
    add_shift(&store, "s1", "1", true).await;
    add_shift(&store, "s2", "2", true).await;

    let results = search_routes(
        &store,
        "X",
        "Y",
        date("2024-01-01"),
        time("07:00"),
        EmptyRoutePolicy::Drop,
    )
    .await
    .unwrap();

    let mut route_ids: Vec<&str> = results.iter().map(|r| r.route.id.as_str()).collect();
    route_ids.sort();
    assert_eq!(route_ids, vec!["1", "2"]);

    for result in &results {
        assert_eq!(result.shifts.len(), 1);
        assert_eq!(result.shifts[0].route, result.route.id);
    }
}

#[tokio::test]
async fn test_drop_policy_omits_routes_without_eligible_shifts() {
    let store = seeded_store().await;
    add_shift(&store, "s1", "1", true).await;

    let results = search_routes(
        &store,
        "X",
        "Y",
        date("2024-01-01"),
        time("07:00"),
        EmptyRoutePolicy::Drop,
    )
    .await
    .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].route.id, "1");
}

#[tokio::test]
async fn test_keep_policy_returns_route_metadata_with_empty_shifts() {
    let store = seeded_store().await;
    add_shift(&store, "s1", "1", true).await;

    let results = search_routes(
        &store,
        "X",
        "Y",
        date("2024-01-01"),
        time("07:00"),
        EmptyRoutePolicy::Keep,
    )
    .await
    .unwrap();

    // Route "2" plus the derived reverse companions also contain X and Y
    assert!(results.iter().any(|r| r.route.id == "2" && r.shifts.is_empty()));
    assert!(results.iter().any(|r| r.route.id == "1" && r.shifts.len() == 1));
}

#[tokio::test]
async fn test_reverse_companion_is_searched_under_its_own_identifier() {
    let store = seeded_store().await;
    // Reverse-only service on route 1
    add_shift(&store, "s1", "1", false).await;

    let results = search_routes(
        &store,
        "Y",
        "X",
        date("2024-01-01"),
        time("07:00"),
        EmptyRoutePolicy::Drop,
    )
    .await
    .unwrap();

    // Only the derived companion "1R" carries an eligible (reverse) leg
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].route.id, "1R");
    assert_eq!(results[0].shifts[0].direction, RouteDirection::Reverse);
}

#[tokio::test]
async fn test_stop_order_within_the_sequence_is_ignored() {
    let store = seeded_store().await;
    add_shift(&store, "s1", "1", true).await;

    // "Y" precedes "X" on route 1's sequence only in the reverse companion,
    // yet the forward route still matches the (Y, X) pair.
    let results = search_routes(
        &store,
        "Y",
        "X",
        date("2024-01-01"),
        time("07:00"),
        EmptyRoutePolicy::Drop,
    )
    .await
    .unwrap();

    assert!(results.iter().any(|r| r.route.id == "1"));
}

#[tokio::test]
async fn test_no_matching_route_is_an_empty_result() {
    let store = seeded_store().await;

    let results = search_routes(
        &store,
        "X",
        "nowhere",
        date("2024-01-01"),
        time("07:00"),
        EmptyRoutePolicy::Keep,
    )
    .await
    .unwrap();

    assert!(results.is_empty());
}

#[tokio::test]
async fn test_empty_stop_is_a_validation_error() {
    let store = seeded_store().await;

    let result = search_routes(
        &store,
        "",
        "Y",
        date("2024-01-01"),
        time("07:00"),
        EmptyRoutePolicy::Drop,
    )
    .await;

    assert!(matches!(result, Err(ServiceError::Validation(_))));
}
