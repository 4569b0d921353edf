use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use reliefgrid::allocation::AllocationPlanner;
use reliefgrid::maps::{MapClient, RouteProvider, RoutingProfile};
use reliefgrid::models::Coordinates;
use reliefgrid::resilience::{BreakerState, CircuitBreaker};
use reliefgrid::services::notification::NotificationService;
use reliefgrid::{seed, Config, MapError};

const KEY: &str = "test-key-123";

fn config(server: &MockServer) -> Config {
    Config {
        map_api_key: Some(KEY.to_string()),
        map_base_url: server.uri(),
        geocode_timeout_ms: 200,
        routing_timeout_ms: 500,
        ..Config::default()
    }
}

fn client(server: &MockServer) -> MapClient {
    MapClient::new(&config(server), Arc::new(CircuitBreaker::default())).unwrap()
}

fn hq() -> Coordinates {
    Coordinates::new(21.0285, 105.8542)
}

fn directions_body(meters: f64, seconds: f64) -> serde_json::Value {
    json!({
        "routes": [{
            "legs": [{
                "distance": {"value": meters, "text": format!("{:.1} km", meters / 1000.0)},
                "duration": {"value": seconds, "text": format!("{} mins", seconds / 60.0)},
                "steps": [{
                    "distance": {"value": meters, "text": ""},
                    "duration": {"value": seconds, "text": ""},
                    "html_instructions": "Head north",
                    "maneuver": "straight"
                }]
            }]
        }]
    })
}

#[test]
fn missing_key_is_reported() {
    let config = Config {
        map_api_key: Some("   ".into()),
        ..Config::default()
    };
    let result = MapClient::new(&config, Arc::new(CircuitBreaker::default()));
    assert_eq!(result.err(), Some(MapError::MissingApiKey));
}

#[tokio::test]
async fn directions_sends_expected_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Direction"))
        .and(query_param("origin", "21.0285,105.8542"))
        .and(query_param("destination", "21.0378,105.8342"))
        .and(query_param("vehicle", "bike"))
        .and(query_param("api_key", KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(directions_body(2450.0, 480.0)))
        .expect(1)
        .mount(&server)
        .await;

    let leg = client(&server)
        .get_directions(hq(), Coordinates::new(21.0378, 105.8342), RoutingProfile::Bike)
        .await
        .unwrap();
    assert_eq!(leg.distance.value, 2450.0);
    assert_eq!(leg.duration.value, 480.0);
    assert_eq!(leg.steps.len(), 1);
}

#[tokio::test]
async fn non_success_status_yields_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Direction"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client(&server);
    let leg = client
        .get_directions(hq(), Coordinates::new(21.05, 105.85), RoutingProfile::Car)
        .await;
    assert!(leg.is_none());
    assert_eq!(client.breaker().failure_count(), 1);

    let err = client
        .fetch_directions(hq(), Coordinates::new(21.05, 105.85), RoutingProfile::Car)
        .await
        .unwrap_err();
    assert_eq!(err, MapError::Status { status: 500 });
}

#[tokio::test]
async fn empty_routes_yield_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Direction"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"routes": []})))
        .mount(&server)
        .await;

    let client = client(&server);
    assert_eq!(
        client
            .fetch_directions(hq(), Coordinates::new(21.05, 105.85), RoutingProfile::Foot)
            .await
            .unwrap_err(),
        MapError::Empty
    );
    assert!(client
        .directions(hq(), Coordinates::new(21.05, 105.85), RoutingProfile::Foot)
        .await
        .is_none());
}

#[tokio::test]
async fn failed_routing_falls_back_to_straight_line_for_every_candidate() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Direction"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let notifications = Arc::new(NotificationService::default());
    let mut notices = notifications.subscribe();
    let planner = AllocationPlanner::new(
        hq(),
        Duration::ZERO,
        Some(Arc::new(client(&server)) as Arc<dyn RouteProvider>),
        notifications,
    );

    let batch = planner
        .compute_distances(seed::volunteers(), &CancellationToken::new())
        .await
        .unwrap();

    assert!(!batch.routed);
    for candidate in &batch.candidates {
        let distance = candidate.distance.as_ref().expect("straight-line distance");
        assert!(distance.straight_line_km > 0.0);
        assert!(!distance.is_routed());
    }
    assert_eq!(batch.candidates.iter().filter(|c| c.is_nearest).count(), 1);
    assert!(notices.try_recv().is_ok());
}

#[tokio::test]
async fn successful_routing_fills_all_profiles() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Direction"))
        .respond_with(ResponseTemplate::new(200).set_body_json(directions_body(5000.0, 900.0)))
        .expect(15)
        .mount(&server)
        .await;

    let planner = AllocationPlanner::new(
        hq(),
        Duration::from_millis(5),
        Some(Arc::new(client(&server)) as Arc<dyn RouteProvider>),
        Arc::new(NotificationService::default()),
    );
    let batch = planner
        .compute_distances(seed::volunteers(), &CancellationToken::new())
        .await
        .unwrap();

    assert!(batch.routed);
    for candidate in &batch.candidates {
        let routed = &candidate.distance.as_ref().unwrap().routed;
        assert_eq!(routed.len(), 3);
        assert_eq!(routed[&RoutingProfile::Car].distance_text, "5.0 km");
    }
}

#[tokio::test]
async fn rejected_key_stops_further_calls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Geocode"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let point = Coordinates::new(21.0285, 105.8542);

    assert_eq!(
        client.reverse_geocode(point).await.unwrap_err(),
        MapError::Unauthorized { status: 401 }
    );
    assert!(client.breaker().is_latched());
    assert!(client.breaker().last_failure_at().is_some());

    assert_eq!(client.reverse_geocode(point).await.unwrap_err(), MapError::CircuitOpen);
    assert!(client
        .get_directions(hq(), point, RoutingProfile::Car)
        .await
        .is_none());
}

#[tokio::test]
async fn forbidden_is_treated_like_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Direction"))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    for _ in 0..3 {
        assert!(client
            .get_directions(hq(), Coordinates::new(21.05, 105.85), RoutingProfile::Car)
            .await
            .is_none());
    }
    assert_eq!(client.breaker().state(), BreakerState::Open);
}

#[tokio::test]
async fn slow_geocode_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Geocode"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"results": []}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = client(&server);
    let err = client
        .reverse_geocode(Coordinates::new(21.0285, 105.8542))
        .await
        .unwrap_err();
    assert_eq!(err, MapError::Timeout);
    assert_eq!(client.breaker().failure_count(), 1);
    assert!(!client.breaker().is_latched());
}

#[tokio::test]
async fn area_boundary_uses_provider_polygon() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Geocode"))
        .and(query_param("latlng", "21.0285,105.8542"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "formatted_address": "Hàng Trống, Hoàn Kiếm, Hà Nội",
                "place_id": "place-1",
                "geometry": {"location": {"lat": 21.0285, "lng": 105.8542}},
                "address_components": [{"long_name": "Hàng Trống", "short_name": "Hàng Trống"}],
                "compound": {"district": "Hoàn Kiếm", "commune": "Hàng Trống", "province": "Hà Nội"}
            }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/Place/Detail"))
        .and(query_param("place_id", "place-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": {
                "place_id": "place-1",
                "name": "Hàng Trống",
                "formatted_address": "Hàng Trống, Hoàn Kiếm, Hà Nội",
                "geometry": {
                    "location": {"lat": 21.0285, "lng": 105.8542},
                    "boundary": {
                        "type": "Polygon",
                        "coordinates": [[[105.85, 21.02], [105.86, 21.02], [105.86, 21.03], [105.85, 21.03], [105.85, 21.02]]]
                    }
                }
            }
        })))
        .mount(&server)
        .await;

    let client = client(&server);
    let geocoded = client.reverse_geocode(hq()).await.unwrap();
    assert_eq!(
        geocoded.compound.and_then(|c| c.province).as_deref(),
        Some("Hà Nội")
    );

    let boundary = client.area_boundary(hq()).await;
    assert!(!boundary.approximate);
    assert_eq!(boundary.polygon.len(), 5);
    assert_eq!(boundary.polygon[0], Coordinates::new(21.02, 105.85));
    assert_eq!(boundary.place_id.as_deref(), Some("place-1"));
}

#[tokio::test]
async fn area_boundary_without_polygon_is_approximate() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Geocode"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"formatted_address": "Somewhere", "place_id": "place-2"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/Place/Detail"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": {"place_id": "place-2", "geometry": {"location": {"lat": 21.0, "lng": 105.0}}}
        })))
        .mount(&server)
        .await;

    let boundary = client(&server).area_boundary(hq()).await;
    assert!(boundary.approximate);
    assert_eq!(boundary.polygon.len(), 33);
    assert_eq!(boundary.address.as_deref(), Some("Somewhere"));
}

#[tokio::test]
async fn area_boundary_survives_geocode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Geocode"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let boundary = client(&server).area_boundary(hq()).await;
    assert!(boundary.approximate);
    assert!(boundary.place_id.is_none());
    assert_eq!(boundary.polygon.first(), boundary.polygon.last());
}

#[tokio::test]
async fn empty_trial_result_releases_half_open_slot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Direction"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/Direction"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"routes": []})))
        .mount(&server)
        .await;

    let breaker = Arc::new(CircuitBreaker::new(1, Duration::from_millis(50)));
    let client = MapClient::new(&config(&server), breaker.clone()).unwrap();
    let to = Coordinates::new(21.05, 105.85);

    assert_eq!(
        client.fetch_directions(hq(), to, RoutingProfile::Car).await.unwrap_err(),
        MapError::Status { status: 500 }
    );
    assert!(breaker.is_open());
    tokio::time::sleep(Duration::from_millis(80)).await;

    for _ in 0..2 {
        assert_eq!(
            client.fetch_directions(hq(), to, RoutingProfile::Car).await.unwrap_err(),
            MapError::Empty
        );
        assert_eq!(breaker.state(), BreakerState::HalfOpen);
    }
}
