//! HTTP-level tests for the Open-Meteo provider and the full trigger cycle.

use forecast_core::{
    Coordinates, FetchError, ForecastApp, ForecastProvider, MemorySurface, OpenMeteoProvider,
    Surface, TriggerOutcome,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A realistic five-day response, including the keys we ignore.
fn five_day_body() -> serde_json::Value {
    serde_json::json!({
        "latitude": 52.52,
        "longitude": 13.419998,
        "generationtime_ms": 0.05,
        "utc_offset_seconds": 3600,
        "timezone": "Europe/Berlin",
        "timezone_abbreviation": "CET",
        "elevation": 38.0,
        "daily_units": {
            "time": "iso8601",
            "weathercode": "wmo code",
            "temperature_2m_max": "°C",
            "temperature_2m_min": "°C",
            "precipitation_sum": "mm",
            "windspeed_10m_max": "km/h"
        },
        "daily": {
            "time": ["2024-03-14", "2024-03-15", "2024-03-16", "2024-03-17", "2024-03-18"],
            "weathercode": [3, 61, 80, 0, 95],
            "temperature_2m_max": [14.4, 14.5, 9.8, 12.1, 16.0],
            "temperature_2m_min": [4.2, 6.5, 3.3, 1.9, 7.4],
            "precipitation_sum": [0.0, 2.3, 5.6, 0.0, 11.2],
            "windspeed_10m_max": [12.2, 18.5, 25.9, 9.4, 30.1]
        }
    })
}

fn berlin() -> Coordinates {
    Coordinates::parse("52.52", "13.41").unwrap()
}

async fn mount_forecast(server: &MockServer, response: ResponseTemplate, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("latitude", "52.52"))
        .and(query_param("longitude", "13.41"))
        .and(query_param(
            "daily",
            "weathercode,temperature_2m_max,temperature_2m_min,precipitation_sum,windspeed_10m_max",
        ))
        .and(query_param("timezone", "auto"))
        .and(query_param("forecast_days", "5"))
        .respond_with(response)
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn provider_fetches_and_parses_daily_series() {
    let server = MockServer::start().await;
    mount_forecast(&server, ResponseTemplate::new(200).set_body_json(five_day_body()), 1).await;

    let provider = OpenMeteoProvider::new(server.uri());
    let forecast = provider.daily_forecast(&berlin()).await.unwrap();

    assert_eq!(forecast.len(), 5);
    assert_eq!(forecast.weather_code, vec![3, 61, 80, 0, 95]);
    assert_eq!(forecast.precipitation_sum[1], 2.3);
}

#[tokio::test]
async fn non_success_status_is_a_fetch_error() {
    let server = MockServer::start().await;
    mount_forecast(
        &server,
        ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": true,
            "reason": "Latitude must be in range of -90 to 90°."
        })),
        1,
    )
    .await;

    let err = OpenMeteoProvider::new(server.uri())
        .daily_forecast(&berlin())
        .await
        .unwrap_err();

    match err {
        FetchError::Status { status, body } => {
            assert_eq!(status.as_u16(), 400);
            assert!(body.contains("Latitude must be in range"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    mount_forecast(&server, ResponseTemplate::new(200).set_body_string("<html>"), 1).await;

    let err = OpenMeteoProvider::new(server.uri())
        .daily_forecast(&berlin())
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn uneven_series_are_rejected() {
    let mut body = five_day_body();
    body["daily"]["temperature_2m_min"] = serde_json::json!([4.2, 6.5]);

    let server = MockServer::start().await;
    mount_forecast(&server, ResponseTemplate::new(200).set_body_json(body), 1).await;

    let err = OpenMeteoProvider::new(server.uri())
        .daily_forecast(&berlin())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        FetchError::Shape {
            field: "temperature_2m_min",
            expected: 5,
            actual: 2
        }
    ));
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    // Nothing listens on port 1.
    let err = OpenMeteoProvider::new("http://127.0.0.1:1")
        .daily_forecast(&berlin())
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Transport(_)));
}

#[tokio::test]
async fn end_to_end_renders_five_cards() {
    let server = MockServer::start().await;
    mount_forecast(&server, ResponseTemplate::new(200).set_body_json(five_day_body()), 1).await;

    let app = ForecastApp::new(OpenMeteoProvider::new(server.uri()), MemorySurface::new());
    let outcome = app.trigger(" 52.52 ", "13.41").await;

    assert_eq!(outcome, TriggerOutcome::Rendered { days: 5 });

    let cards = app.surface().cards();
    assert_eq!(cards.len(), 5);

    let labels: Vec<&str> = cards.iter().map(|c| c.day_label.as_str()).collect();
    assert_eq!(labels, ["Today", "Fri", "Sat", "Sun", "Mon"]);

    assert_eq!(cards[0].high_c, 14);
    assert_eq!(cards[1].high_c, 15);
    assert_eq!(cards[1].description, "Light rain");
    assert!(cards[1].to_string().contains("Rain: 2.3 mm"));

    assert_eq!(app.surface().error(), None);
    assert!(!app.surface().is_loading());
    assert!(app.surface().control_enabled());
}

#[tokio::test]
async fn end_to_end_server_error_shows_retry_message() {
    let server = MockServer::start().await;
    mount_forecast(&server, ResponseTemplate::new(500), 1).await;

    let app = ForecastApp::new(OpenMeteoProvider::new(server.uri()), MemorySurface::new());
    let outcome = app.trigger("52.52", "13.41").await;

    assert_eq!(outcome, TriggerOutcome::Failed);
    assert_eq!(
        app.surface().error().as_deref(),
        Some("Unable to fetch weather data. Please try again.")
    );
    assert!(app.surface().cards().is_empty());
    assert!(!app.surface().is_loading());
    assert!(app.surface().control_enabled());
}

#[tokio::test]
async fn end_to_end_empty_input_makes_no_request() {
    let server = MockServer::start().await;
    mount_forecast(&server, ResponseTemplate::new(200).set_body_json(five_day_body()), 0).await;

    let app = ForecastApp::new(OpenMeteoProvider::new(server.uri()), MemorySurface::new());

    assert_eq!(app.trigger("", "13.41").await, TriggerOutcome::Invalid);
    assert_eq!(app.trigger("52.52", "   ").await, TriggerOutcome::Invalid);
    assert_eq!(
        app.surface().error().as_deref(),
        Some("Please enter both latitude and longitude")
    );

    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}
