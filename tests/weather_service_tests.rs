//! Integration tests for the weather service against mocked Nominatim and
//! Open-Meteo endpoints.

use chrono::{DateTime, Utc};
use cityweather::clients::{NominatimClient, OpenMeteoClient};
use cityweather::services::{OpenMeteoWeatherService, WeatherError};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::sync::Arc;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service(server: &MockServer) -> OpenMeteoWeatherService {
    service_with_window(server, 12)
}

fn service_with_window(server: &MockServer, window_hours: u32) -> OpenMeteoWeatherService {
    let http = reqwest::Client::new();
    OpenMeteoWeatherService::new(
        Arc::new(NominatimClient::with_shared_client(
            http.clone(),
            format!("{}/search", server.uri()),
        )),
        Arc::new(OpenMeteoClient::with_shared_client(
            http,
            format!("{}/v1/forecast", server.uri()),
        )),
        window_hours,
    )
}

fn new_year() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

async fn mount_geocode(server: &MockServer, city: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", city))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_forecast(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("hourly", "temperature_2m"))
        .and(query_param("current_weather", "true"))
        .and(query_param("timezone", "auto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn moscow_place() -> serde_json::Value {
    serde_json::json!([
        { "lat": "55.75", "lon": "37.62", "display_name": "Москва, Россия" },
        { "lat": "46.73", "lon": "-117.0", "display_name": "Moscow, Idaho" }
    ])
}

#[tokio::test]
async fn test_lookup_builds_windowed_report() {
    let server = MockServer::start().await;
    mount_geocode(&server, "Moscow", moscow_place()).await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "55.75"))
        .and(query_param("longitude", "37.62"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "timezone": "UTC",
            "current_weather": { "temperature": 5.0, "windspeed": 3.2, "weathercode": 61 },
            "hourly": {
                "time": ["2024-01-01T00:00", "2024-01-01T06:00", "2024-01-02T00:00"],
                "temperature_2m": [5.0, 7.0, 9.0]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let report = service(&server)
        .lookup_at("Moscow", new_year())
        .await
        .unwrap();

    assert_eq!(report.city, "Moscow");
    assert_eq!(report.timezone, "UTC");
    assert!(report.message.is_empty());

    let times: Vec<&str> = report.forecast.iter().map(|e| e.time.as_str()).collect();
    assert_eq!(times, vec!["2024-01-01 00:00", "2024-01-01 06:00"]);
    assert_eq!(report.forecast[1].temperature, Some(7.0));

    assert_eq!(
        report.current_weather.weather_description.as_deref(),
        Some("Лёгкий дождь")
    );
}

#[tokio::test]
async fn test_lookup_in_local_timezone() {
    let server = MockServer::start().await;
    mount_geocode(&server, "Moscow", moscow_place()).await;
    mount_forecast(
        &server,
        serde_json::json!({
            "timezone": "Europe/Moscow",
            "current_weather": { "temperature": -8.0 },
            "hourly": {
                "time": ["2024-01-01T02:00", "2024-01-01T03:00", "2024-01-01T16:00"],
                "temperature_2m": [-9.0, -8.0, -3.0]
            }
        }),
    )
    .await;

    let report = service(&server)
        .lookup_at("Moscow", new_year())
        .await
        .unwrap();

    assert_eq!(report.timezone, "Europe/Moscow");
    let times: Vec<&str> = report.forecast.iter().map(|e| e.time.as_str()).collect();
    assert_eq!(times, vec!["2024-01-01 03:00"]);
    assert!(report.current_weather.weather_description.is_none());
}

#[tokio::test]
async fn test_missing_timezone_defaults_to_utc() {
    let server = MockServer::start().await;
    mount_geocode(&server, "Moscow", moscow_place()).await;
    mount_forecast(
        &server,
        serde_json::json!({
            "hourly": {
                "time": ["2024-01-01T01:00"],
                "temperature_2m": [1.5]
            }
        }),
    )
    .await;

    let report = service(&server)
        .lookup_at("Moscow", new_year())
        .await
        .unwrap();

    assert_eq!(report.timezone, "UTC");
    assert_eq!(report.forecast.len(), 1);
    assert_eq!(report.current_weather, Default::default());
}

#[tokio::test]
async fn test_empty_window_sets_message() {
    let server = MockServer::start().await;
    mount_geocode(&server, "Moscow", moscow_place()).await;
    mount_forecast(
        &server,
        serde_json::json!({
            "timezone": "UTC",
            "hourly": {
                "time": ["2023-12-30T00:00", "2023-12-30T01:00"],
                "temperature_2m": [1.0, 2.0]
            }
        }),
    )
    .await;

    let report = service(&server)
        .lookup_at("Moscow", new_year())
        .await
        .unwrap();

    assert!(report.forecast.is_empty());
    assert_eq!(
        report.message,
        "Данные прогноза на ближайшие 12 часов отсутствуют"
    );
}

#[tokio::test]
async fn test_unknown_city_skips_forecast() {
    let server = MockServer::start().await;
    mount_geocode(&server, "Atlantis", serde_json::json!([])).await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = service(&server)
        .lookup_at("Atlantis", new_year())
        .await
        .unwrap_err();

    assert!(matches!(err, WeatherError::NotFound(city) if city == "Atlantis"));
}

#[tokio::test]
async fn test_geocoder_outage_is_upstream_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = service(&server)
        .lookup_at("Moscow", new_year())
        .await
        .unwrap_err();

    assert!(matches!(err, WeatherError::Upstream(_)));
}

#[tokio::test]
async fn test_malformed_forecast_is_upstream_failure() {
    let server = MockServer::start().await;
    mount_geocode(&server, "Moscow", moscow_place()).await;
    mount_forecast(&server, serde_json::json!({ "timezone": "UTC" })).await;

    let err = service(&server)
        .lookup_at("Moscow", new_year())
        .await
        .unwrap_err();

    assert!(matches!(err, WeatherError::Upstream(_)));
}

#[tokio::test]
async fn test_unknown_timezone_is_upstream_failure() {
    let server = MockServer::start().await;
    mount_geocode(&server, "Moscow", moscow_place()).await;
    mount_forecast(
        &server,
        serde_json::json!({
            "timezone": "Nowhere/Special",
            "hourly": { "time": [], "temperature_2m": [] }
        }),
    )
    .await;

    let err = service(&server)
        .lookup_at("Moscow", new_year())
        .await
        .unwrap_err();

    assert!(matches!(err, WeatherError::Upstream(msg) if msg.contains("Nowhere/Special")));
}

#[tokio::test]
async fn test_shorter_window_changes_message() {
    let server = MockServer::start().await;
    mount_geocode(&server, "Moscow", moscow_place()).await;
    mount_forecast(
        &server,
        serde_json::json!({
            "timezone": "UTC",
            "hourly": {
                "time": ["2024-01-01T08:00"],
                "temperature_2m": [3.0]
            }
        }),
    )
    .await;

    let report = service_with_window(&server, 6)
        .lookup_at("Moscow", new_year())
        .await
        .unwrap();

    assert!(report.forecast.is_empty());
    assert_eq!(report.window_hours, 6);
    assert_eq!(
        report.message,
        "Данные прогноза на ближайшие 6 часов отсутствуют"
    );
}

#[tokio::test]
async fn test_lookup_outcomes_are_counted() {
    let recorder = PrometheusBuilder::new().build_recorder();
    let handle = recorder.handle();
    let _guard = metrics::set_default_local_recorder(&recorder);

    let server = MockServer::start().await;
    mount_geocode(&server, "Moscow", moscow_place()).await;
    mount_geocode(&server, "Atlantis", serde_json::json!([])).await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let weather = service(&server);
    assert!(weather.lookup_at("Moscow", new_year()).await.is_err());
    assert!(weather.lookup_at("Atlantis", new_year()).await.is_err());

    let rendered = handle.render();
    assert!(
        rendered.contains(r#"weather_lookups_total{outcome="upstream_error"} 1"#),
        "{rendered}"
    );
    assert!(
        rendered.contains(r#"weather_lookups_total{outcome="not_found"} 1"#),
        "{rendered}"
    );
}
