//! HTTP-level integration tests for `/api/weather`.

mod common;

use std::sync::atomic::Ordering;

use axum::http::StatusCode;
use common::{body_json, TestApp};

#[tokio::test]
async fn test_weather_passes_provider_json_through() {
    let app = TestApp::new();

    let response = app.get("/api/weather?lat=6.9271&lng=79.8612", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["coord"]["lat"], 6.9271);
    assert_eq!(json["coord"]["lon"], 79.8612);
    assert_eq!(json["main"]["temp"], 29.5);
}

#[tokio::test]
async fn test_weather_requires_coordinates() {
    let app = TestApp::new();

    for uri in [
        "/api/weather",
        "/api/weather?lat=6.9",
        "/api/weather?lat=north&lng=79.8",
    ] {
        let response = app.get(uri, None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(
            body_json(response).await["message"],
            "Latitude and Longitude required"
        );
    }
    assert_eq!(app.weather.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_weather_provider_failure_is_500() {
    let app = TestApp::builder().weather_available(false).build();

    let response = app.get("/api/weather?lat=6.9&lng=79.8", None).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Error fetching weather data");
    assert!(!json.to_string().contains("invalid api key"));
}
