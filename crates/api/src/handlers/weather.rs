//! Handler for the public weather passthrough.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use wayfarer_core::error::CoreError;

use crate::error::AppResult;
use crate::state::AppState;

const MISSING_COORDINATES: &str = "Latitude and Longitude required";

/// Query parameters for `GET /weather`. Kept as text so malformed values
/// get the same 400 as missing ones.
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub lat: Option<String>,
    pub lng: Option<String>,
}

fn coordinate(raw: Option<&str>) -> Option<f64> {
    raw?.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// GET /api/weather?lat=..&lng=..
///
/// Returns the provider's current-weather JSON unchanged.
pub async fn current_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let (Some(lat), Some(lng)) = (
        coordinate(query.lat.as_deref()),
        coordinate(query.lng.as_deref()),
    ) else {
        return Err(CoreError::Validation(MISSING_COORDINATES.into()).into());
    };

    let weather = state
        .weather
        .current(lat, lng)
        .await
        .map_err(|e| CoreError::Upstream {
            message: "Error fetching weather data",
            detail: e.to_string(),
        })?;
    Ok(Json(weather))
}
