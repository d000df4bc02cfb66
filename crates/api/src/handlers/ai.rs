//! Handlers for the `/ai` resource: itinerary preview and import.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use wayfarer_core::itinerary::{GeneratedPlace, ItineraryRequest};
use wayfarer_core::trip::parse_trip_date;

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::middleware::auth::AuthUser;
use crate::services::{ImportOutcome, ItineraryService};
use crate::state::AppState;

/// `days` as sent by clients: a JSON number or a numeric string from a form.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DaysInput {
    Number(i64),
    Text(String),
}

impl DaysInput {
    fn value(&self) -> Option<i64> {
        match self {
            DaysInput::Number(n) => Some(*n),
            DaysInput::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Request body for `POST /ai/generate`.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub destination: Option<String>,
    pub days: Option<DaysInput>,
    pub vibe: Option<String>,
}

/// Request body for `POST /ai/import`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRequest {
    pub destination: Option<String>,
    pub days: Option<DaysInput>,
    pub vibe: Option<String>,
    /// Defaults to today (UTC).
    pub start_date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub title: String,
    pub places: Vec<GeneratedPlace>,
}

fn itinerary_request(
    state: &AppState,
    destination: Option<&str>,
    days: Option<&DaysInput>,
    vibe: Option<&str>,
) -> AppResult<ItineraryRequest> {
    Ok(ItineraryRequest::new(
        destination,
        days.and_then(DaysInput::value),
        vibe,
        state.config.ai_max_days,
    )?)
}

/// POST /api/ai/generate
///
/// Preview only; nothing is persisted.
pub async fn generate(
    _auth: AuthUser,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<GenerateRequest>,
) -> AppResult<Json<GenerateResponse>> {
    let request = itinerary_request(
        &state,
        input.destination.as_deref(),
        input.days.as_ref(),
        input.vibe.as_deref(),
    )?;
    let places = ItineraryService::generate(state.generator.as_ref(), &request).await?;
    Ok(Json(GenerateResponse {
        title: request.title(),
        places,
    }))
}

/// POST /api/ai/import
pub async fn import(
    auth: AuthUser,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ImportRequest>,
) -> AppResult<(StatusCode, Json<ImportOutcome>)> {
    let request = itinerary_request(
        &state,
        input.destination.as_deref(),
        input.days.as_ref(),
        input.vibe.as_deref(),
    )?;
    let start_date = match input.start_date.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => parse_trip_date("startDate", raw)?,
        _ => Utc::now().date_naive(),
    };

    let outcome = ItineraryService::import(
        state.store.as_ref(),
        state.generator.as_ref(),
        auth.user_id,
        &request,
        start_date,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(outcome)))
}
