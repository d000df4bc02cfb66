//! Handlers for the `/trips` resource.
//!
//! All endpoints require authentication via [`AuthUser`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use wayfarer_core::trip::validate_trip_fields;
use wayfarer_core::types::DbId;
use wayfarer_db::models::trip::Trip;

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::handlers::PlaceRequest;
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::services::TripService;
use crate::state::AppState;

/// Request body for `POST /trips`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTripRequest {
    pub title: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// POST /api/trips
pub async fn create_trip(
    auth: AuthUser,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateTripRequest>,
) -> AppResult<(StatusCode, Json<Trip>)> {
    let draft = validate_trip_fields(
        input.title.as_deref(),
        input.start_date.as_deref(),
        input.end_date.as_deref(),
    )?;
    let trip = TripService::create(state.store.as_ref(), auth.user_id, draft).await?;
    Ok((StatusCode::CREATED, Json(trip)))
}

/// GET /api/trips
pub async fn list_trips(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Trip>>> {
    let trips = TripService::list(state.store.as_ref(), auth.user_id).await?;
    Ok(Json(trips))
}

/// GET /api/trips/{id}
pub async fn get_trip(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
) -> AppResult<Json<Trip>> {
    let trip = TripService::get(state.store.as_ref(), auth.user_id, trip_id).await?;
    Ok(Json(trip))
}

/// DELETE /api/trips/{id}
pub async fn delete_trip(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    TripService::delete(state.store.as_ref(), auth.user_id, trip_id).await?;
    Ok(Json(MessageResponse::new("Trip deleted successfully")))
}

/// POST /api/trips/{id}/add
pub async fn add_place(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
    JsonBody(input): JsonBody<PlaceRequest>,
) -> AppResult<Json<Trip>> {
    let place = input.into_draft()?;
    let trip = TripService::add_place(state.store.as_ref(), auth.user_id, trip_id, &place).await?;
    Ok(Json(trip))
}

/// DELETE /api/trips/{id}/place/{place_id}
pub async fn remove_place(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((trip_id, place_id)): Path<(DbId, String)>,
) -> AppResult<Json<Trip>> {
    let trip =
        TripService::remove_place(state.store.as_ref(), auth.user_id, trip_id, &place_id).await?;
    Ok(Json(trip))
}
