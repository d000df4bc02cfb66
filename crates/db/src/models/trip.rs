//! Trip and trip place models.

use serde::Serialize;
use sqlx::FromRow;
use wayfarer_core::trip::PlaceDraft;
use wayfarer_core::types::{DbId, Timestamp, TripDate};

/// A row from the `trips` table together with its ordered places.
///
/// `places` is not a column; repositories fill it from `trip_places`.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub start_date: TripDate,
    pub end_date: TripDate,
    #[sqlx(skip)]
    pub places: Vec<TripPlace>,
    pub created_at: Timestamp,
}

/// A row from the `trip_places` table. Unique per `(trip_id, place_id)`.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPlace {
    #[serde(skip_serializing)]
    pub id: DbId,
    #[serde(skip_serializing)]
    pub trip_id: DbId,
    pub place_id: String,
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub visited: bool,
}

impl TripPlace {
    pub fn from_draft(id: DbId, trip_id: DbId, place: &PlaceDraft) -> Self {
        Self {
            id,
            trip_id,
            place_id: place.place_id.clone(),
            name: place.name.clone(),
            address: place.address.clone(),
            lat: place.lat,
            lng: place.lng,
            visited: false,
        }
    }
}
