//! Favorite place model.

use serde::Serialize;
use sqlx::FromRow;
use wayfarer_core::trip::PlaceDraft;
use wayfarer_core::types::{DbId, Timestamp};

/// A row from the `favorites` table. Unique per `(user_id, place_id)`.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    #[serde(skip_serializing)]
    pub id: DbId,
    #[serde(skip_serializing)]
    pub user_id: DbId,
    pub place_id: String,
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub created_at: Timestamp,
}

impl Favorite {
    pub fn from_draft(id: DbId, user_id: DbId, place: &PlaceDraft, created_at: Timestamp) -> Self {
        Self {
            id,
            user_id,
            place_id: place.place_id.clone(),
            name: place.name.clone(),
            address: place.address.clone(),
            lat: place.lat,
            lng: place.lng,
            created_at,
        }
    }
}
