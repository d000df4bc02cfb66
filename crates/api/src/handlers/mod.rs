//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers parse and validate input, delegate to [`crate::services`], and
//! map errors via [`crate::error::AppError`].

pub mod ai;
pub mod auth;
pub mod favorites;
pub mod health;
pub mod notifications;
pub mod trips;
pub mod weather;

use serde::Deserialize;
use wayfarer_core::error::CoreError;
use wayfarer_core::trip::{validate_place_fields, PlaceDraft};

/// Request body shared by `POST /favorites` and `POST /trips/{id}/add`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceRequest {
    pub place_id: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl PlaceRequest {
    pub fn into_draft(self) -> Result<PlaceDraft, CoreError> {
        validate_place_fields(
            self.place_id.as_deref(),
            self.name.as_deref(),
            self.address.as_deref(),
            self.lat,
            self.lng,
        )
    }
}
