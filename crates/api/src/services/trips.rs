//! Trip lifecycle and place lists.
//!
//! Every operation on an existing trip goes through an owner check. Reads,
//! deletes and place removal reject strangers with 403; appending a place
//! rejects them with 401.

use wayfarer_core::error::CoreError;
use wayfarer_core::notification::NotificationDraft;
use wayfarer_core::ownership::{ensure_owner, OwnerMismatch};
use wayfarer_core::trip::{PlaceDraft, TripDraft};
use wayfarer_core::types::DbId;
use wayfarer_db::models::trip::Trip;
use wayfarer_db::Store;

use crate::error::AppResult;
use crate::services::NotificationService;

pub const PLACE_ALREADY_IN_TRIP: &str = "Place already in this trip";

pub struct TripService;

impl TripService {
    pub async fn create(store: &dyn Store, user_id: DbId, draft: TripDraft) -> AppResult<Trip> {
        let trip = store.create_trip(user_id, &draft).await?;
        tracing::info!(user_id, trip_id = trip.id, "Trip created");

        NotificationService::emit(
            store,
            NotificationDraft::trip_created(user_id, trip.id, &trip.title),
        )
        .await;
        Ok(trip)
    }

    /// The user's trips by ascending start date.
    pub async fn list(store: &dyn Store, user_id: DbId) -> AppResult<Vec<Trip>> {
        Ok(store.list_trips(user_id).await?)
    }

    pub async fn get(store: &dyn Store, user_id: DbId, trip_id: DbId) -> AppResult<Trip> {
        let trip = load(store, trip_id).await?;
        ensure_owner("Trip", trip.user_id, user_id, OwnerMismatch::Forbidden)?;
        Ok(trip)
    }

    pub async fn delete(store: &dyn Store, user_id: DbId, trip_id: DbId) -> AppResult<()> {
        Self::get(store, user_id, trip_id).await?;
        if !store.delete_trip(trip_id).await? {
            return Err(not_found(trip_id).into());
        }
        tracing::info!(user_id, trip_id, "Trip deleted");
        Ok(())
    }

    /// Append a place. A `place_id` already in the trip is a conflict.
    pub async fn add_place(
        store: &dyn Store,
        user_id: DbId,
        trip_id: DbId,
        place: &PlaceDraft,
    ) -> AppResult<Trip> {
        let trip = load(store, trip_id).await?;
        ensure_owner("Trip", trip.user_id, user_id, OwnerMismatch::Unauthorized)?;

        if store.insert_trip_place(trip_id, place).await?.is_none() {
            return Err(CoreError::Conflict(PLACE_ALREADY_IN_TRIP.to_string()).into());
        }
        tracing::info!(user_id, trip_id, place_id = %place.place_id, "Place added to trip");

        NotificationService::emit(
            store,
            NotificationDraft::place_added(user_id, trip_id, &trip.title, &place.name),
        )
        .await;
        load(store, trip_id).await
    }

    /// Remove a place if present. Removing an absent place is a no-op.
    pub async fn remove_place(
        store: &dyn Store,
        user_id: DbId,
        trip_id: DbId,
        place_id: &str,
    ) -> AppResult<Trip> {
        Self::get(store, user_id, trip_id).await?;
        if store.remove_trip_place(trip_id, place_id).await? {
            tracing::info!(user_id, trip_id, place_id, "Place removed from trip");
        }
        load(store, trip_id).await
    }
}

async fn load(store: &dyn Store, trip_id: DbId) -> AppResult<Trip> {
    store
        .find_trip(trip_id)
        .await?
        .ok_or_else(|| not_found(trip_id).into())
}

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound { entity: "Trip", id }
}
