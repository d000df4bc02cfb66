//! Repository for the `trips` and `trip_places` tables.

use std::collections::HashMap;

use sqlx::PgPool;
use wayfarer_core::trip::{PlaceDraft, TripDraft};
use wayfarer_core::types::DbId;

use crate::models::trip::{Trip, TripPlace};

const COLUMNS: &str = "id, user_id, title, start_date, end_date, created_at";

const PLACE_COLUMNS: &str = "id, trip_id, place_id, name, address, lat, lng, visited";

/// Provides CRUD operations for trips and their embedded place lists.
pub struct TripRepo;

impl TripRepo {
    /// Insert a new trip with no places.
    pub async fn create(pool: &PgPool, user_id: DbId, input: &TripDraft) -> Result<Trip, sqlx::Error> {
        let query = format!(
            "INSERT INTO trips (user_id, title, start_date, end_date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Trip>(&query)
            .bind(user_id)
            .bind(&input.title)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_one(pool)
            .await
    }

    /// Find a trip by ID, including its places in insertion order.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Trip>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trips WHERE id = $1");
        let trip = sqlx::query_as::<_, Trip>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        let Some(mut trip) = trip else {
            return Ok(None);
        };
        trip.places = Self::list_places(pool, trip.id).await?;
        Ok(Some(trip))
    }

    /// List a user's trips by ascending start date, each with its places.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Trip>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM trips WHERE user_id = $1 ORDER BY start_date ASC, id ASC"
        );
        let mut trips = sqlx::query_as::<_, Trip>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await?;

        if trips.is_empty() {
            return Ok(trips);
        }

        let ids: Vec<DbId> = trips.iter().map(|t| t.id).collect();
        let query =
            format!("SELECT {PLACE_COLUMNS} FROM trip_places WHERE trip_id = ANY($1) ORDER BY id");
        let places = sqlx::query_as::<_, TripPlace>(&query)
            .bind(&ids)
            .fetch_all(pool)
            .await?;

        let mut by_trip: HashMap<DbId, Vec<TripPlace>> = HashMap::new();
        for place in places {
            by_trip.entry(place.trip_id).or_default().push(place);
        }
        for trip in &mut trips {
            trip.places = by_trip.remove(&trip.id).unwrap_or_default();
        }
        Ok(trips)
    }

    /// Hard-delete a trip. Places go with it via `ON DELETE CASCADE`.
    ///
    /// Returns `true` if the row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM trips WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List the places of one trip in insertion order.
    pub async fn list_places(pool: &PgPool, trip_id: DbId) -> Result<Vec<TripPlace>, sqlx::Error> {
        let query = format!("SELECT {PLACE_COLUMNS} FROM trip_places WHERE trip_id = $1 ORDER BY id");
        sqlx::query_as::<_, TripPlace>(&query)
            .bind(trip_id)
            .fetch_all(pool)
            .await
    }

    /// Append a place unless the trip already contains this `place_id`.
    ///
    /// Returns `None` on duplicate.
    pub async fn insert_place(
        pool: &PgPool,
        trip_id: DbId,
        place: &PlaceDraft,
    ) -> Result<Option<TripPlace>, sqlx::Error> {
        let query = format!(
            "INSERT INTO trip_places (trip_id, place_id, name, address, lat, lng)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT ON CONSTRAINT uq_trip_places_trip_place DO NOTHING
             RETURNING {PLACE_COLUMNS}"
        );
        sqlx::query_as::<_, TripPlace>(&query)
            .bind(trip_id)
            .bind(&place.place_id)
            .bind(&place.name)
            .bind(&place.address)
            .bind(place.lat)
            .bind(place.lng)
            .fetch_optional(pool)
            .await
    }

    /// Remove a place from a trip. Returns `true` if a row was removed.
    pub async fn delete_place(pool: &PgPool, trip_id: DbId, place_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM trip_places WHERE trip_id = $1 AND place_id = $2")
            .bind(trip_id)
            .bind(place_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
