//! Repository for the `favorites` table.

use sqlx::PgPool;
use wayfarer_core::trip::PlaceDraft;
use wayfarer_core::types::DbId;

use crate::models::favorite::Favorite;

const COLUMNS: &str = "id, user_id, place_id, name, address, lat, lng, created_at";

/// Provides favorite list operations for a single user.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// List a user's favorites in the order they were added.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Favorite>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM favorites WHERE user_id = $1 ORDER BY id");
        sqlx::query_as::<_, Favorite>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a favorite unless the user already saved this place.
    ///
    /// The unique constraint makes the duplicate check and the write a
    /// single statement. Returns `None` on duplicate.
    pub async fn insert(
        pool: &PgPool,
        user_id: DbId,
        place: &PlaceDraft,
    ) -> Result<Option<Favorite>, sqlx::Error> {
        let query = format!(
            "INSERT INTO favorites (user_id, place_id, name, address, lat, lng)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT ON CONSTRAINT uq_favorites_user_place DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Favorite>(&query)
            .bind(user_id)
            .bind(&place.place_id)
            .bind(&place.name)
            .bind(&place.address)
            .bind(place.lat)
            .bind(place.lng)
            .fetch_optional(pool)
            .await
    }

    /// Delete a favorite. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, user_id: DbId, place_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND place_id = $2")
            .bind(user_id)
            .bind(place_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
