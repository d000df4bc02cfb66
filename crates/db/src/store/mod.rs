//! Store ports.
//!
//! The API layer talks to persistence only through these traits so that
//! the same service code runs against PostgreSQL ([`PgStore`]) and the
//! in-process [`crate::MemoryStore`]. Every insert that guards a uniqueness
//! invariant is a single conditional write: it returns `None` instead of
//! racing a separate existence check.

use async_trait::async_trait;
use wayfarer_core::notification::NotificationDraft;
use wayfarer_core::trip::{PlaceDraft, TripDraft};
use wayfarer_core::types::DbId;

use crate::models::favorite::Favorite;
use crate::models::notification::Notification;
use crate::models::trip::{Trip, TripPlace};
use crate::models::user::{CreateUser, User};

mod pg;

pub use pg::PgStore;

/// Users and their embedded favorites.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user. `None` when the email is already registered.
    async fn create_user(&self, input: &CreateUser) -> Result<Option<User>, sqlx::Error>;

    async fn find_user_by_id(&self, id: DbId) -> Result<Option<User>, sqlx::Error>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error>;

    /// Favorites in the order they were added.
    async fn list_favorites(&self, user_id: DbId) -> Result<Vec<Favorite>, sqlx::Error>;

    /// Insert unless `(user_id, place_id)` exists. `None` on duplicate.
    async fn insert_favorite(
        &self,
        user_id: DbId,
        place: &PlaceDraft,
    ) -> Result<Option<Favorite>, sqlx::Error>;

    /// Remove a favorite. `false` when nothing matched.
    async fn remove_favorite(&self, user_id: DbId, place_id: &str) -> Result<bool, sqlx::Error>;
}

/// Trips and their ordered place lists.
#[async_trait]
pub trait TripStore: Send + Sync {
    async fn create_trip(&self, user_id: DbId, input: &TripDraft) -> Result<Trip, sqlx::Error>;

    /// A trip with its places, regardless of owner.
    async fn find_trip(&self, id: DbId) -> Result<Option<Trip>, sqlx::Error>;

    /// A user's trips ordered by ascending start date.
    async fn list_trips(&self, user_id: DbId) -> Result<Vec<Trip>, sqlx::Error>;

    async fn delete_trip(&self, id: DbId) -> Result<bool, sqlx::Error>;

    /// Append unless `(trip_id, place_id)` exists. `None` on duplicate.
    async fn insert_trip_place(
        &self,
        trip_id: DbId,
        place: &PlaceDraft,
    ) -> Result<Option<TripPlace>, sqlx::Error>;

    async fn remove_trip_place(&self, trip_id: DbId, place_id: &str) -> Result<bool, sqlx::Error>;
}

/// Per-user notification log.
#[async_trait]
pub trait NotificationStore: Send + Sync {
    async fn create_notification(
        &self,
        input: &NotificationDraft,
    ) -> Result<Notification, sqlx::Error>;

    /// At most `limit` notifications, newest first.
    async fn list_notifications(
        &self,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<Notification>, sqlx::Error>;

    async fn find_notification(&self, id: DbId) -> Result<Option<Notification>, sqlx::Error>;

    async fn mark_notification_read(&self, id: DbId) -> Result<Option<Notification>, sqlx::Error>;

    /// Returns how many notifications flipped to read.
    async fn mark_all_notifications_read(&self, user_id: DbId) -> Result<u64, sqlx::Error>;

    async fn delete_notification(&self, id: DbId) -> Result<bool, sqlx::Error>;

    async fn unread_notification_count(&self, user_id: DbId) -> Result<i64, sqlx::Error>;
}

/// Everything the API needs from persistence.
#[async_trait]
pub trait Store: UserStore + TripStore + NotificationStore {
    /// Confirm the backing store is reachable.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}
