//! PostgreSQL adapter for the store ports, delegating to the repositories.

use async_trait::async_trait;
use wayfarer_core::notification::NotificationDraft;
use wayfarer_core::trip::{PlaceDraft, TripDraft};
use wayfarer_core::types::DbId;

use super::{NotificationStore, Store, TripStore, UserStore};
use crate::models::favorite::Favorite;
use crate::models::notification::Notification;
use crate::models::trip::{Trip, TripPlace};
use crate::models::user::{CreateUser, User};
use crate::repositories::{FavoriteRepo, NotificationRepo, TripRepo, UserRepo};
use crate::DbPool;

/// Store backed by a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn create_user(&self, input: &CreateUser) -> Result<Option<User>, sqlx::Error> {
        UserRepo::create(&self.pool, input).await
    }

    async fn find_user_by_id(&self, id: DbId) -> Result<Option<User>, sqlx::Error> {
        UserRepo::find_by_id(&self.pool, id).await
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        UserRepo::find_by_email(&self.pool, email).await
    }

    async fn list_favorites(&self, user_id: DbId) -> Result<Vec<Favorite>, sqlx::Error> {
        FavoriteRepo::list_for_user(&self.pool, user_id).await
    }

    async fn insert_favorite(
        &self,
        user_id: DbId,
        place: &PlaceDraft,
    ) -> Result<Option<Favorite>, sqlx::Error> {
        FavoriteRepo::insert(&self.pool, user_id, place).await
    }

    async fn remove_favorite(&self, user_id: DbId, place_id: &str) -> Result<bool, sqlx::Error> {
        FavoriteRepo::delete(&self.pool, user_id, place_id).await
    }
}

#[async_trait]
impl TripStore for PgStore {
    async fn create_trip(&self, user_id: DbId, input: &TripDraft) -> Result<Trip, sqlx::Error> {
        TripRepo::create(&self.pool, user_id, input).await
    }

    async fn find_trip(&self, id: DbId) -> Result<Option<Trip>, sqlx::Error> {
        TripRepo::find_by_id(&self.pool, id).await
    }

    async fn list_trips(&self, user_id: DbId) -> Result<Vec<Trip>, sqlx::Error> {
        TripRepo::list_for_user(&self.pool, user_id).await
    }

    async fn delete_trip(&self, id: DbId) -> Result<bool, sqlx::Error> {
        TripRepo::delete(&self.pool, id).await
    }

    async fn insert_trip_place(
        &self,
        trip_id: DbId,
        place: &PlaceDraft,
    ) -> Result<Option<TripPlace>, sqlx::Error> {
        TripRepo::insert_place(&self.pool, trip_id, place).await
    }

    async fn remove_trip_place(&self, trip_id: DbId, place_id: &str) -> Result<bool, sqlx::Error> {
        TripRepo::delete_place(&self.pool, trip_id, place_id).await
    }
}

#[async_trait]
impl NotificationStore for PgStore {
    async fn create_notification(
        &self,
        input: &NotificationDraft,
    ) -> Result<Notification, sqlx::Error> {
        NotificationRepo::create(&self.pool, input).await
    }

    async fn list_notifications(
        &self,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        NotificationRepo::list_for_user(&self.pool, user_id, limit).await
    }

    async fn find_notification(&self, id: DbId) -> Result<Option<Notification>, sqlx::Error> {
        NotificationRepo::find_by_id(&self.pool, id).await
    }

    async fn mark_notification_read(&self, id: DbId) -> Result<Option<Notification>, sqlx::Error> {
        NotificationRepo::mark_read(&self.pool, id).await
    }

    async fn mark_all_notifications_read(&self, user_id: DbId) -> Result<u64, sqlx::Error> {
        NotificationRepo::mark_all_read(&self.pool, user_id).await
    }

    async fn delete_notification(&self, id: DbId) -> Result<bool, sqlx::Error> {
        NotificationRepo::delete(&self.pool, id).await
    }

    async fn unread_notification_count(&self, user_id: DbId) -> Result<i64, sqlx::Error> {
        NotificationRepo::unread_count(&self.pool, user_id).await
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
