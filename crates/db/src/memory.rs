//! In-process store used when no `DATABASE_URL` is configured and by the
//! HTTP test suites.
//!
//! All state sits behind one [`RwLock`], so every conditional insert holds
//! the write lock across its duplicate check and its write.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use wayfarer_core::notification::NotificationDraft;
use wayfarer_core::trip::{PlaceDraft, TripDraft};
use wayfarer_core::types::DbId;

use crate::models::favorite::Favorite;
use crate::models::notification::Notification;
use crate::models::trip::{Trip, TripPlace};
use crate::models::user::{CreateUser, User};
use crate::store::{NotificationStore, Store, TripStore, UserStore};

#[derive(Default)]
struct State {
    last_id: DbId,
    users: Vec<User>,
    favorites: Vec<Favorite>,
    trips: Vec<Trip>,
    notifications: Vec<Notification>,
}

impl State {
    fn next_id(&mut self) -> DbId {
        self.last_id += 1;
        self.last_id
    }
}

/// Volatile store holding everything in memory.
#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<State>,
    notifications_unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every notification write fail with a pool timeout, simulating
    /// an unavailable notification table.
    pub fn set_notifications_unavailable(&self, unavailable: bool) {
        self.notifications_unavailable
            .store(unavailable, Ordering::SeqCst);
    }

    fn check_notifications_available(&self) -> Result<(), sqlx::Error> {
        if self.notifications_unavailable.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, input: &CreateUser) -> Result<Option<User>, sqlx::Error> {
        let mut state = self.state.write().await;
        if state.users.iter().any(|u| u.email == input.email) {
            return Ok(None);
        }
        let user = User {
            id: state.next_id(),
            name: input.name.clone(),
            email: input.email.clone(),
            password_hash: input.password_hash.clone(),
            created_at: Utc::now(),
        };
        state.users.push(user.clone());
        Ok(Some(user))
    }

    async fn find_user_by_id(&self, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let state = self.state.read().await;
        Ok(state.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        let state = self.state.read().await;
        Ok(state.users.iter().find(|u| u.email == email).cloned())
    }

    async fn list_favorites(&self, user_id: DbId) -> Result<Vec<Favorite>, sqlx::Error> {
        let state = self.state.read().await;
        Ok(state
            .favorites
            .iter()
            .filter(|f| f.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn insert_favorite(
        &self,
        user_id: DbId,
        place: &PlaceDraft,
    ) -> Result<Option<Favorite>, sqlx::Error> {
        let mut state = self.state.write().await;
        let duplicate = state
            .favorites
            .iter()
            .any(|f| f.user_id == user_id && f.place_id == place.place_id);
        if duplicate {
            return Ok(None);
        }
        let id = state.next_id();
        let favorite = Favorite::from_draft(id, user_id, place, Utc::now());
        state.favorites.push(favorite.clone());
        Ok(Some(favorite))
    }

    async fn remove_favorite(&self, user_id: DbId, place_id: &str) -> Result<bool, sqlx::Error> {
        let mut state = self.state.write().await;
        let before = state.favorites.len();
        state
            .favorites
            .retain(|f| !(f.user_id == user_id && f.place_id == place_id));
        Ok(state.favorites.len() != before)
    }
}

#[async_trait]
impl TripStore for MemoryStore {
    async fn create_trip(&self, user_id: DbId, input: &TripDraft) -> Result<Trip, sqlx::Error> {
        let mut state = self.state.write().await;
        let trip = Trip {
            id: state.next_id(),
            user_id,
            title: input.title.clone(),
            start_date: input.start_date,
            end_date: input.end_date,
            places: Vec::new(),
            created_at: Utc::now(),
        };
        state.trips.push(trip.clone());
        Ok(trip)
    }

    async fn find_trip(&self, id: DbId) -> Result<Option<Trip>, sqlx::Error> {
        let state = self.state.read().await;
        Ok(state.trips.iter().find(|t| t.id == id).cloned())
    }

    async fn list_trips(&self, user_id: DbId) -> Result<Vec<Trip>, sqlx::Error> {
        let state = self.state.read().await;
        let mut trips: Vec<Trip> = state
            .trips
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        trips.sort_by_key(|t| (t.start_date, t.id));
        Ok(trips)
    }

    async fn delete_trip(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let mut state = self.state.write().await;
        let before = state.trips.len();
        state.trips.retain(|t| t.id != id);
        Ok(state.trips.len() != before)
    }

    async fn insert_trip_place(
        &self,
        trip_id: DbId,
        place: &PlaceDraft,
    ) -> Result<Option<TripPlace>, sqlx::Error> {
        let mut state = self.state.write().await;
        let id = state.next_id();
        let Some(trip) = state.trips.iter_mut().find(|t| t.id == trip_id) else {
            return Err(sqlx::Error::RowNotFound);
        };
        if trip.places.iter().any(|p| p.place_id == place.place_id) {
            return Ok(None);
        }
        let entry = TripPlace::from_draft(id, trip_id, place);
        trip.places.push(entry.clone());
        Ok(Some(entry))
    }

    async fn remove_trip_place(&self, trip_id: DbId, place_id: &str) -> Result<bool, sqlx::Error> {
        let mut state = self.state.write().await;
        let Some(trip) = state.trips.iter_mut().find(|t| t.id == trip_id) else {
            return Ok(false);
        };
        let before = trip.places.len();
        trip.places.retain(|p| p.place_id != place_id);
        Ok(trip.places.len() != before)
    }
}

#[async_trait]
impl NotificationStore for MemoryStore {
    async fn create_notification(
        &self,
        input: &NotificationDraft,
    ) -> Result<Notification, sqlx::Error> {
        self.check_notifications_available()?;
        let mut state = self.state.write().await;
        let notification = Notification {
            id: state.next_id(),
            user_id: input.user_id,
            title: input.title.clone(),
            message: input.message.clone(),
            category: input.category,
            is_read: false,
            link: input.link.clone(),
            created_at: Utc::now(),
        };
        state.notifications.push(notification.clone());
        Ok(notification)
    }

    async fn list_notifications(
        &self,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let state = self.state.read().await;
        let mut items: Vec<Notification> = state
            .notifications
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        items.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(items)
    }

    async fn find_notification(&self, id: DbId) -> Result<Option<Notification>, sqlx::Error> {
        let state = self.state.read().await;
        Ok(state.notifications.iter().find(|n| n.id == id).cloned())
    }

    async fn mark_notification_read(&self, id: DbId) -> Result<Option<Notification>, sqlx::Error> {
        self.check_notifications_available()?;
        let mut state = self.state.write().await;
        Ok(state
            .notifications
            .iter_mut()
            .find(|n| n.id == id)
            .map(|n| {
                n.is_read = true;
                n.clone()
            }))
    }

    async fn mark_all_notifications_read(&self, user_id: DbId) -> Result<u64, sqlx::Error> {
        self.check_notifications_available()?;
        let mut state = self.state.write().await;
        let mut marked = 0;
        for n in state
            .notifications
            .iter_mut()
            .filter(|n| n.user_id == user_id && !n.is_read)
        {
            n.is_read = true;
            marked += 1;
        }
        Ok(marked)
    }

    async fn delete_notification(&self, id: DbId) -> Result<bool, sqlx::Error> {
        self.check_notifications_available()?;
        let mut state = self.state.write().await;
        let before = state.notifications.len();
        state.notifications.retain(|n| n.id != id);
        Ok(state.notifications.len() != before)
    }

    async fn unread_notification_count(&self, user_id: DbId) -> Result<i64, sqlx::Error> {
        let state = self.state.read().await;
        let count = state
            .notifications
            .iter()
            .filter(|n| n.user_id == user_id && !n.is_read)
            .count();
        Ok(i64::try_from(count).unwrap_or(i64::MAX))
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}
