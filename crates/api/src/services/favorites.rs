//! A user's saved places.

use wayfarer_core::error::CoreError;
use wayfarer_core::notification::NotificationDraft;
use wayfarer_core::trip::PlaceDraft;
use wayfarer_core::types::DbId;
use wayfarer_db::models::favorite::Favorite;
use wayfarer_db::Store;

use crate::error::AppResult;
use crate::services::NotificationService;

pub const PLACE_ALREADY_FAVORITE: &str = "Place already in favorites";

pub struct FavoriteService;

impl FavoriteService {
    /// Favorites in the order they were added.
    pub async fn list(store: &dyn Store, user_id: DbId) -> AppResult<Vec<Favorite>> {
        ensure_user(store, user_id).await?;
        Ok(store.list_favorites(user_id).await?)
    }

    /// Save a place and return the updated list.
    pub async fn add(store: &dyn Store, user_id: DbId, place: &PlaceDraft) -> AppResult<Vec<Favorite>> {
        ensure_user(store, user_id).await?;

        if store.insert_favorite(user_id, place).await?.is_none() {
            return Err(CoreError::Conflict(PLACE_ALREADY_FAVORITE.to_string()).into());
        }
        tracing::info!(user_id, place_id = %place.place_id, "Favorite added");

        NotificationService::emit(store, NotificationDraft::favorite_added(user_id, &place.name))
            .await;
        Ok(store.list_favorites(user_id).await?)
    }

    /// Drop a place if saved and return the updated list.
    pub async fn remove(store: &dyn Store, user_id: DbId, place_id: &str) -> AppResult<Vec<Favorite>> {
        ensure_user(store, user_id).await?;
        if store.remove_favorite(user_id, place_id).await? {
            tracing::info!(user_id, place_id, "Favorite removed");
        }
        Ok(store.list_favorites(user_id).await?)
    }
}

/// Tokens outlive accounts; a removed user's token gets 404 here.
async fn ensure_user(store: &dyn Store, user_id: DbId) -> AppResult<()> {
    store
        .find_user_by_id(user_id)
        .await?
        .map(|_| ())
        .ok_or_else(|| {
            CoreError::NotFound {
                entity: "User",
                id: user_id,
            }
            .into()
        })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use assert_matches::assert_matches;
    use tokio::task::JoinSet;
    use wayfarer_core::notification::NotificationCategory;
    use wayfarer_db::models::user::CreateUser;
    use wayfarer_db::{MemoryStore, NotificationStore, UserStore};

    use super::*;
    use crate::error::AppError;

    async fn user(store: &MemoryStore) -> DbId {
        store
            .create_user(&CreateUser {
                name: "A".to_string(),
                email: "a@x.com".to_string(),
                password_hash: "hash".to_string(),
            })
            .await
            .unwrap()
            .unwrap()
            .id
    }

    fn fort(place_id: &str) -> PlaceDraft {
        PlaceDraft {
            place_id: place_id.to_string(),
            name: "Fort".to_string(),
            address: "Galle".to_string(),
            lat: 6.0268,
            lng: 80.217,
        }
    }

    #[tokio::test]
    async fn second_add_is_conflict_and_keeps_one_entry() {
        let store = MemoryStore::new();
        let id = user(&store).await;

        let list = FavoriteService::add(&store, id, &fort("p1")).await.unwrap();
        assert_eq!(list.len(), 1);

        let err = FavoriteService::add(&store, id, &fort("p1")).await.unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::Conflict(msg)) if msg == PLACE_ALREADY_FAVORITE);
        assert_eq!(FavoriteService::list(&store, id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn add_emits_recommendation() {
        let store = MemoryStore::new();
        let id = user(&store).await;
        FavoriteService::add(&store, id, &fort("p1")).await.unwrap();

        let notes = store.list_notifications(id, 50).await.unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].category, NotificationCategory::Recommendation);
    }

    #[tokio::test]
    async fn add_survives_notification_outage() {
        let store = MemoryStore::new();
        let id = user(&store).await;
        store.set_notifications_unavailable(true);

        let list = FavoriteService::add(&store, id, &fort("p1")).await.unwrap();
        assert_eq!(list.len(), 1);
    }

    #[tokio::test]
    async fn list_keeps_insertion_order() {
        let store = MemoryStore::new();
        let id = user(&store).await;
        FavoriteService::add(&store, id, &fort("b")).await.unwrap();
        FavoriteService::add(&store, id, &fort("a")).await.unwrap();

        let ids: Vec<_> = FavoriteService::list(&store, id)
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.place_id)
            .collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[tokio::test]
    async fn remove_absent_is_a_no_op() {
        let store = MemoryStore::new();
        let id = user(&store).await;
        FavoriteService::add(&store, id, &fort("p1")).await.unwrap();

        let list = FavoriteService::remove(&store, id, "nope").await.unwrap();
        assert_eq!(list.len(), 1);
        let list = FavoriteService::remove(&store, id, "p1").await.unwrap();
        assert!(list.is_empty());
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let store = MemoryStore::new();
        assert_matches!(
            FavoriteService::list(&store, 77).await,
            Err(AppError::Core(CoreError::NotFound { entity: "User", .. }))
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_adds_store_one_entry() {
        let store = Arc::new(MemoryStore::new());
        let id = user(&store).await;

        let mut tasks = JoinSet::new();
        for _ in 0..8 {
            let store = Arc::clone(&store);
            tasks.spawn(async move {
                let place = fort("p1");
                FavoriteService::add(store.as_ref(), id, &place).await
            });
        }

        let (mut added, mut conflicts) = (0, 0);
        while let Some(joined) = tasks.join_next().await {
            match joined.unwrap() {
                Ok(_) => added += 1,
                Err(AppError::Core(CoreError::Conflict(_))) => conflicts += 1,
                Err(other) => panic!("unexpected error: {other}"),
            }
        }
        assert_eq!((added, conflicts), (1, 7));
        assert_eq!(FavoriteService::list(store.as_ref(), id).await.unwrap().len(), 1);
    }
}
