//! Per-user notification log and the best-effort emit hook used after
//! favorite and trip mutations.

use wayfarer_core::error::CoreError;
use wayfarer_core::notification::{NotificationDraft, NOTIFICATION_LIST_LIMIT};
use wayfarer_core::ownership::{ensure_owner, OwnerMismatch};
use wayfarer_core::types::DbId;
use wayfarer_db::models::notification::Notification;
use wayfarer_db::Store;

use crate::error::AppResult;

/// Attempts made by [`NotificationService::emit`] before giving up.
pub const EMIT_ATTEMPTS: u32 = 2;

pub struct NotificationService;

impl NotificationService {
    /// Persist a notification after the triggering mutation has committed.
    ///
    /// Never fails: each failed attempt is logged at WARN and the caller
    /// carries on with its own result.
    pub async fn emit(store: &dyn Store, draft: NotificationDraft) {
        for attempt in 1..=EMIT_ATTEMPTS {
            match store.create_notification(&draft).await {
                Ok(notification) => {
                    tracing::debug!(
                        notification_id = notification.id,
                        user_id = draft.user_id,
                        category = %draft.category,
                        "Notification created",
                    );
                    return;
                }
                Err(e) => tracing::warn!(
                    error = %e,
                    attempt,
                    user_id = draft.user_id,
                    category = %draft.category,
                    "Failed to create notification",
                ),
            }
        }
    }

    /// The user's most recent notifications, newest first.
    pub async fn list(store: &dyn Store, user_id: DbId) -> AppResult<Vec<Notification>> {
        Ok(store
            .list_notifications(user_id, NOTIFICATION_LIST_LIMIT)
            .await?)
    }

    pub async fn mark_read(
        store: &dyn Store,
        user_id: DbId,
        notification_id: DbId,
    ) -> AppResult<Notification> {
        Self::load_owned(store, user_id, notification_id).await?;
        store
            .mark_notification_read(notification_id)
            .await?
            .ok_or_else(|| not_found(notification_id).into())
    }

    /// Returns how many notifications were flipped to read.
    pub async fn mark_all_read(store: &dyn Store, user_id: DbId) -> AppResult<u64> {
        let marked = store.mark_all_notifications_read(user_id).await?;
        tracing::debug!(user_id, marked, "Marked all notifications read");
        Ok(marked)
    }

    pub async fn delete(store: &dyn Store, user_id: DbId, notification_id: DbId) -> AppResult<()> {
        Self::load_owned(store, user_id, notification_id).await?;
        if !store.delete_notification(notification_id).await? {
            return Err(not_found(notification_id).into());
        }
        Ok(())
    }

    pub async fn unread_count(store: &dyn Store, user_id: DbId) -> AppResult<i64> {
        Ok(store.unread_notification_count(user_id).await?)
    }

    /// 404 when missing, 401 when owned by someone else.
    async fn load_owned(
        store: &dyn Store,
        user_id: DbId,
        notification_id: DbId,
    ) -> AppResult<Notification> {
        let notification = store
            .find_notification(notification_id)
            .await?
            .ok_or_else(|| not_found(notification_id))?;
        ensure_owner(
            "Notification",
            notification.user_id,
            user_id,
            OwnerMismatch::Unauthorized,
        )?;
        Ok(notification)
    }
}

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: "Notification",
        id,
    }
}
