//! Handlers for the `/notifications` resource.
//!
//! All endpoints require authentication via [`AuthUser`]. Notifications
//! are only created as side effects of other operations.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use wayfarer_core::types::DbId;
use wayfarer_db::models::notification::Notification;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::services::NotificationService;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MarkAllReadResponse {
    pub message: &'static str,
    pub marked: u64,
}

#[derive(Debug, Serialize)]
pub struct UnreadCountResponse {
    pub count: i64,
}

/// GET /api/notifications
///
/// The 50 most recent notifications, newest first.
pub async fn list_notifications(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Notification>>> {
    let notifications = NotificationService::list(state.store.as_ref(), auth.user_id).await?;
    Ok(Json(notifications))
}

/// PUT /api/notifications/{id}/read
pub async fn mark_read(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(notification_id): Path<DbId>,
) -> AppResult<Json<Notification>> {
    let notification =
        NotificationService::mark_read(state.store.as_ref(), auth.user_id, notification_id)
            .await?;
    Ok(Json(notification))
}

/// PUT /api/notifications/read-all
pub async fn mark_all_read(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<MarkAllReadResponse>> {
    let marked = NotificationService::mark_all_read(state.store.as_ref(), auth.user_id).await?;
    Ok(Json(MarkAllReadResponse {
        message: "All notifications marked as read",
        marked,
    }))
}

/// DELETE /api/notifications/{id}
pub async fn delete_notification(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(notification_id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    NotificationService::delete(state.store.as_ref(), auth.user_id, notification_id).await?;
    Ok(Json(MessageResponse::new("Notification removed")))
}

/// GET /api/notifications/unread-count
pub async fn unread_count(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<UnreadCountResponse>> {
    let count = NotificationService::unread_count(state.store.as_ref(), auth.user_id).await?;
    Ok(Json(UnreadCountResponse { count }))
}
