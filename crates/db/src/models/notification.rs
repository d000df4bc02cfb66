//! Notification entity model.

use serde::Serialize;
use sqlx::FromRow;
use wayfarer_core::notification::NotificationCategory;
use wayfarer_core::types::{DbId, Timestamp};

/// A row from the `notifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub message: String,
    #[sqlx(try_from = "String")]
    #[serde(rename = "type")]
    pub category: NotificationCategory,
    pub is_read: bool,
    pub link: Option<String>,
    pub created_at: Timestamp,
}
