//! Notification categories and the drafts emitted by favorite and trip
//! mutations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// Maximum number of notifications returned by a list call.
pub const NOTIFICATION_LIST_LIMIT: i64 = 50;

/// Closed set of notification categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationCategory {
    Trip,
    #[default]
    System,
    Recommendation,
}

impl NotificationCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trip => "trip",
            Self::System => "system",
            Self::Recommendation => "recommendation",
        }
    }
}

impl fmt::Display for NotificationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trip" => Ok(Self::Trip),
            "system" => Ok(Self::System),
            "recommendation" => Ok(Self::Recommendation),
            other => Err(CoreError::Validation(format!(
                "Unknown notification category: {other}"
            ))),
        }
    }
}

impl TryFrom<String> for NotificationCategory {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A notification that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationDraft {
    pub user_id: DbId,
    pub title: String,
    pub message: String,
    pub category: NotificationCategory,
    pub link: Option<String>,
}

impl NotificationDraft {
    /// Emitted after a place is saved to the user's favorites.
    pub fn favorite_added(user_id: DbId, place_name: &str) -> Self {
        Self {
            user_id,
            title: "New Favorite!".to_string(),
            message: format!("You've added {place_name} to your favorites list."),
            category: NotificationCategory::Recommendation,
            link: Some("/favorites".to_string()),
        }
    }

    /// Emitted after a trip is created.
    pub fn trip_created(user_id: DbId, trip_id: DbId, trip_title: &str) -> Self {
        Self {
            user_id,
            title: "Trip Created".to_string(),
            message: format!("Your trip \"{trip_title}\" is ready to plan."),
            category: NotificationCategory::Trip,
            link: Some(trip_link(trip_id)),
        }
    }

    /// Emitted after a place is appended to a trip.
    pub fn place_added(user_id: DbId, trip_id: DbId, trip_title: &str, place_name: &str) -> Self {
        Self {
            user_id,
            title: "Place Added".to_string(),
            message: format!("{place_name} was added to \"{trip_title}\"."),
            category: NotificationCategory::Trip,
            link: Some(trip_link(trip_id)),
        }
    }
}

/// Client-side route of a trip's detail page.
pub fn trip_link(trip_id: DbId) -> String {
    format!("/trips/{trip_id}")
}
