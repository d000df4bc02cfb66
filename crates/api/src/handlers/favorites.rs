//! Handlers for the `/favorites` resource.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use wayfarer_db::models::favorite::Favorite;

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::handlers::PlaceRequest;
use crate::middleware::auth::AuthUser;
use crate::services::FavoriteService;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct FavoritesResponse {
    pub message: &'static str,
    pub favorites: Vec<Favorite>,
}

/// GET /api/favorites
pub async fn list_favorites(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Favorite>>> {
    let favorites = FavoriteService::list(state.store.as_ref(), auth.user_id).await?;
    Ok(Json(favorites))
}

/// POST /api/favorites
pub async fn add_favorite(
    auth: AuthUser,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<PlaceRequest>,
) -> AppResult<Json<FavoritesResponse>> {
    let place = input.into_draft()?;
    let favorites = FavoriteService::add(state.store.as_ref(), auth.user_id, &place).await?;
    Ok(Json(FavoritesResponse {
        message: "Added to favorites!",
        favorites,
    }))
}

/// DELETE /api/favorites/{place_id}
///
/// Removing a place that is not saved still succeeds.
pub async fn remove_favorite(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(place_id): Path<String>,
) -> AppResult<Json<FavoritesResponse>> {
    let favorites = FavoriteService::remove(state.store.as_ref(), auth.user_id, &place_id).await?;
    Ok(Json(FavoritesResponse {
        message: "Removed from favorites",
        favorites,
    }))
}
