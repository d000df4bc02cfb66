pub mod ai;
pub mod auth;
pub mod favorites;
pub mod health;
pub mod notifications;
pub mod trips;
pub mod weather;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                       register (public)
/// /auth/login                          login (public)
/// /auth/me                             current profile
///
/// /favorites                           list, add
/// /favorites/{place_id}                remove
///
/// /trips                               list, create
/// /trips/{id}                          get, delete
/// /trips/{id}/add                      append place (POST)
/// /trips/{id}/place/{place_id}         remove place (DELETE)
///
/// /ai/generate                         itinerary preview (POST)
/// /ai/import                           itinerary to trip (POST)
///
/// /notifications                       list
/// /notifications/unread-count          unread count
/// /notifications/read-all              mark all read (PUT)
/// /notifications/{id}                  delete
/// /notifications/{id}/read             mark read (PUT)
///
/// /weather?lat&lng                     current weather (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/favorites", favorites::router())
        .nest("/trips", trips::router())
        .nest("/ai", ai::router())
        .nest("/notifications", notifications::router())
        .nest("/weather", weather::router())
}
