//! Route definitions for the `/trips` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::trips;
use crate::state::AppState;

/// Routes mounted at `/trips`.
///
/// ```text
/// GET    /                        -> list_trips
/// POST   /                        -> create_trip
/// GET    /{id}                    -> get_trip
/// DELETE /{id}                    -> delete_trip
/// POST   /{id}/add                -> add_place
/// DELETE /{id}/place/{place_id}   -> remove_place
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(trips::list_trips).post(trips::create_trip))
        .route("/{id}", get(trips::get_trip).delete(trips::delete_trip))
        .route("/{id}/add", post(trips::add_place))
        .route("/{id}/place/{place_id}", delete(trips::remove_place))
}
