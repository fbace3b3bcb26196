//! Route definitions for the `/games` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{game, notify};
use crate::state::AppState;

/// Routes mounted at `/games`.
///
/// ```text
/// GET    /{id}                -> get_by_id
/// PUT    /{id}                -> update
/// PATCH  /{id}                -> update
/// POST   /{id}/notify         -> notify
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(game::get_by_id).put(game::update).patch(game::update),
        )
        .route("/{id}/notify", post(notify::notify))
}
