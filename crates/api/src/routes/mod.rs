pub mod games;
pub mod health;
pub mod rooms;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users/{id}                  GET   retrieve user
///
/// /games/{id}                  GET   retrieve game with players
///                              PUT   update game
///                              PATCH update game
/// /games/{id}/notify           POST  email players whose turn it is
///
/// /rooms                       POST  create chat room
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/games", games::router())
        .nest("/rooms", rooms::router())
}
