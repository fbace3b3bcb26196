//! Route definitions for the `/rooms` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::room;
use crate::state::AppState;

/// Routes mounted at `/rooms`.
///
/// ```text
/// POST   /    -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(room::create))
}
