//! Handlers for the `/games` resource (retrieve and update).

use agot_core::error::CoreError;
use agot_core::game::{validate_game_name, validate_version};
use agot_core::types::DbId;
use agot_db::models::game::{GameResponse, UpdateGame};
use agot_db::repositories::GameRepo;
use axum::extract::{Path, State};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Game", id })
}

/// GET /api/v1/games/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<GameResponse>> {
    let game = GameRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let players = GameRepo::list_players(&state.pool, id).await?;
    Ok(Json(GameResponse { game, players }))
}

/// PUT|PATCH /api/v1/games/{id}
///
/// Fields left out of the body keep their value. A `players` list replaces
/// the seated players in the same transaction as the field update.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGame>,
) -> AppResult<Json<GameResponse>> {
    if let Some(name) = &input.name {
        validate_game_name(name)?;
    }
    if let Some(version) = &input.version {
        validate_version(version)?;
    }

    let game = GameRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    let players = GameRepo::list_players(&state.pool, id).await?;

    tracing::debug!(game_id = id, state = %game.state, players = players.len(), "Game updated");
    Ok(Json(GameResponse { game, players }))
}
