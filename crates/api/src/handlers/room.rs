//! Handlers for the `/rooms` resource (create only).

use std::collections::BTreeSet;

use agot_core::error::CoreError;
use agot_core::room::{validate_room_members, validate_room_name};
use agot_core::types::DbId;
use agot_db::models::room::{CreateRoom, RoomResponse};
use agot_db::repositories::{RoomRepo, UserRepo};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/rooms
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateRoom>,
) -> AppResult<(StatusCode, Json<RoomResponse>)> {
    validate_room_name(&input.name)?;
    validate_room_members(input.public, &input.users)?;

    let wanted: BTreeSet<DbId> = input.users.iter().copied().collect();
    let ids: Vec<DbId> = wanted.iter().copied().collect();
    let found: BTreeSet<DbId> = UserRepo::find_many(&state.pool, &ids)
        .await?
        .into_iter()
        .map(|u| u.id)
        .collect();
    if let Some(missing) = wanted.difference(&found).next() {
        return Err(CoreError::Validation(format!("Unknown user id {missing}")).into());
    }

    let room = RoomRepo::create(&state.pool, &input).await?;
    let users = RoomRepo::list_members(&state.pool, room.id).await?;

    tracing::info!(room_id = room.id, public = room.public, members = users.len(), "Room created");
    Ok((StatusCode::CREATED, Json(RoomResponse::new(room, users))))
}
