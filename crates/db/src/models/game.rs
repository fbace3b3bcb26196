//! Game entity model and DTOs.

use agot_core::game::GameState;
use agot_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A game row from the `games` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Game {
    pub id: DbId,
    pub name: String,
    #[serde(rename = "owner")]
    pub owner_id: Option<DbId>,
    #[sqlx(try_from = "String")]
    pub state: GameState,
    pub serialized_game: Option<serde_json::Value>,
    pub view_of_game: Option<serde_json::Value>,
    pub version: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from `players_in_game`: a user seated in a game plus the game
/// server's per-player data.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PlayerInGame {
    #[serde(skip)]
    pub game_id: DbId,
    #[serde(rename = "user")]
    pub user_id: DbId,
    pub data: serde_json::Value,
}

/// Game plus its players, as returned by the game endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct GameResponse {
    #[serde(flatten)]
    pub game: Game,
    pub players: Vec<PlayerInGame>,
}

/// DTO for creating a game. Games are opened from the website lobby; this
/// is used by seeding and tests.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGame {
    pub name: String,
    pub owner_id: Option<DbId>,
}

/// One entry of the player list sent by the game server.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerInput {
    pub user: DbId,
    #[serde(default = "empty_object")]
    pub data: serde_json::Value,
}

fn empty_object() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

/// DTO for updating a game. All fields are optional; `players`, when
/// present, replaces the whole player list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateGame {
    pub name: Option<String>,
    pub state: Option<GameState>,
    pub serialized_game: Option<serde_json::Value>,
    pub view_of_game: Option<serde_json::Value>,
    pub version: Option<String>,
    pub players: Option<Vec<PlayerInput>>,
}
