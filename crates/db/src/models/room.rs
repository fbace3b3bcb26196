//! Chat room model and DTOs.

use agot_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `rooms` table.
#[derive(Debug, Clone, FromRow)]
pub struct Room {
    pub id: DbId,
    pub name: String,
    pub public: bool,
    pub created_at: Timestamp,
}

/// Room representation returned by `POST /rooms`.
#[derive(Debug, Clone, Serialize)]
pub struct RoomResponse {
    pub id: DbId,
    pub name: String,
    pub public: bool,
    pub users: Vec<DbId>,
}

impl RoomResponse {
    pub fn new(room: Room, users: Vec<DbId>) -> Self {
        Self {
            id: room.id,
            name: room.name,
            public: room.public,
            users,
        }
    }
}

/// DTO for creating a room.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRoom {
    pub name: String,
    #[serde(default = "default_public")]
    pub public: bool,
    #[serde(default)]
    pub users: Vec<DbId>,
}

fn default_public() -> bool {
    true
}
