//! Repository for the `rooms` and `room_users` tables.

use agot_core::types::DbId;
use sqlx::PgPool;

use crate::models::room::{CreateRoom, Room};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, public, created_at";

/// Provides create/read operations for chat rooms.
pub struct RoomRepo;

impl RoomRepo {
    /// Insert a room and its member list in one transaction.
    ///
    /// Duplicate member IDs are stored once.
    pub async fn create(pool: &PgPool, input: &CreateRoom) -> Result<Room, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO rooms (name, public) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        let room = sqlx::query_as::<_, Room>(&query)
            .bind(&input.name)
            .bind(input.public)
            .fetch_one(&mut *tx)
            .await?;

        if !input.users.is_empty() {
            sqlx::query(
                "INSERT INTO room_users (room_id, user_id)
                 SELECT $1, UNNEST($2::BIGINT[])
                 ON CONFLICT DO NOTHING",
            )
            .bind(room.id)
            .bind(&input.users)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(room)
    }

    /// List member user IDs of a room in ascending order.
    pub async fn list_members(pool: &PgPool, room_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT user_id FROM room_users WHERE room_id = $1 ORDER BY user_id",
        )
        .bind(room_id)
        .fetch_all(pool)
        .await
    }
}
