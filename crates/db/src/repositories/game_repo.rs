//! Repository for the `games` and `players_in_game` tables.

use agot_core::game::GameState;
use agot_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::game::{CreateGame, Game, PlayerInGame, PlayerInput, UpdateGame};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, owner_id, state, serialized_game, view_of_game, version, \
    created_at, updated_at";

/// Column list for `players_in_game` queries.
const PLAYER_COLUMNS: &str = "game_id, user_id, data";

/// Provides CRUD operations for games and their player lists.
pub struct GameRepo;

impl GameRepo {
    /// Insert a new game in the lobby state, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateGame) -> Result<Game, sqlx::Error> {
        let query = format!(
            "INSERT INTO games (name, owner_id, state)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Game>(&query)
            .bind(&input.name)
            .bind(input.owner_id)
            .bind(GameState::default().as_str())
            .fetch_one(pool)
            .await
    }

    /// Find a game by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games WHERE id = $1");
        sqlx::query_as::<_, Game>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Save a game. Only non-`None` fields in `input` are applied; a
    /// `players` list replaces the seated players.
    ///
    /// Both writes share one transaction, so a failure in either leaves the
    /// game as it was. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGame,
    ) -> Result<Option<Game>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let locked =
            sqlx::query_scalar::<_, DbId>("SELECT id FROM games WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if locked.is_none() {
            return Ok(None);
        }

        if let Some(players) = &input.players {
            Self::write_players(&mut *tx, id, players).await?;
        }

        let query = format!(
            "UPDATE games SET
                name = COALESCE($2, name),
                state = COALESCE($3, state),
                serialized_game = COALESCE($4, serialized_game),
                view_of_game = COALESCE($5, view_of_game),
                version = COALESCE($6, version),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let game = sqlx::query_as::<_, Game>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.state.map(GameState::as_str))
            .bind(&input.serialized_game)
            .bind(&input.view_of_game)
            .bind(&input.version)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(game)
    }

    /// List the players seated in a game, in seating order.
    pub async fn list_players(
        pool: &PgPool,
        game_id: DbId,
    ) -> Result<Vec<PlayerInGame>, sqlx::Error> {
        let query = format!(
            "SELECT {PLAYER_COLUMNS} FROM players_in_game WHERE game_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, PlayerInGame>(&query)
            .bind(game_id)
            .fetch_all(pool)
            .await
    }

    /// Replace the whole player list of a game in one transaction.
    ///
    /// An unknown user ID fails with a foreign-key violation and leaves the
    /// previous list untouched.
    pub async fn replace_players(
        pool: &PgPool,
        game_id: DbId,
        players: &[PlayerInput],
    ) -> Result<Vec<PlayerInGame>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let inserted = Self::write_players(&mut *tx, game_id, players).await?;
        tx.commit().await?;
        Ok(inserted)
    }

    async fn write_players(
        conn: &mut PgConnection,
        game_id: DbId,
        players: &[PlayerInput],
    ) -> Result<Vec<PlayerInGame>, sqlx::Error> {
        sqlx::query("DELETE FROM players_in_game WHERE game_id = $1")
            .bind(game_id)
            .execute(&mut *conn)
            .await?;

        let insert = format!(
            "INSERT INTO players_in_game (game_id, user_id, data)
             VALUES ($1, $2, $3)
             RETURNING {PLAYER_COLUMNS}"
        );
        let mut inserted = Vec::with_capacity(players.len());
        for player in players {
            let row = sqlx::query_as::<_, PlayerInGame>(&insert)
                .bind(game_id)
                .bind(player.user)
                .bind(&player.data)
                .fetch_one(&mut *conn)
                .await?;
            inserted.push(row);
        }
        Ok(inserted)
    }
}
