//! Integration tests for the user, game and room repositories.
//!
//! Exercises the repository layer against a real database:
//! - User lookup, batch lookup and notification preference default
//! - Partial game updates and player list replacement
//! - Room creation with members
//! - Foreign key and unique constraint violations

use agot_core::game::GameState;
use agot_db::models::game::{CreateGame, PlayerInput, UpdateGame};
use agot_db::models::room::CreateRoom;
use agot_db::models::user::CreateUser;
use agot_db::repositories::{GameRepo, RoomRepo, UserRepo};
use assert_matches::assert_matches;
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(username: &str, notifications: Option<bool>) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        email_notification_active: notifications,
    }
}

fn new_game(name: &str, owner_id: Option<i64>) -> CreateGame {
    CreateGame {
        name: name.to_string(),
        owner_id,
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn user_notifications_default_to_enabled(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("stark", None)).await.unwrap();
    assert!(user.email_notification_active);

    let muted = UserRepo::create(&pool, &new_user("lannister", Some(false)))
        .await
        .unwrap();
    assert!(!muted.email_notification_active);
}

#[sqlx::test(migrations = "./migrations")]
async fn find_user_by_id(pool: PgPool) {
    let created = UserRepo::create(&pool, &new_user("baratheon", None)).await.unwrap();

    let found = UserRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(found.username, "baratheon");
    assert_eq!(found.email, "baratheon@example.com");

    assert!(UserRepo::find_by_id(&pool, created.id + 1000).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn find_many_skips_unknown_ids(pool: PgPool) {
    let a = UserRepo::create(&pool, &new_user("greyjoy", None)).await.unwrap();
    let b = UserRepo::create(&pool, &new_user("tyrell", None)).await.unwrap();

    let users = UserRepo::find_many(&pool, &[b.id, a.id, 999_999]).await.unwrap();
    let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![a.id, b.id]);

    assert!(UserRepo::find_many(&pool, &[]).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_username_violates_unique_constraint(pool: PgPool) {
    UserRepo::create(&pool, &new_user("martell", None)).await.unwrap();
    let err = UserRepo::create(&pool, &new_user("martell", None)).await.unwrap_err();

    assert_matches!(err, sqlx::Error::Database(ref db) if db.constraint() == Some("uq_users_username"));
}

// ---------------------------------------------------------------------------
// Games
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn new_game_starts_in_lobby(pool: PgPool) {
    let owner = UserRepo::create(&pool, &new_user("owner", None)).await.unwrap();
    let game = GameRepo::create(&pool, &new_game("Game of Thrones", Some(owner.id)))
        .await
        .unwrap();

    assert_eq!(game.state, GameState::InLobby);
    assert_eq!(game.owner_id, Some(owner.id));
    assert!(game.serialized_game.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn partial_update_keeps_other_fields(pool: PgPool) {
    let game = GameRepo::create(&pool, &new_game("Original", None)).await.unwrap();

    let update = UpdateGame {
        state: Some(GameState::Ongoing),
        serialized_game: Some(json!({"round": 3})),
        version: Some("12".to_string()),
        ..Default::default()
    };
    let updated = GameRepo::update(&pool, game.id, &update).await.unwrap().unwrap();

    assert_eq!(updated.name, "Original");
    assert_eq!(updated.state, GameState::Ongoing);
    assert_eq!(updated.serialized_game, Some(json!({"round": 3})));
    assert_eq!(updated.version.as_deref(), Some("12"));
    assert!(updated.updated_at >= game.updated_at);
}

#[sqlx::test(migrations = "./migrations")]
async fn update_missing_game_returns_none(pool: PgPool) {
    let update = UpdateGame {
        name: Some("Nope".to_string()),
        ..Default::default()
    };
    assert!(GameRepo::update(&pool, 123_456, &update).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn replace_players_overwrites_list(pool: PgPool) {
    let a = UserRepo::create(&pool, &new_user("p1", None)).await.unwrap();
    let b = UserRepo::create(&pool, &new_user("p2", None)).await.unwrap();
    let c = UserRepo::create(&pool, &new_user("p3", None)).await.unwrap();
    let game = GameRepo::create(&pool, &new_game("Seats", None)).await.unwrap();

    let first = vec![
        PlayerInput { user: a.id, data: json!({"house": "stark"}) },
        PlayerInput { user: b.id, data: json!({"house": "lannister"}) },
    ];
    GameRepo::replace_players(&pool, game.id, &first).await.unwrap();

    let second = vec![PlayerInput { user: c.id, data: json!({}) }];
    GameRepo::replace_players(&pool, game.id, &second).await.unwrap();

    let players = GameRepo::list_players(&pool, game.id).await.unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].user_id, c.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn replace_players_with_unknown_user_rolls_back(pool: PgPool) {
    let a = UserRepo::create(&pool, &new_user("seated", None)).await.unwrap();
    let game = GameRepo::create(&pool, &new_game("Rollback", None)).await.unwrap();
    GameRepo::replace_players(&pool, game.id, &[PlayerInput { user: a.id, data: json!({}) }])
        .await
        .unwrap();

    let bad = vec![PlayerInput { user: 987_654, data: json!({}) }];
    let err = GameRepo::replace_players(&pool, game.id, &bad).await.unwrap_err();
    assert_matches!(err, sqlx::Error::Database(_));

    let players = GameRepo::list_players(&pool, game.id).await.unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].user_id, a.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn failed_update_keeps_previous_players(pool: PgPool) {
    let a = UserRepo::create(&pool, &new_user("kept", None)).await.unwrap();
    let b = UserRepo::create(&pool, &new_user("dropped", None)).await.unwrap();
    let game = GameRepo::create(&pool, &new_game("Atomic", None)).await.unwrap();
    GameRepo::replace_players(&pool, game.id, &[PlayerInput { user: a.id, data: json!({}) }])
        .await
        .unwrap();

    // Postgres rejects NUL in TEXT, so the field update fails after the
    // player list has been rewritten.
    let update = UpdateGame {
        name: Some("bad\0name".to_string()),
        players: Some(vec![PlayerInput { user: b.id, data: json!({}) }]),
        ..Default::default()
    };
    let err = GameRepo::update(&pool, game.id, &update).await.unwrap_err();
    assert_matches!(err, sqlx::Error::Database(_));

    let players = GameRepo::list_players(&pool, game.id).await.unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].user_id, a.id);
    let reloaded = GameRepo::find_by_id(&pool, game.id).await.unwrap().unwrap();
    assert_eq!(reloaded.name, "Atomic");
}

#[sqlx::test(migrations = "./migrations")]
async fn update_with_players_on_missing_game_returns_none(pool: PgPool) {
    let a = UserRepo::create(&pool, &new_user("nobody", None)).await.unwrap();
    let update = UpdateGame {
        players: Some(vec![PlayerInput { user: a.id, data: json!({}) }]),
        ..Default::default()
    };
    assert!(GameRepo::update(&pool, 654_321, &update).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Rooms
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn create_public_room_without_members(pool: PgPool) {
    let input = CreateRoom {
        name: "game-1".to_string(),
        public: true,
        users: vec![],
    };
    let room = RoomRepo::create(&pool, &input).await.unwrap();

    assert!(room.public);
    assert_eq!(room.name, "game-1");
    assert!(RoomRepo::list_members(&pool, room.id).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn create_private_room_dedupes_members(pool: PgPool) {
    let a = UserRepo::create(&pool, &new_user("whisper1", None)).await.unwrap();
    let b = UserRepo::create(&pool, &new_user("whisper2", None)).await.unwrap();

    let input = CreateRoom {
        name: "private".to_string(),
        public: false,
        users: vec![b.id, a.id, b.id],
    };
    let room = RoomRepo::create(&pool, &input).await.unwrap();

    let members = RoomRepo::list_members(&pool, room.id).await.unwrap();
    assert_eq!(members, vec![a.id, b.id]);
}
