//! Game lifecycle state and field validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Maximum length of a game name.
pub const MAX_GAME_NAME_LEN: usize = 200;

/// Maximum length of the game-server version string stored with a game.
pub const MAX_VERSION_LEN: usize = 32;

/// Lifecycle state of a game, stored as TEXT in the `games` table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameState {
    #[default]
    InLobby,
    Ongoing,
    Finished,
    Cancelled,
}

impl GameState {
    /// All states in lifecycle order.
    pub const ALL: [GameState; 4] = [
        GameState::InLobby,
        GameState::Ongoing,
        GameState::Finished,
        GameState::Cancelled,
    ];

    /// Database and wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            GameState::InLobby => "IN_LOBBY",
            GameState::Ongoing => "ONGOING",
            GameState::Finished => "FINISHED",
            GameState::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameState {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameState::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid game state '{s}'. Valid states: IN_LOBBY, ONGOING, FINISHED, CANCELLED"
                ))
            })
    }
}

/// Lets sqlx decode the TEXT column via `#[sqlx(try_from = "String")]`.
impl TryFrom<String> for GameState {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Validate a game name (non-empty, at most [`MAX_GAME_NAME_LEN`] characters).
pub fn validate_game_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Game name must not be empty".into()));
    }
    if name.chars().count() > MAX_GAME_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Game name must be at most {MAX_GAME_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate the game-server version tag stored alongside a serialized game.
pub fn validate_version(version: &str) -> Result<(), CoreError> {
    if version.chars().count() > MAX_VERSION_LEN {
        return Err(CoreError::Validation(format!(
            "Version must be at most {MAX_VERSION_LEN} characters"
        )));
    }
    Ok(())
}
