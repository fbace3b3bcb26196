//! Chat room validation.

use crate::error::CoreError;
use crate::types::DbId;

/// Maximum length of a room name.
pub const MAX_ROOM_NAME_LEN: usize = 200;

/// Validate a room name (non-empty, at most [`MAX_ROOM_NAME_LEN`] characters).
pub fn validate_room_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Room name must not be empty".into()));
    }
    if name.chars().count() > MAX_ROOM_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Room name must be at most {MAX_ROOM_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// A private room is only reachable by its members, so it needs at least one.
pub fn validate_room_members(public: bool, users: &[DbId]) -> Result<(), CoreError> {
    if !public && users.is_empty() {
        return Err(CoreError::Validation(
            "A private room must have at least one member".into(),
        ));
    }
    Ok(())
}
