//! User entity model and DTOs.

use agot_core::notification::Recipient;
use agot_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the email address and notification preference -- NEVER serialize
/// this to API responses directly. Use [`UserResponse`] for external output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub email_notification_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Public user representation returned by `GET /users/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

impl From<User> for Recipient {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            username: user.username,
            email: user.email,
            notifications_enabled: user.email_notification_active,
        }
    }
}

/// DTO for creating a user. Sign-up lives outside this API; this is used
/// by seeding and tests.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    /// Defaults to `true` if omitted.
    pub email_notification_active: Option<bool>,
}
