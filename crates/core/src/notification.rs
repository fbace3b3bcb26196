//! Turn notification composition.
//!
//! Decides who gets a "your turn" email for a game and what the subject and
//! play link look like. Rendering the body and sending it live in the mail
//! crate; loading rows lives in the db crate.

use std::collections::HashMap;

use crate::error::CoreError;
use crate::types::DbId;

/// Subject line of the turn notification email.
///
/// Keeps the double space before "It's" exactly as existing mails have it.
pub fn turn_notification_subject(game_name: &str) -> String {
    format!("{game_name} -  It's your turn!")
}

/// Site-relative path of the play page for a game.
pub fn play_path(game_id: DbId) -> String {
    format!("/play/{game_id}/")
}

/// Join a base URL (`scheme://host[:port]`, optional trailing slash) and a
/// site-relative path.
pub fn absolute_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// A user eligible to receive mail, as loaded for a notification batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    pub user_id: DbId,
    pub username: String,
    pub email: String,
    pub notifications_enabled: bool,
}

/// Resolve the requested user IDs against the loaded users and keep the ones
/// who want email.
///
/// Request order and duplicates are preserved. The first requested ID with
/// no matching user fails the whole batch with [`CoreError::NotFound`], so
/// nothing is sent when any ID is unknown.
pub fn select_recipients(
    requested: &[DbId],
    loaded: &[Recipient],
) -> Result<Vec<Recipient>, CoreError> {
    let by_id: HashMap<DbId, &Recipient> = loaded.iter().map(|r| (r.user_id, r)).collect();

    let mut resolved = Vec::with_capacity(requested.len());
    for &id in requested {
        let recipient = by_id
            .get(&id)
            .ok_or(CoreError::NotFound { entity: "User", id })?;
        resolved.push(*recipient);
    }

    Ok(resolved
        .into_iter()
        .filter(|r| r.notifications_enabled)
        .cloned()
        .collect())
}
