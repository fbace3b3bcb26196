//! Turn notification endpoint.
//!
//! The game server calls this when it becomes someone's turn. Every listed
//! user who has email notifications enabled gets one mail with a link to the
//! game's play page. The response is the same whether zero or all mails went
//! out.

use agot_core::error::CoreError;
use agot_core::notification::{
    absolute_url, play_path, select_recipients, turn_notification_subject, Recipient,
};
use agot_core::types::DbId;
use agot_db::models::game::Game;
use agot_db::repositories::{GameRepo, UserRepo};
use agot_mail::template::TURN_NOTIFICATION_TEMPLATE;
use agot_mail::{send_mass_mail, MailMessage, TemplateRenderer};
use axum::extract::{Path, State};
use axum::http::header::HOST;
use axum::http::{HeaderMap, Uri};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::ServerConfig;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Body of `POST /games/{game_id}/notify`.
#[derive(Debug, Deserialize)]
pub struct NotifyRequest {
    pub users: Vec<DbId>,
}

/// Fixed acknowledgement returned by the notify endpoint.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

/// POST /api/v1/games/{game_id}/notify
///
/// An unknown game or any unknown user ID fails the request before a single
/// mail is built. Delivery failures are logged and do not change the
/// response.
pub async fn notify(
    State(state): State<AppState>,
    Path(game_id): Path<DbId>,
    uri: Uri,
    headers: HeaderMap,
    Json(input): Json<NotifyRequest>,
) -> AppResult<Json<StatusResponse>> {
    let game = GameRepo::find_by_id(&state.pool, game_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Game",
            id: game_id,
        }))?;

    let loaded: Vec<Recipient> = UserRepo::find_many(&state.pool, &input.users)
        .await?
        .into_iter()
        .map(Recipient::from)
        .collect();
    let recipients = select_recipients(&input.users, &loaded)?;

    let base_url = request_base_url(&state.config, &headers, &uri)?;
    let game_url = absolute_url(&base_url, &play_path(game.id));

    let messages = compose_turn_notifications(
        &state.templates,
        &game,
        &recipients,
        &game_url,
        &state.config.default_from_mail,
    )?;

    let report = send_mass_mail(state.mailer.as_ref(), &messages).await;
    tracing::info!(
        game_id,
        requested = input.users.len(),
        sent = report.sent,
        failed = report.failed,
        "Turn notifications dispatched",
    );

    Ok(Json(StatusResponse { status: "ok" }))
}

/// Render one message per recipient.
pub fn compose_turn_notifications(
    templates: &TemplateRenderer,
    game: &Game,
    recipients: &[Recipient],
    game_url: &str,
    from: &str,
) -> AppResult<Vec<MailMessage>> {
    let subject = turn_notification_subject(&game.name);

    recipients
        .iter()
        .map(|recipient| {
            let mut context = tera::Context::new();
            context.insert("game", &json!({ "id": game.id, "name": game.name }));
            context.insert(
                "user",
                &json!({ "id": recipient.user_id, "username": recipient.username }),
            );
            context.insert("game_url", game_url);

            let body = templates.render(TURN_NOTIFICATION_TEMPLATE, &context)?;
            Ok(MailMessage::new(
                subject.clone(),
                body,
                from,
                vec![recipient.email.clone()],
            ))
        })
        .collect()
}

/// Base URL for absolute links: the configured public URL, or else the
/// scheme and host the request was sent to.
///
/// The host comes from the `Host` header (HTTP/1.1) or the URI authority
/// (HTTP/2). The scheme comes from `X-Forwarded-Proto`, then the URI,
/// defaulting to `http`.
pub fn request_base_url(
    config: &ServerConfig,
    headers: &HeaderMap,
    uri: &Uri,
) -> AppResult<String> {
    if let Some(base) = &config.public_base_url {
        return Ok(base.clone());
    }

    let host = headers
        .get(HOST)
        .and_then(|v| v.to_str().ok())
        .filter(|h| !h.is_empty())
        .or_else(|| uri.authority().map(|a| a.as_str()))
        .ok_or_else(|| AppError::BadRequest("Missing Host header".into()))?;

    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .or_else(|| uri.scheme_str())
        .filter(|s| *s == "http" || *s == "https")
        .unwrap_or("http");

    Ok(format!("{scheme}://{host}"))
}
