#![allow(dead_code)]

use std::sync::Arc;

use agot_api::config::ServerConfig;
use agot_api::router::build_app_router;
use agot_api::state::AppState;
use agot_db::models::game::{CreateGame, Game};
use agot_db::models::user::{CreateUser, User};
use agot_db::repositories::{GameRepo, UserRepo};
use agot_mail::{MailTransport, MemoryTransport, TemplateRenderer};
use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

/// Public base URL used for links in test mail.
pub const TEST_BASE_URL: &str = "http://testserver";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        public_base_url: Some(TEST_BASE_URL.to_string()),
        default_from_mail: "noreply@agot.test".to_string(),
    }
}

/// Build the full application router over `pool`, discarding sent mail.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_mailer(pool, Arc::new(MemoryTransport::new()))
}

/// Build the full application router over `pool`, recording mail in `mailer`.
///
/// Uses the same `build_app_router` as `main.rs`, so the middleware stack
/// (CORS, request ID, timeout, tracing, panic recovery) is exercised too.
pub fn build_test_app_with_mailer(pool: PgPool, mailer: Arc<MemoryTransport>) -> Router {
    build_app_with_config(pool, mailer, test_config())
}

/// Build the full application router over an arbitrary mail transport.
pub fn build_app_with_transport(pool: PgPool, mailer: Arc<dyn MailTransport>) -> Router {
    build_app_with_config(pool, mailer, test_config())
}

/// Like [`build_app_with_transport`] with a caller-supplied config.
pub fn build_app_with_config(
    pool: PgPool,
    mailer: Arc<dyn MailTransport>,
    config: ServerConfig,
) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        mailer,
        templates: Arc::new(TemplateRenderer::new().unwrap()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn seed_user(pool: &PgPool, username: &str, notifications: bool) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            email_notification_active: Some(notifications),
        },
    )
    .await
    .unwrap()
}

pub async fn seed_game(pool: &PgPool, name: &str) -> Game {
    GameRepo::create(
        pool,
        &CreateGame {
            name: name.to_string(),
            owner_id: None,
        },
    )
    .await
    .unwrap()
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn send_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PUT, uri, body).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PATCH, uri, body).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
