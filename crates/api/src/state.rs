use std::sync::Arc;

use agot_mail::{MailTransport, TemplateRenderer};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: agot_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Outbound mail transport (SMTP, log or memory).
    pub mailer: Arc<dyn MailTransport>,
    /// Compiled mail templates.
    pub templates: Arc<TemplateRenderer>,
}
