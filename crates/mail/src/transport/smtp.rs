//! Email delivery via SMTP.
//!
//! [`SmtpTransport`] wraps the `lettre` async SMTP transport to send HTML
//! notification emails. Configuration is loaded from environment variables;
//! if `SMTP_HOST` is not set, [`EmailConfig::from_env`] returns `None` and
//! the caller should fall back to another transport.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use super::MailTransport;
use crate::error::MailError;
use crate::message::MailMessage;

// ---------------------------------------------------------------------------
// EmailConfig
// ---------------------------------------------------------------------------

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Configuration for the SMTP transport.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password.
    pub smtp_password: Option<String>,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` is not set, signalling that SMTP
    /// delivery is not configured.
    ///
    /// | Variable         | Required | Default |
    /// |------------------|----------|---------|
    /// | `SMTP_HOST`      | yes      | -       |
    /// | `SMTP_PORT`      | no       | `587`   |
    /// | `SMTP_USER`      | no       | -       |
    /// | `SMTP_PASSWORD`  | no       | -       |
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;
        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

// ---------------------------------------------------------------------------
// SmtpTransport
// ---------------------------------------------------------------------------

/// Sends messages through a STARTTLS SMTP relay.
pub struct SmtpTransport {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpTransport {
    /// Build the relay transport. No connection is opened until the first send.
    pub fn new(config: &EmailConfig) -> Result<Self, MailError> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port);

        if let (Some(user), Some(pass)) = (&config.smtp_user, &config.smtp_password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(Self {
            mailer: builder.build(),
        })
    }
}

/// Assemble a MIME message with an HTML body.
pub(crate) fn build_message(message: &MailMessage) -> Result<Message, MailError> {
    if message.to.is_empty() {
        return Err(MailError::Build("message has no recipients".to_string()));
    }

    let mut builder = Message::builder()
        .from(message.from.parse()?)
        .subject(message.subject.clone())
        .header(ContentType::TEXT_HTML);
    for to in &message.to {
        builder = builder.to(to.parse()?);
    }

    builder
        .body(message.html_body.clone())
        .map_err(|e| MailError::Build(e.to_string()))
}

#[async_trait]
impl MailTransport for SmtpTransport {
    fn name(&self) -> &'static str {
        "smtp"
    }

    async fn send(&self, message: &MailMessage) -> Result<(), MailError> {
        let email = build_message(message)?;
        self.mailer.send(email).await?;

        tracing::info!(to = ?message.to, subject = %message.subject, "Email sent");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
