//! Transport that writes messages to the log instead of sending them.

use async_trait::async_trait;

use super::MailTransport;
use crate::error::MailError;
use crate::message::MailMessage;

/// Logs every message at `info` and reports success.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTransport;

#[async_trait]
impl MailTransport for LogTransport {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn send(&self, message: &MailMessage) -> Result<(), MailError> {
        tracing::info!(
            from = %message.from,
            to = ?message.to,
            subject = %message.subject,
            body_len = message.html_body.len(),
            "SMTP not configured, mail logged instead of sent",
        );
        Ok(())
    }
}
