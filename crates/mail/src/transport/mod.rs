//! Mail transports.
//!
//! [`MailTransport`] is the seam between "a message is ready" and "a message
//! left the building". The API picks one at startup:
//!
//! - [`smtp::SmtpTransport`] when `SMTP_HOST` is configured,
//! - [`log::LogTransport`] otherwise (development),
//! - [`memory::MemoryTransport`] in tests.

pub mod log;
pub mod memory;
pub mod smtp;

use async_trait::async_trait;

use crate::error::MailError;
use crate::message::MailMessage;

/// Delivers a single message.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Short name for logs (`"smtp"`, `"log"`, `"memory"`).
    fn name(&self) -> &'static str;

    /// Deliver `message` to all of its recipients.
    async fn send(&self, message: &MailMessage) -> Result<(), MailError>;
}
