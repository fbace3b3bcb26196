//! Batch delivery.

use crate::message::MailMessage;
use crate::transport::MailTransport;

/// Outcome of a [`send_mass_mail`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MassMailReport {
    /// Messages the transport accepted.
    pub sent: usize,
    /// Messages the transport rejected.
    pub failed: usize,
}

impl MassMailReport {
    pub fn total(&self) -> usize {
        self.sent + self.failed
    }
}

/// Send every message in `messages` through `transport`, one after another.
///
/// A failed message is logged and counted; it does not stop the rest of
/// the batch. Messages are not retried.
pub async fn send_mass_mail(
    transport: &dyn MailTransport,
    messages: &[MailMessage],
) -> MassMailReport {
    let mut report = MassMailReport::default();

    for message in messages {
        match transport.send(message).await {
            Ok(()) => report.sent += 1,
            Err(e) => {
                tracing::warn!(
                    transport = transport.name(),
                    to = ?message.to,
                    subject = %message.subject,
                    error = %e,
                    "Failed to send mail",
                );
                report.failed += 1;
            }
        }
    }

    tracing::debug!(
        transport = transport.name(),
        sent = report.sent,
        failed = report.failed,
        "Mass mail finished",
    );
    report
}
