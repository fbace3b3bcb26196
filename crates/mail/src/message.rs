//! A single outbound message.

/// One rendered email: subject, HTML body, sender and recipients.
///
/// Built per recipient and dropped after sending; nothing here is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    pub subject: String,
    pub html_body: String,
    pub from: String,
    pub to: Vec<String>,
}

impl MailMessage {
    pub fn new(
        subject: impl Into<String>,
        html_body: impl Into<String>,
        from: impl Into<String>,
        to: Vec<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            html_body: html_body.into(),
            from: from.into(),
            to,
        }
    }
}
