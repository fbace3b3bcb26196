//! In-memory transport for tests.

use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::MailTransport;
use crate::error::MailError;
use crate::message::MailMessage;

/// Records every message it is asked to send.
///
/// Addresses registered with [`MemoryTransport::failing_for`] make `send`
/// fail, so callers can exercise partial delivery.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    sent: Mutex<Vec<MailMessage>>,
    failing: HashSet<String>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport that rejects any message addressed to one of `addresses`.
    pub fn failing_for<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sent: Mutex::new(Vec::new()),
            failing: addresses.into_iter().map(Into::into).collect(),
        }
    }

    /// Snapshot of the messages delivered so far, in send order.
    pub async fn sent(&self) -> Vec<MailMessage> {
        self.sent.lock().await.clone()
    }

    /// Number of messages delivered so far.
    pub async fn sent_count(&self) -> usize {
        self.sent.lock().await.len()
    }
}

#[async_trait]
impl MailTransport for MemoryTransport {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn send(&self, message: &MailMessage) -> Result<(), MailError> {
        if let Some(bad) = message.to.iter().find(|to| self.failing.contains(*to)) {
            return Err(MailError::Build(format!("rejected recipient {bad}")));
        }
        self.sent.lock().await.push(message.clone());
        Ok(())
    }
}
