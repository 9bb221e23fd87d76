//! The outbound delivery seam used by the threshold monitor.

use async_trait::async_trait;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for notification delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote server returned a non-2xx status code.
    #[error("Messaging API returned HTTP {0}")]
    HttpStatus(u16),

    /// The messaging API accepted the request but reported a failure.
    #[error("Messaging API rejected the message: {0}")]
    Api(String),
}

// ---------------------------------------------------------------------------
// Notifier
// ---------------------------------------------------------------------------

/// Sends a text message to a destination (a user or channel id).
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, destination: &str, text: &str) -> Result<(), NotifyError>;
}

/// Notifier that writes each message to the log instead of delivering it.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, destination: &str, text: &str) -> Result<(), NotifyError> {
        tracing::info!(destination, text, "Notification (delivery disabled)");
        Ok(())
    }
}
