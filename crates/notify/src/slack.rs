//! Slack delivery via the Web API `chat.postMessage` method.
//!
//! [`SlackNotifier`] posts `{"channel", "text"}` JSON with a bot token in the
//! `Authorization` header. Configuration is loaded from environment
//! variables; if `SLACK_BOT_TOKEN` is not set, [`SlackConfig::from_env`]
//! returns `None` and no Slack notifier should be constructed.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::notifier::{Notifier, NotifyError};

/// Default Web API endpoint for posting messages.
pub const DEFAULT_SLACK_API_URL: &str = "https://slack.com/api/chat.postMessage";

/// HTTP request timeout for a single delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// SlackConfig
// ---------------------------------------------------------------------------

/// Configuration for the Slack notifier.
#[derive(Clone)]
pub struct SlackConfig {
    /// Bot token sent as a bearer credential.
    pub bot_token: String,
    /// Endpoint receiving the POST (overridable for testing and proxies).
    pub api_url: String,
}

impl SlackConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable          | Required | Default                                   |
    /// |-------------------|----------|-------------------------------------------|
    /// | `SLACK_BOT_TOKEN` | yes      | none                                      |
    /// | `SLACK_API_URL`   | no       | `https://slack.com/api/chat.postMessage`  |
    pub fn from_env() -> Option<Self> {
        let bot_token = std::env::var("SLACK_BOT_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty())?;
        Some(Self {
            bot_token,
            api_url: std::env::var("SLACK_API_URL")
                .unwrap_or_else(|_| DEFAULT_SLACK_API_URL.to_string()),
        })
    }
}

impl fmt::Debug for SlackConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlackConfig")
            .field("bot_token", &"<redacted>")
            .field("api_url", &self.api_url)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct PostMessage<'a> {
    channel: &'a str,
    text: &'a str,
}

/// The subset of the Web API response envelope we inspect.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

// ---------------------------------------------------------------------------
// SlackNotifier
// ---------------------------------------------------------------------------

/// Delivers notifications as Slack messages.
pub struct SlackNotifier {
    client: reqwest::Client,
    config: SlackConfig,
}

impl SlackNotifier {
    /// Create a notifier with a pre-configured HTTP client.
    pub fn new(config: SlackConfig) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl Notifier for SlackNotifier {
    /// Execute a single POST and check both the HTTP status and the `ok`
    /// field of the response body. Failures are not retried.
    async fn send(&self, destination: &str, text: &str) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.bot_token)
            .json(&PostMessage {
                channel: destination,
                text,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(NotifyError::HttpStatus(response.status().as_u16()));
        }

        let body: ApiResponse = response.json().await?;
        if !body.ok {
            return Err(NotifyError::Api(
                body.error.unwrap_or_else(|| "unknown_error".to_string()),
            ));
        }

        tracing::debug!(destination, "Slack message delivered");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_does_not_fail() {
        let config = SlackConfig {
            bot_token: "xoxb-test".into(),
            api_url: DEFAULT_SLACK_API_URL.into(),
        };
        assert!(SlackNotifier::new(config).is_ok());
    }

    #[test]
    fn debug_output_hides_the_token() {
        let config = SlackConfig {
            bot_token: "xoxb-secret".into(),
            api_url: DEFAULT_SLACK_API_URL.into(),
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("xoxb-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn payload_uses_channel_and_text_fields() {
        let payload = serde_json::to_value(PostMessage {
            channel: "U123",
            text: "hi",
        })
        .unwrap();
        assert_eq!(payload, serde_json::json!({"channel": "U123", "text": "hi"}));
    }

    #[test]
    fn api_response_error_is_optional() {
        let ok: ApiResponse = serde_json::from_str(r#"{"ok": true, "ts": "1"}"#).unwrap();
        assert!(ok.ok);
        assert!(ok.error.is_none());
    }
}
