use std::time::Duration;

use async_trait::async_trait;
use configuration::settings::TelegramConfig;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::AlerterError;

/// Public Telegram Bot API host. Tests point the alerter elsewhere.
pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Fixed timeout applied to every outbound sendMessage call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The JSON payload for the Telegram `sendMessage` endpoint.
#[derive(Debug, Serialize)]
struct SendMessagePayload<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str, // To allow for formatting like bold, italics etc.
    disable_web_page_preview: bool,
}

/// The subset of the Telegram Bot API response envelope we inspect.
/// The HTTP status alone is not enough; the body carries its own `ok` flag.
#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    ok: bool,
    description: Option<String>,
}

/// The abstract sink for outgoing alert messages. This is the contract the
/// driver uses, allowing the underlying implementation (live or mock) to be
/// swapped out.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Delivers one message. A single attempt; no retry within the call.
    async fn notify(&self, text: &str) -> Result<(), AlerterError>;
}

/// A client for sending messages to a Telegram chat via the Bot API.
pub struct TelegramAlerter {
    client: Client,
    base_url: String,
    token: String,
    chat_id: String,
}

impl TelegramAlerter {
    /// Creates a new `TelegramAlerter` for the configured chat.
    pub fn new(config: &TelegramConfig) -> Result<Self, AlerterError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            base_url: TELEGRAM_API_BASE.to_string(),
            token: config.bot_token.clone(),
            chat_id: config.chat_id.clone(),
        })
    }

    /// Overrides the API base URL, pointing the alerter at a test server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl Notifier for TelegramAlerter {
    /// Sends a text message to the configured Telegram chat.
    async fn notify(&self, text: &str) -> Result<(), AlerterError> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);

        let payload = SendMessagePayload {
            chat_id: &self.chat_id,
            text,
            parse_mode: "Markdown",
            disable_web_page_preview: true,
        };

        let response = self.client.post(&url).json(&payload).send().await?;

        if !response.status().is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to decode error response".to_string());
            return Err(AlerterError::Api(error_text));
        }

        let body: SendMessageResponse = response.json().await?;
        if !body.ok {
            return Err(AlerterError::Api(
                body.description
                    .unwrap_or_else(|| "Telegram reported ok=false".to_string()),
            ));
        }

        tracing::info!("Message sent successfully to Telegram");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn alerter_for(server: &MockServer) -> TelegramAlerter {
        let config = TelegramConfig {
            bot_token: "123:abc".to_string(),
            chat_id: "-1002633018195".to_string(),
        };
        TelegramAlerter::new(&config)
            .unwrap()
            .with_base_url(server.uri())
    }

    #[tokio::test]
    async fn delivers_the_message_to_the_configured_chat() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bot123:abc/sendMessage"))
            .and(body_partial_json(json!({
                "chat_id": "-1002633018195",
                "text": "IOTX is up",
                "parse_mode": "Markdown"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
            .expect(1)
            .mount(&server)
            .await;

        alerter_for(&server).notify("IOTX is up").await.unwrap();
    }

    #[tokio::test]
    async fn ok_false_body_is_an_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": false,
                "description": "Bad Request: chat not found"
            })))
            .mount(&server)
            .await;

        let err = alerter_for(&server).notify("hello").await.unwrap_err();
        match err {
            AlerterError::Api(description) => {
                assert!(description.contains("chat not found"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_success_status_is_an_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({ "ok": false, "description": "Unauthorized" })),
            )
            .mount(&server)
            .await;

        assert!(matches!(
            alerter_for(&server).notify("hello").await,
            Err(AlerterError::Api(_))
        ));
    }
}
